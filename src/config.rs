use serde::{Deserialize, Serialize};

use crate::{
    datasets::DEFAULT_CORPUS,
    error::{Error, Result},
    models,
    pipelines::{
        text_generation::{NOUN_DENSITY_PROMPT, SENTIMENT_PROMPT},
        Pipeline,
    },
    utils::{files, hugging_face},
};

/// Session configuration. Every field has a default, so a YAML file only needs
/// the values it overrides. The API token is deliberately not part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Corpus path or http(s) URL
    pub corpus: String,

    /// The pipeline to use (e.g. "text-classification")
    pub pipeline: Pipeline,

    /// Root URL of the hosted Inference API
    pub inference_url: String,

    /// Model used by the text-classification pipeline
    pub classification_model: String,

    /// Model used by the text-generation pipeline
    pub generation_model: String,

    /// Prompt templates for the text-generation pipeline
    pub prompts: PromptConfig,
}

/// Liquid templates for prompted completion. The review is available as `{{ text }}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Sentiment classification instruction
    pub sentiment: String,

    /// Noun density instruction
    pub noun_density: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus: DEFAULT_CORPUS.to_string(),
            pipeline: Pipeline::default(),
            inference_url: hugging_face::INFERENCE_API_URL.to_string(),
            classification_model: models::default_model(Pipeline::TextClassification).to_string(),
            generation_model: models::default_model(Pipeline::TextGeneration).to_string(),
            prompts: PromptConfig::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            sentiment: SENTIMENT_PROMPT.to_string(),
            noun_density: NOUN_DENSITY_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn load(path: &str) -> Result<Self> {
        let data = files::read_text(path)
            .await
            .map_err(|e| Error::Config(format!("unable to read {}: {}", path, e)))?;

        Self::from_yaml(&data)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(data: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(data)?)
    }

    /// The model configured for a pipeline
    pub fn model(&self, pipeline: Pipeline) -> &str {
        match pipeline {
            Pipeline::TextClassification => &self.classification_model,
            Pipeline::TextGeneration => &self.generation_model,
        }
    }

    /// The endpoint URL for a pipeline
    pub fn endpoint(&self, pipeline: Pipeline) -> String {
        hugging_face::inference_endpoint(&self.inference_url, self.model(pipeline))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = Config::default();

        assert_eq!(config.corpus, "reviews_test.tsv");
        assert_eq!(
            config.endpoint(Pipeline::TextClassification),
            "https://api-inference.huggingface.co/models/siebert/sentiment-roberta-large-english"
        );
        assert_eq!(
            config.endpoint(Pipeline::TextGeneration),
            "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct"
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml(
            "pipeline: text-generation\nprompts:\n  sentiment: \"Sentiment of: {{ text }}\"\n",
        )
        .unwrap();

        assert_eq!(config.pipeline, Pipeline::TextGeneration);
        assert_eq!(config.prompts.sentiment, "Sentiment of: {{ text }}");
        assert_eq!(config.prompts.noun_density, NOUN_DENSITY_PROMPT);
        assert_eq!(config.generation_model, "tiiuae/falcon-7b-instruct");
    }

    #[test]
    fn test_unknown_pipeline_is_rejected() {
        assert!(matches!(
            Config::from_yaml("pipeline: summarization\n"),
            Err(Error::Config(_))
        ));
    }
}
