use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::pipelines::Pipeline;

/// Model Variants
/// --------------

/// A RoBERTa-large sentiment classifier returning POSITIVE/NEGATIVE scores
pub static SIEBERT_SENTIMENT: &str = "siebert/sentiment-roberta-large-english";

/// An instruction-tuned generative model
pub static FALCON_7B_INSTRUCT: &str = "tiiuae/falcon-7b-instruct";

lazy_static! {
    /// Default hosted model for each pipeline
    pub static ref DEFAULT_MODEL_BY_PIPELINE: HashMap<Pipeline, &'static str> = [
        (Pipeline::TextClassification, SIEBERT_SENTIMENT),
        (Pipeline::TextGeneration, FALCON_7B_INSTRUCT),
    ]
    .iter()
    .copied()
    .collect();
}

/// Get the default model for a pipeline
pub fn default_model(pipeline: Pipeline) -> &'static str {
    DEFAULT_MODEL_BY_PIPELINE[&pipeline]
}
