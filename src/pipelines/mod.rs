use std::fmt::Display;

/// Structured label/score classification
pub mod text_classification;

/// Prompted free-text completion
pub mod text_generation;

/// Interpreted results
pub mod outcome;

pub use outcome::{NounDensity, Outcome, Sentiment, SentimentResult};

/// Available Pipelines
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Pipeline {
    /// Direct classification: the review is sent as-is and the model returns labels and scores
    #[default]
    TextClassification,

    /// Prompted completion: an instruction wraps the review and the model returns free text
    TextGeneration,
}

impl Pipeline {
    /// Get the unique string token that identifies this pipeline
    pub fn as_str(&self) -> &'static str {
        match self {
            Pipeline::TextClassification => text_classification::PIPELINE,
            Pipeline::TextGeneration => text_generation::PIPELINE,
        }
    }

    /// The tasks this pipeline can perform
    pub fn tasks(&self) -> &'static [Task] {
        match self {
            Pipeline::TextClassification => &[Task::Sentiment],
            Pipeline::TextGeneration => &[Task::Sentiment, Task::NounDensity],
        }
    }

    /// Check if the task is valid for this pipeline
    pub fn supports(&self, task: Task) -> bool {
        self.tasks().contains(&task)
    }
}

impl TryFrom<&str> for Pipeline {
    type Error = PipelineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == text_classification::PIPELINE {
            Ok(Pipeline::TextClassification)
        } else if value == text_generation::PIPELINE {
            Ok(Pipeline::TextGeneration)
        } else {
            Err(PipelineError::Unknown(value.to_string()))
        }
    }
}

impl TryFrom<String> for Pipeline {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Pipeline::try_from(value.as_str())
    }
}

impl From<Pipeline> for String {
    fn from(pipeline: Pipeline) -> Self {
        pipeline.as_str().to_string()
    }
}

impl Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a user can ask the model about a review
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Task {
    /// Positive, negative or neutral
    Sentiment,

    /// High, medium or low noun count
    NounDensity,
}

impl Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Task::Sentiment => "sentiment",
            Task::NounDensity => "noun density",
        };

        write!(f, "{}", name)
    }
}

/// Pipeline Error
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// No pipeline found for the given string
    #[error("no pipeline found for {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_pipeline_tokens() {
        assert_eq!(
            Pipeline::try_from("text-classification").unwrap(),
            Pipeline::TextClassification
        );
        assert_eq!(
            Pipeline::try_from("text-generation").unwrap(),
            Pipeline::TextGeneration
        );
        assert_eq!(Pipeline::TextGeneration.to_string(), "text-generation");
        assert!(Pipeline::try_from("summarization").is_err());
    }

    #[test]
    fn test_supported_tasks() {
        assert!(Pipeline::TextClassification.supports(Task::Sentiment));
        assert!(!Pipeline::TextClassification.supports(Task::NounDensity));
        assert!(Pipeline::TextGeneration.supports(Task::NounDensity));
    }
}
