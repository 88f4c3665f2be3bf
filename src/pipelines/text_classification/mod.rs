use serde_json::Value;

use crate::error::{Error, Result};

use super::outcome::{Sentiment, SentimentResult};

/// The unique string token that identifies this pipeline
pub static PIPELINE: &str = "text-classification";

/// Predictions at or below this score are never reported as positive or negative
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// The top-ranked label and score returned by a classification model
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// The class label (e.g. "POSITIVE")
    pub label: String,

    /// The model score for the label
    pub score: f64,
}

/// Extract the top prediction from a `[[{label, score}, ...]]` response
pub fn top_prediction(data: &Value) -> Result<Prediction> {
    let ranked = data
        .as_array()
        .and_then(|outer| outer.first())
        .and_then(Value::as_array)
        .ok_or_else(|| Error::MalformedResponse("Unexpected API response format".to_string()))?;

    let invalid = || Error::MalformedResponse("Invalid sentiment analysis result".to_string());

    let top = ranked.first().ok_or_else(invalid)?;

    let label = top
        .get("label")
        .and_then(Value::as_str)
        .filter(|label| !label.is_empty())
        .ok_or_else(invalid)?;

    let score = top.get("score").and_then(Value::as_f64).ok_or_else(invalid)?;

    Ok(Prediction {
        label: label.to_string(),
        score,
    })
}

impl From<&Prediction> for SentimentResult {
    fn from(prediction: &Prediction) -> Self {
        let confident = prediction.score > CONFIDENCE_THRESHOLD;

        let sentiment = match prediction.label.as_str() {
            "POSITIVE" if confident => Sentiment::Positive,
            "NEGATIVE" if confident => Sentiment::Negative,
            _ => Sentiment::Neutral,
        };

        SentimentResult::with_confidence(sentiment, prediction.score)
    }
}

/// Interpret a structured classification response
pub fn interpret(data: &Value) -> Result<SentimentResult> {
    let prediction = top_prediction(data)?;

    Ok(SentimentResult::from(&prediction))
}
