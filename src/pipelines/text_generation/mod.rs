use serde_json::Value;

use super::outcome::{NounDensity, Sentiment, SentimentResult};

/// Prompt templates
pub mod prompt;

pub use prompt::{Prompts, NOUN_DENSITY_PROMPT, SENTIMENT_PROMPT};

/// The unique string token that identifies this pipeline
pub static PIPELINE: &str = "text-generation";

/// The generated text from a `[{"generated_text": ...}]` response, or "" if absent
pub fn generated_text(data: &Value) -> &str {
    data.get(0)
        .and_then(|first| first.get("generated_text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// The first line of the generated text, trimmed and lowercased
pub fn first_line(text: &str) -> String {
    text.split('\n')
        .next()
        .unwrap_or_default()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Keyword match in priority order: positive, negative, neutral
pub fn sentiment(line: &str) -> SentimentResult {
    let line = line.to_lowercase();

    let sentiment = if line.contains("positive") {
        Sentiment::Positive
    } else if line.contains("negative") {
        Sentiment::Negative
    } else if line.contains("neutral") {
        Sentiment::Neutral
    } else {
        Sentiment::Unresolved
    };

    SentimentResult::new(sentiment)
}

/// Keyword match in priority order: high, medium, low. Defaults to low.
pub fn noun_density(line: &str) -> NounDensity {
    let line = line.to_lowercase();

    if line.contains("high") {
        NounDensity::High
    } else if line.contains("medium") {
        NounDensity::Medium
    } else {
        NounDensity::Low
    }
}
