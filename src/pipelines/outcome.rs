use std::fmt::{self, Display};

/// The display categories for a sentiment prediction
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Sentiment {
    /// Positive
    Positive,

    /// Negative
    Negative,

    /// Neutral, or a structured prediction at or below the confidence cutoff
    Neutral,

    /// Generated text that named none of the categories
    Unresolved,
}

impl Sentiment {
    /// The icon shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "👍",
            Sentiment::Negative => "👎",
            Sentiment::Neutral | Sentiment::Unresolved => "❓",
        }
    }

    /// The display label
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral | Sentiment::Unresolved => "Neutral/Uncertain",
        }
    }

    /// Unresolved results render exactly like neutral ones
    pub fn is_neutral_equivalent(&self) -> bool {
        matches!(self, Sentiment::Neutral | Sentiment::Unresolved)
    }
}

/// An interpreted sentiment, with a confidence when the model reported one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentResult {
    /// The display category
    pub sentiment: Sentiment,

    /// The model score in `[0, 1]`, only present for structured classification
    pub confidence: Option<f64>,
}

impl SentimentResult {
    /// A result with no confidence score
    pub fn new(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            confidence: None,
        }
    }

    /// A result carrying the model's score
    pub fn with_confidence(sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence: Some(confidence),
        }
    }

    /// The confidence as a percentage with one decimal place, e.g. "92.0% confidence"
    pub fn confidence_text(&self) -> Option<String> {
        self.confidence
            .map(|score| format!("{:.1}% confidence", score * 100.0))
    }
}

impl Display for SentimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.confidence_text() {
            Some(confidence) => write!(f, "{} ({})", self.sentiment.label(), confidence),
            None => write!(f, "{}", self.sentiment.label()),
        }
    }
}

/// A coarse estimate of how noun-heavy a review is
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum NounDensity {
    /// More than 15 nouns
    High,

    /// 6 to 15 nouns
    Medium,

    /// Fewer than 6 nouns, and the fallback when the model named no bucket
    Low,
}

impl NounDensity {
    /// The icon shown for the bucket
    pub fn icon(&self) -> &'static str {
        match self {
            NounDensity::High => "🟢",
            NounDensity::Medium => "🟡",
            NounDensity::Low => "🔴",
        }
    }

    /// The display label
    pub fn label(&self) -> &'static str {
        match self {
            NounDensity::High => "High",
            NounDensity::Medium => "Medium",
            NounDensity::Low => "Low",
        }
    }
}

impl Display for NounDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The interpreted result of one analysis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A sentiment result
    Sentiment(SentimentResult),

    /// A noun density bucket
    NounDensity(NounDensity),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sentiment(result) => write!(f, "{} {}", result.sentiment.icon(), result),
            Outcome::NounDensity(density) => write!(f, "{} {}", density.icon(), density),
        }
    }
}
