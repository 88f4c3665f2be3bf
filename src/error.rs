/// A [`Result`](std::result::Result) alias using [`Error`] as the error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a session can surface to the user
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The corpus file or an API endpoint was unreachable or returned a non-2xx status
    #[error("{resource}: {reason}")]
    Fetch {
        /// What was being fetched
        resource: Resource,

        /// What went wrong
        reason: String,
    },

    /// Malformed delimited text or malformed JSON
    #[error("{0}")]
    Parse(String),

    /// No usable rows were found in the corpus
    #[error("No valid reviews found in the TSV file")]
    EmptyCorpus,

    /// HTTP 401
    #[error("Invalid API token")]
    InvalidToken,

    /// HTTP 402
    #[error("Payment required - please check your API token")]
    PaymentRequired,

    /// HTTP 429
    #[error("Rate limit exceeded. Please try again later or use an API token")]
    RateLimit,

    /// HTTP 503, the hosted model is cold-starting
    #[error("Model is loading, please try again in a few seconds")]
    ModelLoading,

    /// Any other non-success status, or an explicit `error` field in the body
    #[error("API request failed: {status} {message}")]
    Api {
        /// The HTTP status code of the response
        status: u16,

        /// The status text, or the error message reported by the API
        message: String,
    },

    /// Well-formed JSON that doesn't have the expected shape
    #[error("{0}")]
    MalformedResponse(String),

    /// A review was requested before any were loaded
    #[error("No reviews loaded yet")]
    NoReviewsLoaded,

    /// An analysis was requested before any review was sampled
    #[error("Please select a review first")]
    NoReviewSelected,

    /// The task can't be performed by the selected pipeline
    #[error("{task} is not supported by the {pipeline} pipeline")]
    UnsupportedTask {
        /// The requested task
        task: String,

        /// The active pipeline
        pipeline: String,
    },

    /// Invalid configuration or prompt template
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The kind of resource a [`Error::Fetch`] failed on
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    /// The review corpus
    Corpus,

    /// A model endpoint
    Endpoint,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self {
            Resource::Corpus => "Error loading reviews",
            Resource::Endpoint => "Analysis failed",
        };

        write!(f, "{}", prefix)
    }
}

impl Error {
    /// Build a fetch error for the review corpus
    pub fn corpus_fetch(reason: impl std::fmt::Display) -> Self {
        Error::Fetch {
            resource: Resource::Corpus,
            reason: reason.to_string(),
        }
    }

    /// Build a fetch error for an unreachable model endpoint
    pub fn endpoint_fetch(reason: impl std::fmt::Display) -> Self {
        Error::Fetch {
            resource: Resource::Endpoint,
            reason: reason.to_string(),
        }
    }

    /// Build a parse error for a malformed corpus file
    pub fn corpus_parse(message: impl std::fmt::Display) -> Self {
        Error::Parse(format!("Error parsing TSV file: {}", message))
    }

    /// Build a parse error for a response body that isn't valid JSON
    pub fn json_parse(message: impl std::fmt::Display) -> Self {
        Error::Parse(format!("Malformed JSON response: {}", message))
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::corpus_parse(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::json_parse(value)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(value: serde_yaml::Error) -> Self {
        Error::Config(value.to_string())
    }
}

impl From<liquid::Error> for Error {
    fn from(value: liquid::Error) -> Self {
        Error::Config(format!("invalid prompt template: {}", value))
    }
}
