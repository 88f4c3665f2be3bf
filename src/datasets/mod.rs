use std::{fmt::Display, path::PathBuf};

use url::Url;

/// The review corpus
pub mod reviews;

pub use reviews::{sample, Corpus, Review, DEFAULT_CORPUS};

/// Where a corpus is loaded from
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CorpusSource {
    /// An http(s) URL fetched with GET
    Url(Url),

    /// A local file
    Path(PathBuf),
}

impl From<&str> for CorpusSource {
    /// Anything that isn't an http(s) URL is treated as a path
    fn from(value: &str) -> Self {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CorpusSource::Url(url),
            _ => CorpusSource::Path(PathBuf::from(value)),
        }
    }
}

impl Default for CorpusSource {
    fn default() -> Self {
        CorpusSource::Path(PathBuf::from(DEFAULT_CORPUS))
    }
}

impl Display for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::Url(url) => write!(f, "{}", url),
            CorpusSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
