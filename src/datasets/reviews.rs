use derive_new::new;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    inference::Transport,
    utils::files,
};

use super::CorpusSource;

/// The corpus path used when none is configured
pub static DEFAULT_CORPUS: &str = "reviews_test.tsv";

/// A single review from the corpus
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, new)]
pub struct Review {
    /// The review text, trimmed and never blank
    pub text: String,
}

/// A raw TSV row. Columns other than `text` are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(default)]
    text: Option<String>,
}

/// The reviews loaded for a session, in source row order
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Corpus {
    reviews: Vec<Review>,
}

impl Corpus {
    /// Fetch and parse the corpus
    pub async fn load<T: Transport + ?Sized>(source: &CorpusSource, transport: &T) -> Result<Self> {
        let data = match source {
            CorpusSource::Url(url) => {
                let response = transport.get(url.as_str()).await?;

                if !response.is_success() {
                    return Err(Error::corpus_fetch(format!(
                        "Failed to load TSV file: {}",
                        response.status
                    )));
                }

                response.body
            }
            CorpusSource::Path(path) => {
                let path = path.to_string_lossy();

                files::read_text(&path)
                    .await
                    .map_err(|e| Error::corpus_fetch(format!("{}: {}", path, e)))?
            }
        };

        let corpus = Self::parse(&data)?;

        info!("Loaded {} reviews from {}", corpus.len(), source);

        Ok(corpus)
    }

    /// Parse tab-separated text with a header row, keeping rows with a non-blank `text`
    pub fn parse(data: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_reader(data.as_bytes());

        let mut reviews = Vec::new();

        for row in reader.deserialize::<Row>() {
            if let Some(text) = row?.text {
                let text = text.trim();

                if !text.is_empty() {
                    reviews.push(Review::new(text.to_string()));
                }
            }
        }

        if reviews.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        Ok(Self { reviews })
    }

    /// Returns the number of reviews
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether no reviews were loaded
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Returns a specific review
    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    /// Iterate over the reviews in row order
    pub fn iter(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }
}

impl From<Vec<Review>> for Corpus {
    fn from(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }
}

/// Pick a review uniformly at random, returning it with its index
pub fn sample<'a, R: Rng + ?Sized>(corpus: &'a Corpus, rng: &mut R) -> Result<(usize, &'a Review)> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let index = rng.gen_range(0..corpus.len());

    debug!("Sampled review {} of {}", index, corpus.len());

    corpus
        .get(index)
        .map(|review| (index, review))
        .ok_or(Error::EmptyCorpus)
}
