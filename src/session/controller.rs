use std::io::Stdout;

use log::{info, warn};

use crate::{
    datasets::{self, Corpus, CorpusSource, Review},
    error::{Error, Result},
    inference::{Analyzer, HttpTransport, Transport},
    pipelines::Task,
    utils::renderer::{Renderer, Terminal},
};

use super::state::View;

/// One user's session: the loaded corpus, the analyzer and what is on screen.
///
/// Failures are recorded in the view. Actions take `&mut self`, so at most one
/// request is outstanding.
pub struct Session<T = HttpTransport, R = Terminal<Stdout>> {
    corpus: Corpus,
    analyzer: Analyzer<T>,
    renderer: R,
    view: View,
}

impl<T: Transport, R: Renderer> Session<T, R> {
    /// Create a session over an already loaded corpus
    pub fn new(corpus: Corpus, analyzer: Analyzer<T>, renderer: R) -> Self {
        Self {
            corpus,
            analyzer,
            renderer,
            view: View::default(),
        }
    }

    /// Load the corpus and start a session. A load failure is shown in the view
    /// and leaves the session with an empty corpus.
    pub async fn open(source: &CorpusSource, analyzer: Analyzer<T>, renderer: R) -> Self {
        let loaded = Corpus::load(source, analyzer.client().transport()).await;

        match loaded {
            Ok(corpus) => Self::new(corpus, analyzer, renderer),
            Err(err) => {
                let mut session = Self::new(Corpus::default(), analyzer, renderer);
                session.fail(&err);
                session.render();

                session
            }
        }
    }

    /// The loaded corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The current view state
    pub fn view(&self) -> &View {
        &self.view
    }

    /// The analyzer requests are sent through
    pub fn analyzer(&self) -> &Analyzer<T> {
        &self.analyzer
    }

    /// The renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Pick a random review and present it, clearing any previous result
    pub fn sample(&mut self) -> Result<Review> {
        let sampled = if self.corpus.is_empty() {
            Err(Error::NoReviewsLoaded)
        } else {
            datasets::sample(&self.corpus, &mut rand::thread_rng()).map(|(_, review)| review.clone())
        };

        match &sampled {
            Ok(review) => self.view.present(review.clone()),
            Err(err) => self.fail(err),
        }

        self.render();

        sampled
    }

    /// Analyze the current review
    pub async fn analyze(&mut self, task: Task, token: Option<&str>) -> &View {
        let Some(review) = self.view.current_review.clone() else {
            self.fail(&Error::NoReviewSelected);
            self.render();

            return &self.view;
        };

        self.view.begin_loading();
        self.render();

        match self.analyzer.analyze(&review.text, task, token).await {
            Ok(outcome) => {
                info!("{} result: {}", task, outcome);
                self.view.show_outcome(outcome);
            }
            Err(err) => self.fail(&err),
        }

        self.render();

        &self.view
    }

    /// Sample a review and analyze it in one action
    pub async fn analyze_random(&mut self, task: Task, token: Option<&str>) -> &View {
        if self.sample().is_err() {
            return &self.view;
        }

        self.analyze(task, token).await
    }

    fn fail(&mut self, err: &Error) {
        warn!("{}", err);
        self.view.show_error(err.to_string());
    }

    fn render(&mut self) {
        if let Err(err) = self.renderer.render(&self.view) {
            warn!("Unable to render the view: {}", err);
        }
    }
}
