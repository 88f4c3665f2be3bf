use crate::{
    datasets::Review,
    pipelines::{NounDensity, Outcome, SentimentResult},
};

/// Where the presentation state machine currently is
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// Nothing in flight, no result or error displayed
    #[default]
    Idle,

    /// A request is outstanding
    Loading,

    /// The last analysis succeeded
    ResultShown,

    /// The last action failed
    ErrorShown,
}

/// Everything the renderer needs to draw the session
#[derive(Clone, Debug, Default, PartialEq)]
pub struct View {
    /// The current state machine phase
    pub phase: Phase,

    /// The review most recently sampled
    pub current_review: Option<Review>,

    /// The displayed sentiment result, if any
    pub sentiment: Option<SentimentResult>,

    /// The displayed noun density bucket, if any
    pub noun_density: Option<NounDensity>,

    /// The displayed error message, if any
    pub error: Option<String>,
}

impl View {
    /// Action controls are disabled only while a request is outstanding
    pub fn controls_enabled(&self) -> bool {
        self.phase != Phase::Loading
    }

    /// Whether the loading indicator is shown
    pub fn spinner_visible(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Clear displayed results and errors, keeping the current review
    pub fn clear_results(&mut self) {
        self.sentiment = None;
        self.noun_density = None;
        self.error = None;
        self.phase = Phase::Idle;
    }

    /// Show a newly sampled review with a clean display
    pub fn present(&mut self, review: Review) {
        self.clear_results();
        self.current_review = Some(review);
    }

    /// Enter `Loading`, clearing the previous display first
    pub fn begin_loading(&mut self) {
        self.clear_results();
        self.phase = Phase::Loading;
    }

    /// Display an interpreted result
    pub fn show_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Sentiment(result) => self.sentiment = Some(result),
            Outcome::NounDensity(density) => self.noun_density = Some(density),
        }

        self.phase = Phase::ResultShown;
    }

    /// Display an error message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = Phase::ErrorShown;
    }
}
