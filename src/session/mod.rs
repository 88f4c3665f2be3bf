/// View state and the presentation state machine
pub mod state;

/// The session controller
pub mod controller;

pub use controller::Session;
pub use state::{Phase, View};
