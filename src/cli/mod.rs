/// Interactive commands
pub mod commands;

pub use commands::{Command, CommandError, COMMANDS};
