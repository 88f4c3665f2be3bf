use std::fmt::Display;

use crate::pipelines::Task;

/// Help text for interactive mode
pub const COMMANDS: &str = "\
Commands:
  s, sample            Pick a random review
  a, sentiment         Analyze the sentiment of the current review
  n, nouns             Estimate the noun density of the current review
  h, help              Print this help
  q, quit              Exit
";

/// An interactive command
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Sample a new review
    Sample,

    /// Run a task on the current review
    Analyze(Task),

    /// Print the command list
    Help,

    /// Leave interactive mode
    Quit,
}

impl TryFrom<&str> for Command {
    type Error = CommandError;

    /// Commands are matched case-insensitively, by name or by their short alias
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "s" | "sample" => Ok(Command::Sample),
            "a" | "sentiment" => Ok(Command::Analyze(Task::Sentiment)),
            "n" | "nouns" => Ok(Command::Analyze(Task::NounDensity)),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(value.trim().to_string())),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Command::Sample => "sample",
            Command::Analyze(Task::Sentiment) => "sentiment",
            Command::Analyze(Task::NounDensity) => "nouns",
            Command::Help => "help",
            Command::Quit => "quit",
        };

        write!(f, "{}", name)
    }
}

/// Command Error
#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    /// No command found for the given string
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::try_from("s").unwrap(), Command::Sample);
        assert_eq!(
            Command::try_from(" Sentiment ").unwrap(),
            Command::Analyze(Task::Sentiment)
        );
        assert_eq!(
            Command::try_from("nouns").unwrap(),
            Command::Analyze(Task::NounDensity)
        );
        assert_eq!(Command::try_from("QUIT").unwrap(), Command::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let err = Command::try_from("train").unwrap_err();

        assert_eq!(
            err.to_string(),
            "unknown command 'train', type 'help' for a list of commands"
        );
    }

    #[test]
    fn test_display_round_trips() {
        for command in [
            Command::Sample,
            Command::Analyze(Task::Sentiment),
            Command::Analyze(Task::NounDensity),
            Command::Help,
            Command::Quit,
        ] {
            assert_eq!(Command::try_from(command.to_string().as_str()).unwrap(), command);
        }
    }
}
