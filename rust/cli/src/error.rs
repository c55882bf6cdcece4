//! Error type shared by every command handler.

use std::fmt;

use seotda_engine::errors::GameError;
use seotda_game::SessionError;

use crate::config::ConfigError;

/// Errors a command can fail with. Each maps to exit code `2` except
/// [`CliError::Interrupted`].
#[derive(Debug)]
pub enum CliError {
    /// I/O error (stdout/stderr writes, config file reads)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    Config(ConfigError),

    /// A game rule rejected the operation
    Game(GameError),

    /// Opponent could not be created
    Session(SessionError),

    /// Funds or card invariants broken during a run
    Invariant(String),

    /// Input ended before the command finished
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Game(e) => write!(f, "Game error: {}", e),
            CliError::Session(e) => write!(f, "{}", e),
            CliError::Invariant(msg) => write!(f, "Invariant violated: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Game(e) => Some(e),
            CliError::Session(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Game(error)
    }
}

impl From<SessionError> for CliError {
    fn from(error: SessionError) -> Self {
        CliError::Session(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Io(std::io::Error::other(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_errors_keep_their_message() {
        let e = CliError::from(GameError::RaiseNotAllowed);
        assert!(e.to_string().starts_with("Game error: "));
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn invalid_input_display() {
        let e = CliError::InvalidInput("need two cards".to_string());
        assert_eq!(e.to_string(), "Invalid input: need two cards");
    }
}
