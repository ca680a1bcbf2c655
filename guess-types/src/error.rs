use serde::{Deserialize, Serialize};

use crate::text;

/// Error returned when a round cannot be started from the setup screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum SetupError {
    /// The chance count is zero or negative.
    #[error("Choose at least one chance (got {0})")]
    NoChances(i32),
}

/// Error for guess input that is not an integer.
///
/// A rejected guess never consumes a chance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum GuessError {
    #[error("{}", text::NO_NUMBER_ENTERED)]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Error type for game operations.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The action does not exist on the current screen (e.g. a guess on the setup screen).
    #[error("Action '{action}' is not available on the {screen} screen")]
    InvalidAction {
        action: &'static str,
        screen: &'static str,
    },

    /// User quit the game (Ctrl+C, closed terminal, etc.)
    #[error("Game cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl GameError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(GuessError::Empty.to_string(), "No number entered");
        assert_eq!(
            GuessError::NotANumber("abc".into()).to_string(),
            "'abc' is not a number"
        );
        assert_eq!(
            SetupError::NoChances(0).to_string(),
            "Choose at least one chance (got 0)"
        );

        let err = GameError::InvalidAction {
            action: "Restart",
            screen: "game",
        };
        assert_eq!(
            err.to_string(),
            "Action 'Restart' is not available on the game screen"
        );
    }

    #[test]
    fn cancellation() {
        assert!(GameError::Cancelled.is_cancelled());
        assert!(!GameError::backend(std::io::Error::other("boom")).is_cancelled());
    }
}
