//! Scripted backend for playing sessions without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of actions against an [`App`]. This
//! is useful for testing the game flow, and for replaying a session recorded
//! elsewhere.
//!
//! # Example
//!
//! ```rust
//! use guess::{App, HintOrder, ScreenKind, ScriptedBackend};
//!
//! let mut app = App::seeded(HintOrder::Numeric, 1);
//! let score = app
//!     .run(
//!         ScriptedBackend::new()
//!             .increment(3)
//!             .start()
//!             .exit(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(score.abandoned, 1);
//! assert_eq!(app.screen().kind(), ScreenKind::Setup);
//! ```

use rand::Rng;
use tracing::debug;

use crate::{Action, App, GameBackend, GameError};

/// A backend that dispatches pre-configured actions in order.
///
/// The session ends when the script runs out, wherever the game is.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    actions: Vec<Action>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step} failed: {source}")]
    Step {
        step: usize,
        #[source]
        source: GameError,
    },
}

impl ScriptedBackend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Append any action.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Press a chance shortcut button.
    pub fn increment(self, by: i32) -> Self {
        self.with_action(Action::Increment(by))
    }

    /// Type into the chances field.
    pub fn set_chances(self, text: impl Into<String>) -> Self {
        self.with_action(Action::SetChancesText(text.into()))
    }

    pub fn start(self) -> Self {
        self.with_action(Action::Start)
    }

    /// Type a guess and submit it.
    pub fn guess(self, text: impl Into<String>) -> Self {
        self.with_action(Action::Guess(text.into()))
    }

    /// Type a guess without submitting it.
    pub fn type_guess(self, text: impl Into<String>) -> Self {
        self.with_action(Action::SetGuessText(text.into()))
    }

    /// Submit the guess field.
    pub fn check_guess(self) -> Self {
        self.with_action(Action::SubmitGuess)
    }

    pub fn exit(self) -> Self {
        self.with_action(Action::Exit)
    }

    pub fn restart(self) -> Self {
        self.with_action(Action::Restart)
    }

    /// The actions this backend will dispatch.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl GameBackend for ScriptedBackend {
    type Error = ScriptError;

    fn play<R: Rng>(&self, app: &mut App<R>) -> Result<(), Self::Error> {
        for (step, action) in self.actions.iter().cloned().enumerate() {
            let transition = app
                .dispatch(action)
                .map_err(|source| ScriptError::Step { step, source })?;
            debug!(step, ?transition, "Scripted action applied");
        }
        Ok(())
    }
}
