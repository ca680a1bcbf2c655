use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GameState, Outcome, Setup};

/// The screen currently shown, with its state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Setup(Setup),
    Game(GameState),
    Outcome(Outcome),
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Setup(_) => ScreenKind::Setup,
            Self::Game(_) => ScreenKind::Game,
            Self::Outcome(_) => ScreenKind::Outcome,
        }
    }

    pub fn as_setup(&self) -> Option<&Setup> {
        match self {
            Self::Setup(setup) => Some(setup),
            _ => None,
        }
    }

    pub fn as_game(&self) -> Option<&GameState> {
        match self {
            Self::Game(game) => Some(game),
            _ => None,
        }
    }

    pub fn as_outcome(&self) -> Option<&Outcome> {
        match self {
            Self::Outcome(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::Setup(Setup::new())
    }
}

/// Which screen is shown, without its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenKind {
    Setup,
    Game,
    Outcome,
}

impl ScreenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Game => "game",
            Self::Outcome => "outcome",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
