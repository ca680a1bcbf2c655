use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Setup, text};

/// Result of a finished round, shown in the game-over popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    is_winner: bool,
}

impl Outcome {
    pub fn new(is_winner: bool) -> Self {
        Self { is_winner }
    }

    pub fn is_winner(&self) -> bool {
        self.is_winner
    }

    /// Leave the popup for a brand-new setup screen.
    ///
    /// The chance count goes back to the default, whatever the last round used.
    pub fn restart(self) -> Setup {
        Setup::new()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_winner { text::WON } else { text::LOST })
    }
}
