//! Ratatui frontend for the guess-the-number game.
//!
//! Draws each screen full-screen in the terminal:
//! - Setup: rules, a chances field, `+3`/`+5`/`+10`/`+15` buttons and Start
//! - Game: chances left, the latest hint and a guess field
//! - Outcome: a win or lose message with Play Again
//!
//! Tab moves between the setup controls and Enter presses the focused one.
//! Esc leaves the current screen. Ctrl+C cancels the session.

mod backend;
mod state;
mod ui;

pub use backend::{RatatuiBackend, RatatuiError, Theme};
