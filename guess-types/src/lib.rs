//! Core types for the guess-the-number game.
//!
//! This crate provides the presentation-agnostic game model:
//! - `Setup` - The rules screen where the chance count is chosen
//! - `GameState` and `GuessResult` - One round and the result of a guess
//! - `Outcome` - The win/lose popup
//! - `Screen` and `App` - Navigation state and the controller driving it
//! - `GameBackend` trait - For implementing frontends

pub mod text;

mod setup;
pub use setup::{CHANCE_SHORTCUTS, DEFAULT_CHANCES, Setup};

mod hint;
pub use hint::{Hint, HintOrder};

mod game;
pub use game::{GameConfig, GameState, GuessResult, SECRET_RANGE, parse_guess};

mod outcome;
pub use outcome::Outcome;

mod screen;
pub use screen::{Screen, ScreenKind};

mod app;
pub use app::{Action, App, Notice, Scoreboard, Transition};

mod error;
pub use error::{GameError, GuessError, SetupError};

mod traits;
pub use traits::GameBackend;
