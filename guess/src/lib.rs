//! # guess
//!
//! A guess-the-number game. Frontend-agnostic.
//!
//! The game is three screens: a setup screen where the player picks how many
//! chances they get, the game screen where they guess a secret number between
//! 1 and 100, and a popup telling them whether they won.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guess::{App, HintOrder};
//! use guess_dialoguer_wizard::DialoguerBackend;
//!
//! let mut app = App::new(HintOrder::Numeric);
//! let score = app.run(DialoguerBackend::new())?;
//! println!("{} wins, {} losses", score.wins, score.losses);
//! ```
//!
//! ## Driving the game directly
//!
//! Every frontend goes through [`App::dispatch`]:
//!
//! ```rust
//! use guess::{Action, App, HintOrder, Screen};
//!
//! let mut app = App::seeded(HintOrder::Numeric, 7);
//! app.dispatch(Action::Increment(5)).unwrap();
//! app.dispatch(Action::Start).unwrap();
//!
//! let secret = app.screen().as_game().unwrap().secret();
//! app.dispatch(Action::Guess(secret.to_string())).unwrap();
//! assert!(matches!(app.screen(), Screen::Outcome(o) if o.is_winner()));
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `GameBackend`:
//! - `guess-dialoguer-wizard` - CLI prompts via dialoguer
//! - `guess-ratatui-wizard` - Full-screen TUI

// Re-export all types from guess-types
pub use guess_types::*;

// Scripted backend for playing sessions without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend};
