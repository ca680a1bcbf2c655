//! # guess-dialoguer-wizard
//!
//! Dialoguer backend for the guess-the-number game.
//!
//! This crate plays the game as a classic CLI wizard using the `dialoguer`
//! library: the setup screen is a menu of chance shortcuts, the game screen is
//! a line prompt for each guess, and the popup asks whether to play again.
//!
//! ## Example
//!
//! ```rust,ignore
//! use guess::{App, HintOrder};
//! use guess_dialoguer_wizard::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut app = App::new(HintOrder::Numeric);
//!     let score = app.run(DialoguerBackend::new())?;
//!     println!("Won {} of {} rounds", score.wins, score.rounds());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
