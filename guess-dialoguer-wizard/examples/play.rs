//! Play one session with the dialoguer backend.
//!
//! Run with: cargo run -p guess-dialoguer-wizard --example play

use guess::{App, HintOrder};
use guess_dialoguer_wizard::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let mut app = App::new(HintOrder::Numeric);
    let score = app.run(DialoguerBackend::new())?;
    println!("{score:#?}");
    Ok(())
}
