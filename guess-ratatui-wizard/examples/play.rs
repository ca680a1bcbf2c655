use guess::{App, HintOrder};
use guess_ratatui_wizard::RatatuiBackend;

fn main() -> anyhow::Result<()> {
    let mut app = App::new(HintOrder::Numeric);
    let score = app.run(RatatuiBackend::new())?;

    println!(
        "Won {} / Lost {} / Abandoned {}",
        score.wins, score.losses, score.abandoned
    );
    Ok(())
}
