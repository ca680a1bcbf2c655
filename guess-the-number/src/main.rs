//! Guess the Number - pick how many chances you get, then find the secret
//! between 1 and 100.

use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use guess::{App, GameError, HintOrder, Scoreboard};
use guess_dialoguer_wizard::{DialoguerBackend, DialoguerError};
use guess_ratatui_wizard::{RatatuiBackend, RatatuiError};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter};

#[derive(Debug, Parser)]
#[command(name = "guess-the-number")]
#[command(about = "Guess the secret number between 1 and 100")]
struct Args {
    /// Which terminal frontend to play in
    #[arg(long, value_enum, default_value = "prompt")]
    frontend: Frontend,

    /// How guesses are compared with the secret for hints
    #[arg(long, value_enum, default_value = "numeric")]
    hint_order: HintOrderArg,

    /// Seed for the secret number (for reproducible rounds)
    #[arg(long)]
    seed: Option<u64>,

    /// Plain prompts without colors
    #[arg(long)]
    plain: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Frontend {
    /// Line-by-line prompts
    Prompt,
    /// Full-screen terminal UI
    Tui,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HintOrderArg {
    Numeric,
    Lexicographic,
}

impl From<HintOrderArg> for HintOrder {
    fn from(arg: HintOrderArg) -> Self {
        match arg {
            HintOrderArg::Numeric => HintOrder::Numeric,
            HintOrderArg::Lexicographic => HintOrder::Lexicographic,
        }
    }
}

/// Log filter: `RUST_LOG` if set, otherwise `debug` or `warn`.
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    match rust_log {
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    }
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let filter = log_filter(args.verbose, std::env::var("RUST_LOG").ok());

    let (writer, ansi) = match (&args.log_file, args.frontend) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        // The TUI owns the screen.
        (None, Frontend::Tui) => (BoxMakeWriter::new(std::io::sink), false),
        (None, Frontend::Prompt) => (BoxMakeWriter::new(std::io::stderr), true),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .init();
    Ok(())
}

/// Whether the session ended because the player cancelled it.
fn is_cancelled(err: &anyhow::Error) -> bool {
    if let Some(err) = err.downcast_ref::<DialoguerError>() {
        return matches!(
            err,
            DialoguerError::Cancelled | DialoguerError::Game(GameError::Cancelled)
        );
    }
    if let Some(err) = err.downcast_ref::<RatatuiError>() {
        return matches!(
            err,
            RatatuiError::Cancelled | RatatuiError::Game(GameError::Cancelled)
        );
    }
    err.downcast_ref::<GameError>()
        .is_some_and(GameError::is_cancelled)
}

fn summary(score: &Scoreboard) -> String {
    format!(
        "Rounds: {}  Won: {}  Lost: {}  Abandoned: {}",
        score.rounds(),
        score.wins,
        score.losses,
        score.abandoned
    )
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let hint_order = HintOrder::from(args.hint_order);
    let mut app = match args.seed {
        Some(seed) => App::seeded(hint_order, seed),
        None => App::new(hint_order),
    };
    info!(frontend = ?args.frontend, ?hint_order, seed = ?args.seed, "Starting session");

    let result = match args.frontend {
        Frontend::Prompt if args.plain => app.run(DialoguerBackend::plain()),
        Frontend::Prompt => app.run(DialoguerBackend::new()),
        Frontend::Tui => app.run(RatatuiBackend::new()),
    };

    match result {
        Ok(score) => {
            info!(?score, "Session finished");
            println!("{}", summary(&score));
            Ok(())
        }
        Err(err) if is_cancelled(&err) => {
            info!("Session cancelled");
            println!("Game cancelled.");
            println!("{}", summary(app.scoreboard()));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["guess-the-number"]).unwrap();
        assert_eq!(args.frontend, Frontend::Prompt);
        assert_eq!(args.hint_order, HintOrderArg::Numeric);
        assert_eq!(args.seed, None);
        assert!(!args.plain);
        assert!(!args.verbose);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "guess-the-number",
            "--frontend",
            "tui",
            "--hint-order",
            "lexicographic",
            "--seed",
            "42",
            "--plain",
            "-v",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(args.frontend, Frontend::Tui);
        assert_eq!(HintOrder::from(args.hint_order), HintOrder::Lexicographic);
        assert_eq!(args.seed, Some(42));
        assert!(args.plain);
        assert!(args.verbose);
        assert_eq!(args.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn unknown_frontend_is_rejected() {
        assert!(Args::try_parse_from(["guess-the-number", "--frontend", "gui"]).is_err());
    }

    #[test]
    fn log_filter_precedence() {
        assert_eq!(log_filter(false, None).to_string(), "warn");
        assert_eq!(log_filter(true, None).to_string(), "debug");
        assert_eq!(
            log_filter(true, Some("guess=trace".into())).to_string(),
            "guess=trace"
        );
    }

    #[test]
    fn cancellation_is_recognised() {
        assert!(is_cancelled(&anyhow::Error::new(DialoguerError::Cancelled)));
        assert!(is_cancelled(&anyhow::Error::new(RatatuiError::Cancelled)));
        assert!(is_cancelled(&anyhow::Error::new(RatatuiError::Game(
            GameError::Cancelled
        ))));
        assert!(!is_cancelled(&anyhow::Error::new(RatatuiError::Terminal(
            "gone".into()
        ))));
        assert!(!is_cancelled(&anyhow::anyhow!("something else")));
    }

    #[test]
    fn summary_counts_rounds() {
        let score = Scoreboard {
            wins: 2,
            losses: 1,
            abandoned: 1,
        };
        assert_eq!(summary(&score), "Rounds: 4  Won: 2  Lost: 1  Abandoned: 1");
    }
}
