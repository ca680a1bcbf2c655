//! Dialoguer backend implementation for GameBackend trait.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use guess::{
    Action, App, CHANCE_SHORTCUTS, GameBackend, GameError, GameState, Outcome, Screen, ScreenKind,
    Setup, text,
};
use rand::Rng;
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the game (e.g., pressed Ctrl+C or Escape).
    #[error("Game cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The controller refused an action.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_result<T>(result: Result<T, dialoguer::Error>) -> Result<T, DialoguerError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
        Err(e) => Err(DialoguerError::Dialoguer(e)),
    }
}

/// Entries of the setup menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupChoice {
    Increment(i32),
    TypeChances,
    Start,
    Quit,
}

fn setup_choices() -> Vec<SetupChoice> {
    CHANCE_SHORTCUTS
        .iter()
        .map(|&by| SetupChoice::Increment(by))
        .chain([
            SetupChoice::TypeChances,
            SetupChoice::Start,
            SetupChoice::Quit,
        ])
        .collect()
}

impl SetupChoice {
    fn label(self) -> String {
        match self {
            Self::Increment(by) => text::shortcut_label(by),
            Self::TypeChances => text::CHANCES_LABEL.to_string(),
            Self::Start => text::START.to_string(),
            Self::Quit => text::QUIT.to_string(),
        }
    }
}

fn outcome_items() -> [String; 2] {
    [text::PLAY_AGAIN.to_string(), text::QUIT.to_string()]
}

/// What the player typed at the guess prompt.
fn guess_action(input: &str) -> Action {
    let input = input.trim();
    if input.eq_ignore_ascii_case(text::EXIT) {
        Action::Exit
    } else {
        Action::Guess(input.to_string())
    }
}

/// Whether the session goes on after a screen was handled.
enum Flow {
    Continue,
    Quit,
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Each screen is a short sequence of prompts: a menu on the setup screen, a
/// line input on the game screen and a menu on the popup.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn select(
        &self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, DialoguerError> {
        let mut _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(items).default(default);
        prompt_result(builder.interact())
    }

    fn input(&self, prompt: &str, initial: &str) -> Result<String, DialoguerError> {
        let mut _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true);
        prompt_result(builder.interact_text())
    }

    fn setup_screen<R: Rng>(
        &self,
        app: &mut App<R>,
        setup: &Setup,
    ) -> Result<Flow, DialoguerError> {
        let choices = setup_choices();
        let labels: Vec<String> = choices.iter().map(|c| c.label()).collect();
        let start = choices
            .iter()
            .position(|c| *c == SetupChoice::Start)
            .unwrap_or(0);

        let prompt = format!("Chances: {}", setup.input());
        let action = match choices[self.select(&prompt, &labels, start)?] {
            SetupChoice::Increment(by) => Action::Increment(by),
            SetupChoice::TypeChances => {
                Action::SetChancesText(self.input(text::CHANCES_LABEL, setup.input())?)
            }
            SetupChoice::Start => Action::Start,
            SetupChoice::Quit => return Ok(Flow::Quit),
        };

        app.dispatch(action)?;
        Ok(Flow::Continue)
    }

    fn game_screen<R: Rng>(
        &self,
        app: &mut App<R>,
        game: &GameState,
    ) -> Result<Flow, DialoguerError> {
        println!("{}", text::chances_left(game.chances_remaining()));
        println!("{}", game.last_hint());

        let prompt = format!("{} ('{}' to leave)", text::GUESS_LABEL, text::EXIT);
        let typed = self.input(&prompt, game.guess_input())?;
        app.dispatch(guess_action(&typed))?;
        Ok(Flow::Continue)
    }

    fn outcome_screen<R: Rng>(
        &self,
        app: &mut App<R>,
        outcome: Outcome,
    ) -> Result<Flow, DialoguerError> {
        println!();
        println!("{outcome}");

        let items = outcome_items();
        match self.select("What next?", &items, 0)? {
            0 => {
                app.dispatch(Action::Restart)?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Quit),
        }
    }

    fn print_title(&self, kind: ScreenKind) {
        match kind {
            ScreenKind::Setup => {
                println!();
                println!("=== {} ===", text::SETUP_TITLE);
                println!();
                println!("{}", text::RULES);
                println!();
            }
            ScreenKind::Game => {
                println!();
                println!("=== {} ===", text::GAME_TITLE);
            }
            ScreenKind::Outcome => {}
        }
    }
}

impl GameBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn play<R: Rng>(&self, app: &mut App<R>) -> Result<(), Self::Error> {
        let mut shown = None;

        loop {
            let screen = app.screen().clone();
            if shown != Some(screen.kind()) {
                self.print_title(screen.kind());
                shown = Some(screen.kind());
            }

            let flow = match &screen {
                Screen::Setup(setup) => self.setup_screen(app, setup)?,
                Screen::Game(game) => self.game_screen(app, game)?,
                Screen::Outcome(outcome) => self.outcome_screen(app, *outcome)?,
            };

            if let Some(notice) = app.notice() {
                println!("Error: {notice}");
            }

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_creation() {
        let _backend = DialoguerBackend::new();
        let _plain = DialoguerBackend::plain();
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Game cancelled by user");

        let err = DialoguerError::from(GameError::Cancelled);
        assert_eq!(err.to_string(), "Game cancelled by user");
    }

    #[test]
    fn setup_menu_order() {
        let labels: Vec<String> = setup_choices().into_iter().map(SetupChoice::label).collect();
        assert_eq!(
            labels,
            [
                "+3",
                "+5",
                "+10",
                "+15",
                "Enter Number of Chances",
                "Start",
                text::QUIT
            ]
        );
    }

    #[test]
    fn outcome_menu_order() {
        assert_eq!(outcome_items(), [text::PLAY_AGAIN, text::QUIT]);
    }

    #[test]
    fn guess_prompt_parsing() {
        assert_eq!(guess_action(" 42 "), Action::Guess("42".into()));
        assert_eq!(guess_action(""), Action::Guess(String::new()));
        assert_eq!(guess_action("exit"), Action::Exit);
        assert_eq!(guess_action("Exit"), Action::Exit);
    }
}
