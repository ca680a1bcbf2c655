//! Ratatui backend implementation for GameBackend trait.
//!
//! Provides a full-screen terminal UI with bordered panels, focusable
//! buttons and keyboard navigation.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use guess::{App, GameBackend, GameError};
use rand::Rng;
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

use crate::state::{KeyOutcome, TuiState};
use crate::ui;

/// Error type for the Ratatui backend.
#[derive(Debug, Error)]
pub enum RatatuiError {
    /// User cancelled the game (pressed Ctrl+C).
    #[error("Game cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The controller refused an action.
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Ratatui-based TUI backend.
///
/// Owns the terminal for the whole session. The terminal is restored before
/// `play` returns, whether the session ended normally or with an error.
#[derive(Debug, Clone, Default)]
pub struct RatatuiBackend {
    /// Color theme for the UI.
    theme: Theme,
}

impl RatatuiBackend {
    /// Create a new Ratatui backend with default settings.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Term, RatatuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(&self, terminal: &mut Term) -> Result<(), RatatuiError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop<R: Rng>(&self, terminal: &mut Term, app: &mut App<R>) -> Result<(), RatatuiError> {
        let mut state = TuiState::new(app);

        loop {
            terminal.draw(|frame| ui::draw(frame, app, &state, &self.theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match state.handle_key(app, key)? {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Quit => return Ok(()),
                    KeyOutcome::Cancel => return Err(RatatuiError::Cancelled),
                }
            }
        }
    }
}

impl GameBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn play<R: Rng>(&self, app: &mut App<R>) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, app);
        let restored = self
            .restore_terminal(&mut terminal)
            .map_err(|e| RatatuiError::Terminal(e.to_string()));
        debug!(ok = result.is_ok(), "TUI session ended");

        result?;
        restored
    }
}
