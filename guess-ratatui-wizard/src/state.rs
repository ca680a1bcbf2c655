//! Keyboard handling for the TUI, independent of drawing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guess::{Action, App, CHANCE_SHORTCUTS, GameError, Screen, ScreenKind};
use rand::Rng;

/// Focusable elements of the setup screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetupFocus {
    Chances,
    Shortcut(usize),
    Start,
}

impl SetupFocus {
    fn next(self) -> Self {
        match self {
            Self::Chances => Self::Shortcut(0),
            Self::Shortcut(i) if i + 1 < CHANCE_SHORTCUTS.len() => Self::Shortcut(i + 1),
            Self::Shortcut(_) => Self::Start,
            Self::Start => Self::Chances,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Chances => Self::Start,
            Self::Shortcut(0) => Self::Chances,
            Self::Shortcut(i) => Self::Shortcut(i - 1),
            Self::Start => Self::Shortcut(CHANCE_SHORTCUTS.len() - 1),
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    Continue,
    Quit,
    Cancel,
}

/// UI-only state: focus and cursor. Game state stays in the [`App`].
#[derive(Debug)]
pub(crate) struct TuiState {
    pub(crate) focus: SetupFocus,
    /// Cursor position in the active text field, in characters.
    pub(crate) cursor_pos: usize,
    /// Screen the cursor and focus belong to.
    screen: ScreenKind,
}

impl TuiState {
    pub(crate) fn new<R: Rng>(app: &App<R>) -> Self {
        let mut state = Self {
            focus: SetupFocus::Chances,
            cursor_pos: 0,
            screen: app.screen().kind(),
        };
        state.reset_for(app);
        state
    }

    /// Put focus and cursor where a freshly entered screen wants them.
    fn reset_for<R: Rng>(&mut self, app: &App<R>) {
        self.screen = app.screen().kind();
        self.focus = SetupFocus::Chances;
        self.cursor_pos = active_text(app).map_or(0, |t| t.chars().count());
    }

    pub(crate) fn handle_key<R: Rng>(
        &mut self,
        app: &mut App<R>,
        key: KeyEvent,
    ) -> Result<KeyOutcome, GameError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('c') => KeyOutcome::Cancel,
                _ => KeyOutcome::Continue,
            });
        }

        let outcome = match app.screen().kind() {
            ScreenKind::Setup => self.setup_key(app, key.code)?,
            ScreenKind::Game => self.game_key(app, key.code)?,
            ScreenKind::Outcome => match key.code {
                KeyCode::Enter => {
                    app.dispatch(Action::Restart)?;
                    KeyOutcome::Continue
                }
                KeyCode::Esc | KeyCode::Char('q') => KeyOutcome::Quit,
                _ => KeyOutcome::Continue,
            },
        };

        if app.screen().kind() != self.screen {
            self.reset_for(app);
        }
        Ok(outcome)
    }

    fn setup_key<R: Rng>(&mut self, app: &mut App<R>, code: KeyCode) -> Result<KeyOutcome, GameError> {
        match code {
            KeyCode::Esc => return Ok(KeyOutcome::Quit),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                SetupFocus::Shortcut(i) => {
                    app.dispatch(Action::Increment(CHANCE_SHORTCUTS[i]))?;
                    self.cursor_pos = active_text(app).map_or(0, |t| t.chars().count());
                }
                SetupFocus::Chances | SetupFocus::Start => {
                    app.dispatch(Action::Start)?;
                }
            },
            code if self.focus == SetupFocus::Chances => {
                if let Some(text) = self.edit(app, code) {
                    app.dispatch(Action::SetChancesText(text))?;
                }
            }
            _ => {}
        }
        Ok(KeyOutcome::Continue)
    }

    fn game_key<R: Rng>(&mut self, app: &mut App<R>, code: KeyCode) -> Result<KeyOutcome, GameError> {
        match code {
            KeyCode::Esc => {
                app.dispatch(Action::Exit)?;
            }
            KeyCode::Enter => {
                app.dispatch(Action::SubmitGuess)?;
                self.cursor_pos = active_text(app).map_or(0, |t| t.chars().count());
            }
            code => {
                if let Some(text) = self.edit(app, code) {
                    app.dispatch(Action::SetGuessText(text))?;
                }
            }
        }
        Ok(KeyOutcome::Continue)
    }

    /// Apply an editing key to the active text field.
    ///
    /// Returns the new text when it changed.
    fn edit<R: Rng>(&mut self, app: &App<R>, code: KeyCode) -> Option<String> {
        let mut text = active_text(app)?.to_string();
        let len = text.chars().count();
        self.cursor_pos = self.cursor_pos.min(len);

        match code {
            KeyCode::Char(c) => {
                text.insert(byte_index(&text, self.cursor_pos), c);
                self.cursor_pos += 1;
                Some(text)
            }
            KeyCode::Backspace if self.cursor_pos > 0 => {
                self.cursor_pos -= 1;
                text.remove(byte_index(&text, self.cursor_pos));
                Some(text)
            }
            KeyCode::Delete if self.cursor_pos < len => {
                text.remove(byte_index(&text, self.cursor_pos));
                Some(text)
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_pos = (self.cursor_pos + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                None
            }
            KeyCode::End => {
                self.cursor_pos = len;
                None
            }
            _ => None,
        }
    }
}

/// The text field the keyboard edits on the current screen.
pub(crate) fn active_text<R: Rng>(app: &App<R>) -> Option<&str> {
    match app.screen() {
        Screen::Setup(setup) => Some(setup.input()),
        Screen::Game(game) => Some(game.guess_input()),
        Screen::Outcome(_) => None,
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map_or(text.len(), |(i, _)| i)
}
