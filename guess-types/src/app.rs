//! The controller that owns the current screen and moves between screens.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::{
    GameBackend, GameError, GameState, GuessError, GuessResult, HintOrder, Outcome, Screen,
    ScreenKind, Setup, SetupError,
};

/// Everything a player can do, across all screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Setup: add to the chance count (the `+3`/`+5`/`+10`/`+15` buttons).
    Increment(i32),
    /// Setup: replace the chances field text.
    SetChancesText(String),
    /// Setup: start a round.
    Start,
    /// Game: replace the guess field text.
    SetGuessText(String),
    /// Game: submit the guess field ("Check Guess", or Enter in the field).
    SubmitGuess,
    /// Game: submit the given text directly.
    Guess(String),
    /// Game: abandon the round.
    Exit,
    /// Outcome: back to a fresh setup ("Play Again").
    Restart,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment(_) => "Increment",
            Self::SetChancesText(_) => "SetChancesText",
            Self::Start => "Start",
            Self::SetGuessText(_) => "SetGuessText",
            Self::SubmitGuess => "SubmitGuess",
            Self::Guess(_) => "Guess",
            Self::Exit => "Exit",
            Self::Restart => "Restart",
        }
    }
}

/// Whether an action changed the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stayed,
    Entered(ScreenKind),
}

/// Transient message for the player, cleared by the next action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    Setup(SetupError),
    Guess(GuessError),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup(err) => err.fmt(f),
            Self::Guess(err) => err.fmt(f),
        }
    }
}

/// Rounds finished during one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    /// Rounds left through "Exit".
    pub abandoned: u32,
}

impl Scoreboard {
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.abandoned
    }
}

/// Game controller.
///
/// Owns the screen state and the random source for secrets. Frontends
/// render [`App::screen`] and feed player input back through
/// [`App::dispatch`].
#[derive(Debug)]
pub struct App<R = StdRng> {
    screen: Screen,
    /// Setup screen that started the running round, restored on `Exit`.
    round_setup: Option<Setup>,
    hint_order: HintOrder,
    notice: Option<Notice>,
    scoreboard: Scoreboard,
    rng: R,
}

impl App<StdRng> {
    /// Create a controller with an OS-seeded random source.
    pub fn new(hint_order: HintOrder) -> Self {
        Self::with_rng(hint_order, StdRng::from_os_rng())
    }

    /// Create a controller whose secrets are reproducible from `seed`.
    pub fn seeded(hint_order: HintOrder, seed: u64) -> Self {
        Self::with_rng(hint_order, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> App<R> {
    pub fn with_rng(hint_order: HintOrder, rng: R) -> Self {
        Self {
            screen: Screen::default(),
            round_setup: None,
            hint_order,
            notice: None,
            scoreboard: Scoreboard::default(),
            rng,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn hint_order(&self) -> HintOrder {
        self.hint_order
    }

    /// Hand the session to a backend until the player quits.
    pub fn run<B: GameBackend>(&mut self, backend: B) -> anyhow::Result<Scoreboard> {
        backend.play(self).map_err(Into::into)?;
        Ok(self.scoreboard)
    }

    /// Apply one player action.
    ///
    /// Actions that do not belong to the current screen fail with
    /// [`GameError::InvalidAction`] and leave the state untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, GameError> {
        self.notice = None;
        let screen = std::mem::take(&mut self.screen);
        let (screen, result) = self.step(screen, action);
        self.screen = screen;
        result
    }

    fn step(&mut self, screen: Screen, action: Action) -> (Screen, Result<Transition, GameError>) {
        match (screen, action) {
            (Screen::Setup(mut setup), Action::Increment(by)) => {
                setup.increment(by);
                (Screen::Setup(setup), Ok(Transition::Stayed))
            }
            (Screen::Setup(mut setup), Action::SetChancesText(text)) => {
                setup.set_from_text(text);
                (Screen::Setup(setup), Ok(Transition::Stayed))
            }
            (Screen::Setup(setup), Action::Start) => match setup.start(self.hint_order) {
                Ok(config) => {
                    let game = GameState::new(config, &mut self.rng);
                    info!(chances = config.chances_left(), "Round started");
                    trace!(secret = game.secret(), "Secret drawn");
                    self.round_setup = Some(setup);
                    (
                        Screen::Game(game),
                        Ok(Transition::Entered(ScreenKind::Game)),
                    )
                }
                Err(err) => {
                    debug!(%err, "Round not started");
                    self.notice = Some(Notice::Setup(err));
                    (Screen::Setup(setup), Ok(Transition::Stayed))
                }
            },
            (Screen::Game(mut game), Action::SetGuessText(text)) => {
                game.set_guess_text(text);
                (Screen::Game(game), Ok(Transition::Stayed))
            }
            (Screen::Game(game), Action::SubmitGuess) => {
                let (next, result) = game.submit();
                self.apply_guess(next, result)
            }
            (Screen::Game(game), Action::Guess(raw)) => {
                let (next, result) = game.submit_guess(&raw);
                self.apply_guess(next, result)
            }
            (Screen::Game(game), Action::Exit) => {
                info!(guesses = game.guesses(), "Round abandoned");
                self.scoreboard.abandoned += 1;
                let setup = self.round_setup.take().unwrap_or_default();
                (
                    Screen::Setup(setup),
                    Ok(Transition::Entered(ScreenKind::Setup)),
                )
            }
            (Screen::Outcome(outcome), Action::Restart) => {
                debug!("Restarting");
                self.round_setup = None;
                (
                    Screen::Setup(outcome.restart()),
                    Ok(Transition::Entered(ScreenKind::Setup)),
                )
            }
            (screen, action) => {
                let err = GameError::InvalidAction {
                    action: action.name(),
                    screen: screen.kind().name(),
                };
                warn!(%err, "Ignoring action");
                (screen, Err(err))
            }
        }
    }

    fn apply_guess(
        &mut self,
        game: GameState,
        result: GuessResult,
    ) -> (Screen, Result<Transition, GameError>) {
        debug!(?result, chances_remaining = game.chances_remaining(), "Guess checked");

        if let GuessResult::Rejected(err) = result {
            self.notice = Some(Notice::Guess(err));
            return (Screen::Game(game), Ok(Transition::Stayed));
        }

        match result.outcome() {
            Some(outcome) => (
                self.finish(&game, outcome),
                Ok(Transition::Entered(ScreenKind::Outcome)),
            ),
            None => (Screen::Game(game), Ok(Transition::Stayed)),
        }
    }

    fn finish(&mut self, game: &GameState, outcome: Outcome) -> Screen {
        if outcome.is_winner() {
            self.scoreboard.wins += 1;
        } else {
            self.scoreboard.losses += 1;
        }
        info!(
            winner = outcome.is_winner(),
            guesses = game.guesses(),
            secret = game.secret(),
            "Round over"
        );
        self.round_setup = None;
        Screen::Outcome(outcome)
    }
}
