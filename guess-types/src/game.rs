use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GuessError, Hint, HintOrder, Outcome, SetupError};

/// Range the secret is drawn from.
pub const SECRET_RANGE: RangeInclusive<i32> = 1..=100;

/// Parameters for one round, produced by the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    chances_left: u32,
    hint_order: HintOrder,
}

impl GameConfig {
    /// Validate a chance count. Zero or negative counts are rejected.
    pub fn new(chances: i32, hint_order: HintOrder) -> Result<Self, SetupError> {
        match u32::try_from(chances) {
            Ok(chances_left) if chances_left > 0 => Ok(Self {
                chances_left,
                hint_order,
            }),
            _ => Err(SetupError::NoChances(chances)),
        }
    }

    pub fn chances_left(&self) -> u32 {
        self.chances_left
    }

    pub fn hint_order(&self) -> HintOrder {
        self.hint_order
    }
}

/// What happened to a submitted guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessResult {
    /// Wrong guess with chances to spare.
    Continue { hint: Hint, chances_remaining: u32 },

    /// The guess matched the secret.
    Won,

    /// The guess was wrong and it was the last chance.
    Lost,

    /// The input was not a number. Nothing changed.
    Rejected(GuessError),
}

impl GuessResult {
    /// The outcome this result ends the round with, if any.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Won => Some(Outcome::new(true)),
            Self::Lost => Some(Outcome::new(false)),
            Self::Continue { .. } | Self::Rejected(_) => None,
        }
    }
}

/// State of the game screen for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    secret: i32,
    chances_remaining: u32,
    last_hint: Hint,
    guess_input: String,
    guesses: u32,
    hint_order: HintOrder,
}

impl GameState {
    /// Enter a round with a secret drawn uniformly from [`SECRET_RANGE`].
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        Self::with_secret(config, rng.random_range(SECRET_RANGE))
    }

    /// Enter a round with a fixed secret.
    pub fn with_secret(config: GameConfig, secret: i32) -> Self {
        Self {
            secret,
            chances_remaining: config.chances_left,
            last_hint: Hint::None,
            guess_input: String::new(),
            guesses: 0,
            hint_order: config.hint_order,
        }
    }

    pub fn secret(&self) -> i32 {
        self.secret
    }

    pub fn chances_remaining(&self) -> u32 {
        self.chances_remaining
    }

    pub fn last_hint(&self) -> Hint {
        self.last_hint
    }

    /// Text currently typed into the guess field.
    pub fn guess_input(&self) -> &str {
        &self.guess_input
    }

    /// Number of guesses that consumed a chance or won.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    pub fn hint_order(&self) -> HintOrder {
        self.hint_order
    }

    /// Replace the text in the guess field.
    pub fn set_guess_text(&mut self, text: impl Into<String>) {
        self.guess_input = text.into();
    }

    /// Submit whatever is in the guess field.
    pub fn submit(&self) -> (GameState, GuessResult) {
        self.submit_guess(&self.guess_input)
    }

    /// Check `raw` against the secret.
    ///
    /// Returns the next state and what happened. Input that is not an
    /// integer is rejected without consuming a chance. A wrong guess on the
    /// last chance loses before any hint is computed.
    pub fn submit_guess(&self, raw: &str) -> (GameState, GuessResult) {
        let guess = match parse_guess(raw) {
            Ok(guess) => guess,
            Err(err) => return (self.clone(), GuessResult::Rejected(err)),
        };

        let mut next = self.clone();
        next.guesses += 1;

        if guess == self.secret {
            return (next, GuessResult::Won);
        }

        next.chances_remaining = self.chances_remaining.saturating_sub(1);
        if next.chances_remaining == 0 {
            return (next, GuessResult::Lost);
        }

        next.last_hint = self.hint_order.hint(self.secret, guess, raw);
        next.guess_input.clear();
        let result = GuessResult::Continue {
            hint: next.last_hint,
            chances_remaining: next.chances_remaining,
        };
        (next, result)
    }
}

/// Parse guess text as an integer.
pub fn parse_guess(raw: &str) -> Result<i32, GuessError> {
    if raw.is_empty() {
        return Err(GuessError::Empty);
    }
    raw.parse()
        .map_err(|_| GuessError::NotANumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn config(chances: i32) -> GameConfig {
        GameConfig::new(chances, HintOrder::Numeric).unwrap()
    }

    #[test]
    fn config_validation() {
        assert_eq!(
            GameConfig::new(0, HintOrder::Numeric),
            Err(SetupError::NoChances(0))
        );
        assert_eq!(
            GameConfig::new(-1, HintOrder::Numeric),
            Err(SetupError::NoChances(-1))
        );
        assert_eq!(config(4).chances_left(), 4);
    }

    #[test]
    fn fresh_round() {
        let game = GameState::with_secret(config(3), 42);
        assert_eq!(game.secret(), 42);
        assert_eq!(game.chances_remaining(), 3);
        assert_eq!(game.last_hint(), Hint::None);
        assert_eq!(game.guess_input(), "");
        assert_eq!(game.guesses(), 0);
    }

    #[test]
    fn drawn_secret_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let game = GameState::new(config(1), &mut rng);
            assert!(SECRET_RANGE.contains(&game.secret()));
        }
    }

    #[test]
    fn parse() {
        assert_eq!(parse_guess("42"), Ok(42));
        assert_eq!(parse_guess("-3"), Ok(-3));
        assert_eq!(parse_guess("+7"), Ok(7));
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(
            parse_guess("4 2"),
            Err(GuessError::NotANumber("4 2".into()))
        );
        assert_eq!(
            parse_guess("99999999999"),
            Err(GuessError::NotANumber("99999999999".into()))
        );
    }

    #[test]
    fn wrong_guess_then_win() {
        let game = GameState::with_secret(config(2), 50);

        let (game, result) = game.submit_guess("10");
        assert_eq!(
            result,
            GuessResult::Continue {
                hint: Hint::TooLow,
                chances_remaining: 1
            }
        );
        assert_eq!(game.chances_remaining(), 1);
        assert_eq!(game.last_hint(), Hint::TooLow);

        let (game, result) = game.submit_guess("50");
        assert_eq!(result, GuessResult::Won);
        assert_eq!(result.outcome(), Some(Outcome::new(true)));
        assert_eq!(game.guesses(), 2);
    }

    #[test]
    fn last_chance_loses_without_hint() {
        let game = GameState::with_secret(config(1), 7);
        let (game, result) = game.submit_guess("3");
        assert_eq!(result, GuessResult::Lost);
        assert_eq!(result.outcome(), Some(Outcome::new(false)));
        assert_eq!(game.chances_remaining(), 0);
        assert_eq!(game.last_hint(), Hint::None);
    }

    #[test]
    fn correct_first_guess_wins() {
        let game = GameState::with_secret(config(10), 1);
        let (game, result) = game.submit_guess("1");
        assert_eq!(result, GuessResult::Won);
        assert_eq!(game.chances_remaining(), 10);
    }

    #[test]
    fn win_on_last_chance() {
        let game = GameState::with_secret(config(1), 64);
        assert_eq!(game.submit_guess("64").1, GuessResult::Won);
    }

    #[test]
    fn unparsable_guesses_consume_nothing() {
        let game = GameState::with_secret(config(1), 7);

        let (next, result) = game.submit_guess("");
        assert_eq!(result, GuessResult::Rejected(GuessError::Empty));
        assert_eq!(next, game);

        let (next, result) = game.submit_guess("seven");
        assert_eq!(
            result,
            GuessResult::Rejected(GuessError::NotANumber("seven".into()))
        );
        assert_eq!(next, game);
        assert_eq!(result.outcome(), None);
    }

    #[test]
    fn out_of_range_guess_is_a_miss() {
        let game = GameState::with_secret(config(3), 99);
        let (game, result) = game.submit_guess("500");
        assert_eq!(
            result,
            GuessResult::Continue {
                hint: Hint::TooHigh,
                chances_remaining: 2
            }
        );
        let (_, result) = game.submit_guess("-1");
        assert_eq!(
            result,
            GuessResult::Continue {
                hint: Hint::TooLow,
                chances_remaining: 1
            }
        );
    }

    #[test]
    fn submit_uses_field_and_clears_it_on_a_miss() {
        let mut game = GameState::with_secret(config(3), 30);
        game.set_guess_text("20");
        let (game, result) = game.submit();
        assert!(matches!(result, GuessResult::Continue { .. }));
        assert_eq!(game.guess_input(), "");
    }

    #[test]
    fn rejected_submit_keeps_field() {
        let mut game = GameState::with_secret(config(3), 30);
        game.set_guess_text("abc");
        let (game, _) = game.submit();
        assert_eq!(game.guess_input(), "abc");
    }

    #[test]
    fn hint_order_follows_config() {
        let lexicographic = GameConfig::new(3, HintOrder::Lexicographic).unwrap();

        // Original behaviour: "80" < "9" as text, so 9 is called high.
        let game = GameState::with_secret(lexicographic, 80);
        let (_, result) = game.submit_guess("9");
        assert_eq!(
            result,
            GuessResult::Continue {
                hint: Hint::TooHigh,
                chances_remaining: 2
            }
        );

        // Numeric order calls it low.
        let game = GameState::with_secret(config(3), 80);
        let (_, result) = game.submit_guess("9");
        assert_eq!(
            result,
            GuessResult::Continue {
                hint: Hint::TooLow,
                chances_remaining: 2
            }
        );
    }

    #[test]
    fn state_serializes() {
        let game = GameState::with_secret(config(2), 13);
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["secret"], 13);
        assert_eq!(json["chances_remaining"], 2);
        assert_eq!(json["last_hint"], "None");
    }

    proptest! {
        /// Exactly `chances` wrong guesses lose, and not a guess earlier.
        #[test]
        fn wrong_guesses_lose_on_the_last_chance(
            chances in 1u32..=40,
            secret in SECRET_RANGE,
            offset in 1i32..100,
        ) {
            let wrong = if secret + offset > 100 { secret - offset } else { secret + offset };
            let wrong = wrong.to_string();
            let mut game = GameState::with_secret(config(chances as i32), secret);

            for guess in 1..=chances {
                let (next, result) = game.submit_guess(&wrong);
                if guess < chances {
                    let is_continue = matches!(result, GuessResult::Continue { .. });
                    prop_assert!(is_continue);
                    prop_assert_eq!(next.chances_remaining(), chances - guess);
                } else {
                    prop_assert_eq!(result, GuessResult::Lost);
                }
                game = next;
            }
        }

        /// The secret wins whenever it is guessed.
        #[test]
        fn secret_always_wins(
            chances in 1u32..=20,
            secret in SECRET_RANGE,
            misses in 0u32..20,
        ) {
            let mut game = GameState::with_secret(config(chances as i32), secret);
            let wrong = if secret == 100 { "1" } else { "100" };
            for _ in 0..misses.min(chances - 1) {
                game = game.submit_guess(wrong).0;
            }
            prop_assert_eq!(game.submit_guess(&secret.to_string()).1, GuessResult::Won);
        }

        /// Both hint orders agree when guess and secret have the same number of digits.
        #[test]
        fn hint_orders_agree_on_equal_width(secret in 10i32..=99, guess in 10i32..=99) {
            prop_assume!(secret != guess);
            let raw = guess.to_string();
            prop_assert_eq!(
                HintOrder::Numeric.hint(secret, guess, &raw),
                HintOrder::Lexicographic.hint(secret, guess, &raw)
            );
        }
    }
}
