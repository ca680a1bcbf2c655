use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text;

/// Directional feedback after a wrong guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    /// No guess has been made yet.
    #[default]
    None,
    TooHigh,
    TooLow,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => text::FIRST_GUESS_PROMPT,
            Self::TooHigh => text::HINT_HIGH,
            Self::TooLow => text::HINT_LOW,
        };
        f.write_str(s)
    }
}

/// How a wrong guess is compared against the secret to pick a hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintOrder {
    /// Compare the parsed numbers.
    #[default]
    Numeric,

    /// Compare the typed text against the secret's decimal text, character by
    /// character. Reports "High" for secret 80 and guess 9. Kept for parity
    /// with the first release of the game.
    Lexicographic,
}

impl HintOrder {
    /// Hint for a wrong `guess` (parsed from `raw`) against `secret`.
    ///
    /// Anything that does not compare as higher is reported as low.
    pub fn hint(self, secret: i32, guess: i32, raw: &str) -> Hint {
        let higher = match self {
            Self::Numeric => guess > secret,
            Self::Lexicographic => secret.to_string().as_str() < raw,
        };
        if higher { Hint::TooHigh } else { Hint::TooLow }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_text() {
        assert_eq!(Hint::None.to_string(), "Make your 1st guess!!");
        assert_eq!(Hint::TooHigh.to_string(), "Your Guess is High");
        assert_eq!(Hint::TooLow.to_string(), "Your Guess is Low");
    }

    #[test]
    fn numeric_order() {
        assert_eq!(HintOrder::Numeric.hint(50, 60, "60"), Hint::TooHigh);
        assert_eq!(HintOrder::Numeric.hint(50, 10, "10"), Hint::TooLow);
        assert_eq!(HintOrder::Numeric.hint(80, 9, "9"), Hint::TooLow);
        assert_eq!(HintOrder::Numeric.hint(9, 80, "80"), Hint::TooHigh);
    }

    #[test]
    fn lexicographic_order_reproduces_digit_length_mismatch() {
        // "80" < "9" as text, so a numerically lower guess is called high.
        assert_eq!(HintOrder::Lexicographic.hint(80, 9, "9"), Hint::TooHigh);
        // "9" < "80" is false, so the higher guess is called low.
        assert_eq!(HintOrder::Lexicographic.hint(9, 80, "80"), Hint::TooLow);
        // Same digit count agrees with numeric order.
        assert_eq!(HintOrder::Lexicographic.hint(50, 10, "10"), Hint::TooLow);
        assert_eq!(HintOrder::Lexicographic.hint(50, 60, "60"), Hint::TooHigh);
    }
}
