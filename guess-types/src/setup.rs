use serde::{Deserialize, Serialize};

use crate::{GameConfig, HintOrder, SetupError};

/// Chance count a fresh setup screen starts with.
pub const DEFAULT_CHANCES: i32 = 3;

/// Increments offered as shortcut buttons on the setup screen.
pub const CHANCE_SHORTCUTS: [i32; 4] = [3, 5, 10, 15];

/// State of the rules/setup screen.
///
/// `chances` is the value a round would start with; `input` is the text the
/// chances field currently shows. The two only diverge when the typed text is
/// not a number, in which case `chances` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    chances: i32,
    input: String,
}

impl Setup {
    /// Create a setup screen with the default chance count.
    pub fn new() -> Self {
        Self {
            chances: DEFAULT_CHANCES,
            input: DEFAULT_CHANCES.to_string(),
        }
    }

    /// The current chance count.
    pub fn chances(&self) -> i32 {
        self.chances
    }

    /// The text shown in the chances field.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Add `by` to the chance count and rewrite the field from it.
    pub fn increment(&mut self, by: i32) {
        self.chances = self.chances.saturating_add(by);
        self.input = self.chances.to_string();
    }

    /// Replace the field text. Text that does not parse as an integer sets the
    /// count to 0.
    pub fn set_from_text(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.chances = self.input.parse().unwrap_or(0);
    }

    /// Build the configuration for a round.
    pub fn start(&self, hint_order: HintOrder) -> Result<GameConfig, SetupError> {
        GameConfig::new(self.chances, hint_order)
    }
}

impl Default for Setup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_three_chances() {
        let setup = Setup::new();
        assert_eq!(setup.chances(), 3);
        assert_eq!(setup.input(), "3");
    }

    #[test]
    fn increments_accumulate() {
        let mut setup = Setup::new();
        setup.increment(3);
        setup.increment(3);
        assert_eq!(setup.chances(), 9);
        assert_eq!(setup.input(), "9");
    }

    #[test]
    fn shortcuts_add_up() {
        let mut setup = Setup::new();
        for by in CHANCE_SHORTCUTS {
            setup.increment(by);
        }
        assert_eq!(setup.chances(), 3 + 3 + 5 + 10 + 15);
    }

    #[test]
    fn text_entry() {
        let mut setup = Setup::new();
        setup.set_from_text("12");
        assert_eq!(setup.chances(), 12);
        assert_eq!(setup.input(), "12");

        setup.set_from_text("abc");
        assert_eq!(setup.chances(), 0);
        assert_eq!(setup.input(), "abc");

        setup.set_from_text("");
        assert_eq!(setup.chances(), 0);

        // No trimming, same as the number field it replaces.
        setup.set_from_text(" 4");
        assert_eq!(setup.chances(), 0);
    }

    #[test]
    fn increment_after_invalid_text_counts_from_zero() {
        let mut setup = Setup::new();
        setup.set_from_text("x");
        setup.increment(5);
        assert_eq!(setup.chances(), 5);
        assert_eq!(setup.input(), "5");
    }

    #[test]
    fn increment_saturates() {
        let mut setup = Setup::new();
        setup.set_from_text(i32::MAX.to_string());
        setup.increment(15);
        assert_eq!(setup.chances(), i32::MAX);
    }

    #[test]
    fn start_rejects_non_positive_counts() {
        let mut setup = Setup::new();
        setup.set_from_text("0");
        assert_eq!(
            setup.start(HintOrder::Numeric),
            Err(SetupError::NoChances(0))
        );

        setup.set_from_text("-4");
        assert_eq!(
            setup.start(HintOrder::Numeric),
            Err(SetupError::NoChances(-4))
        );

        setup.set_from_text("2");
        let config = setup.start(HintOrder::Numeric).unwrap();
        assert_eq!(config.chances_left(), 2);
    }
}
