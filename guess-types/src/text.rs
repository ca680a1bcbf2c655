//! User-visible strings shared by every frontend.

/// Title of the setup screen.
pub const SETUP_TITLE: &str = "Guess the Number Game";

/// Title of the game screen.
pub const GAME_TITLE: &str = "Guess the Number";

/// Rules shown on the setup screen.
pub const RULES: &str = "Welcome to the Guess the Number Game! The rules are simple:\n\n\
    1. Guess a number between 1 and 100.\n\n\
    2. You can choose how many chances you want to guess.\n\n\
    3. Once you guess correctly or run out of chances, the game ends.";

pub const CHANCES_LABEL: &str = "Enter Number of Chances";
pub const GUESS_LABEL: &str = "Enter your guess";

pub const FIRST_GUESS_PROMPT: &str = "Make your 1st guess!!";
pub const HINT_HIGH: &str = "Your Guess is High";
pub const HINT_LOW: &str = "Your Guess is Low";
pub const NO_NUMBER_ENTERED: &str = "No number entered";

pub const WON: &str = "You Won! 🎉";
pub const LOST: &str = "You Ran Out of Chances!!️";

pub const START: &str = "Start";
pub const EXIT: &str = "Exit";
pub const CHECK_GUESS: &str = "Check Guess";
pub const PLAY_AGAIN: &str = "Play Again";
pub const QUIT: &str = "Quit";

/// Label of a chance shortcut button, e.g. `+3`.
pub fn shortcut_label(by: i32) -> String {
    format!("+{by}")
}

/// Remaining-chances line on the game screen.
pub fn chances_left(chances: u32) -> String {
    format!("Chances Left: {chances}")
}
