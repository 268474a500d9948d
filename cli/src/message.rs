use carrotfield_core::TurnOutcome;
use crossterm::style::{Color, Stylize};

pub const ROWS_PROMPT: &str = "Enter number of rows: ";
pub const COLS_PROMPT: &str = "Enter number of cols: ";
pub const TURN_PROMPT: &str = "Which way: ";

pub const WELCOME: &str = "Welcome to Find Your Hat!";
pub const LEGEND: &str = "w(up) | s(down) | a(left) | d(right) | q(quit)";
pub const INVALID_SIZE: &str = "Invalid! Input must be a number (between 5-10) & no space!";
pub const INVALID_KEY: &str = "Invalid key";
pub const WIN: &str = "🎉 👍 You found the carrot!";
pub const LOST: &str = "😭 You fell into a hole!";
pub const OUT: &str = "😵 You have stepped out of the field!";
pub const QUIT: &str = "Thank you. You quit the game.";
pub const GAME_OVER: &str = "Game Over!";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

impl Tone {
    const fn color(self) -> Color {
        match self {
            Self::Success => Color::DarkGreen,
            Self::Failure => Color::DarkRed,
        }
    }
}

pub fn paint(text: &str, tone: Tone) -> String {
    text.with(tone.color()).to_string()
}

pub fn welcome() -> String {
    paint(&format!("{WELCOME}\n{}\n", "*".repeat(50)), Tone::Success)
}

pub fn legend() -> String {
    paint(LEGEND, Tone::Success)
}

pub fn invalid_size() -> String {
    paint(INVALID_SIZE, Tone::Failure)
}

pub fn game_over() -> String {
    paint(GAME_OVER, Tone::Success)
}

/// Line printed after a turn, if the turn deserves one.
pub fn for_outcome(outcome: TurnOutcome) -> Option<String> {
    use TurnOutcome::*;

    let (text, tone) = match outcome {
        Moved(_) => return None,
        Ignored => (INVALID_KEY, Tone::Failure),
        Won => (WIN, Tone::Success),
        Lost => (LOST, Tone::Failure),
        OutOfBounds => (OUT, Tone::Failure),
        Quit => (QUIT, Tone::Success),
    };
    Some(paint(text, tone))
}
