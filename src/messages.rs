//! This module turns the outcome of a turn into the text shown to the player. Front ends are free to
//! style the text however they like; the wording is shared between all of them.

use console::{style, StyledObject};

use crate::game::{GuessResult, GuessingGame};

/// This function returns the message describing the result of the last turn played on `game`.
///
/// The game is needed for the messages that mention the guessing range or reveal the target once
/// the session is lost.
#[must_use]
pub fn describe(result: GuessResult, game: &GuessingGame) -> String {
    match result {
        GuessResult::GameOver => "The game is already over, no more moves left.".to_owned(),
        GuessResult::InvalidInput => format!(
            "Invalid input, please enter a number between {} and {}.",
            game.config().min_guess(),
            game.config().max_guess()
        ),
        GuessResult::Lost => format!("Out of turns! The correct answer was {}.", game.target()),
        GuessResult::TooHigh => "Nope, try again! Hint: guess a smaller number.".to_owned(),
        GuessResult::TooLow => "Wrong... Hint: guess a bigger number.".to_owned(),
        GuessResult::Won => "You win!".to_owned(),
    }
}

/// Styles a message for the terminal: wins in green, losses in red, and everything else in bold.
pub(crate) fn stylize(result: GuessResult, message: String) -> StyledObject<String> {
    match result {
        GuessResult::Won => style(message).green().bold(),
        GuessResult::Lost => style(message).red().bold(),
        GuessResult::GameOver | GuessResult::InvalidInput => style(message).yellow(),
        GuessResult::TooHigh | GuessResult::TooLow => style(message).bold(),
    }
}

/// The line greeting the player at the start of every session.
pub(crate) fn greeting(game: &GuessingGame) -> String {
    format!(
        "Guess a number between {} and {} inclusive:",
        game.config().min_guess(),
        game.config().max_guess()
    )
}
