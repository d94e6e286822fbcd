//! This module contains all functions related to taking input from the user. On a terminal they use
//! the `dialoguer` crate to prompt for input; otherwise they fall back to reading plain lines from
//! the standard input, so the game can be driven by a pipe.
//!
//! Guesses are not validated here. The raw line goes to the engine, which decides whether it is a
//! valid guess.

use std::io::{self, BufRead};

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::game::GuessingGame;

/// This function takes the input for the next guess, prompting with the number of the turn about to
/// be played. It returns `None` once the input has been closed.
pub(crate) fn take_guess(term: &Term, game: &GuessingGame) -> Result<Option<String>> {
    let prompt = format!("turn {}/{}", game.turn(), game.config().max_attempts());

    if !term.is_term() {
        term.write_line(&prompt)?;
        return read_plain_line(&mut io::stdin().lock());
    }

    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(prompt).bold()))
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(Some(input))
}

/// This function asks the player whether they want to play another session. Without a terminal to
/// ask on, the answer is always no.
pub(crate) fn play_again(term: &Term) -> Result<bool> {
    if !term.is_term() {
        return Ok(false);
    }

    let answer = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Want to continue for another game?").bold()))
        .default(true)
        .interact_on(term)?;

    Ok(answer)
}

/// Reads a single line from `reader`, without its line ending. Anything else on the line is kept as
/// it is, since judging the guess is up to the engine.
pub(crate) fn read_plain_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();

    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::read_plain_line;

    #[rstest]
    fn empty_input_is_closed() {
        let mut reader = Cursor::new("");

        assert_eq!(read_plain_line(&mut reader).unwrap(), None, "nothing to read");
    }

    #[rstest]
    #[case("42\n", "42")]
    #[case("42\r\n", "42")]
    #[case("42", "42")]
    #[case(" 42 \n", " 42 ")]
    #[case("abc\n", "abc")]
    #[case("\n", "")]
    fn line_endings_are_dropped(#[case] input: &str, #[case] expected: &str) {
        let mut reader = Cursor::new(input);

        assert_eq!(
            read_plain_line(&mut reader).unwrap().as_deref(),
            Some(expected),
            "input {input:?}"
        );
    }

    #[rstest]
    fn each_call_reads_one_line() {
        let mut reader = Cursor::new("150\n50\r\n100");

        assert_eq!(read_plain_line(&mut reader).unwrap().as_deref(), Some("150"), "first");
        assert_eq!(read_plain_line(&mut reader).unwrap().as_deref(), Some("50"), "second");
        assert_eq!(read_plain_line(&mut reader).unwrap().as_deref(), Some("100"), "third");
        assert_eq!(read_plain_line(&mut reader).unwrap(), None, "closed");
    }
}
