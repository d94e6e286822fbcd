//! This module holds the adapter for widget-based front ends. A toolkit wires its spin control to
//! [`play_number`] (or a text field to [`play_turn`]) and copies the returned [`Panel`] into its
//! labels and indicator lights; no game logic lives on the toolkit side.

use std::ops::RangeInclusive;

use crate::config::GameConfig;
use crate::game::{GuessResult, GuessingGame};
use crate::messages::describe;

/// This struct holds everything a widget-based front end needs to render after a turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    /// Whether the light hinting at a higher guess is on.
    pub higher_indicator_on: bool,
    /// Whether the guess input and button should still accept interaction.
    pub input_enabled: bool,
    /// The text for the main label.
    pub label: String,
    /// Whether the light hinting at a lower guess is on.
    pub lower_indicator_on: bool,
    /// The result of the turn, or `None` if no turn has been played yet.
    pub result: Option<GuessResult>,
}

impl Panel {
    /// Renders the panel after a turn that ended with `result`.
    fn after(result: GuessResult, game: &GuessingGame) -> Self {
        Self {
            higher_indicator_on: result == GuessResult::TooLow,
            input_enabled: !game.is_over(),
            label: describe(result, game),
            lower_indicator_on: result == GuessResult::TooHigh,
            result: Some(result),
        }
    }

    /// Renders the panel of a session before any turn has been played, with the range as the
    /// instruction text and both lights off.
    #[must_use]
    pub fn idle(game: &GuessingGame) -> Self {
        Self {
            higher_indicator_on: false,
            input_enabled: !game.is_over(),
            label: format!(
                "Guess a number between {} and {}. You have {} tries left.",
                game.config().min_guess(),
                game.config().max_guess(),
                game.remaining_attempts()
            ),
            lower_indicator_on: false,
            result: None,
        }
    }
}

/// This function plays a single turn out of the value of a numeric widget, such as a spin control,
/// and returns the state the panel should be redrawn with.
pub fn play_number(game: &mut GuessingGame, value: i64) -> Panel {
    let result = game.submit_number(value);

    Panel::after(result, game)
}

/// This function plays a single turn out of the raw text read from an input widget and returns the
/// state the panel should be redrawn with.
pub fn play_turn(game: &mut GuessingGame, raw: &str) -> Panel {
    let result = game.submit_guess(raw);

    Panel::after(result, game)
}

/// The bounds a spin control should be limited to for the given rules.
#[must_use]
pub const fn spin_bounds(config: &GameConfig) -> RangeInclusive<u32> {
    RangeInclusive::new(config.min_guess(), config.max_guess())
}
