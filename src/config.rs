//! The config module holds the bounds of a game: the inclusive range the target number is drawn
//! from, and the number of attempts the player gets before losing.
//!
//! It also contains the parser for ranges written in the `n..m` format, which is used by the
//! command-line argument parser.

use std::sync::LazyLock;

use regex::Regex;

/// The lowest number that can be guessed when no range is given.
pub const MIN_GUESS: u32 = 1;
/// The highest number that can be guessed when no range is given.
pub const MAX_GUESS: u32 = 200;
/// The number of attempts a player gets when no budget is given.
pub const MAX_ATTEMPTS: u32 = 10;

/// The format of a range, with both bounds made out of ASCII digits only.
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A([0-9]+)\.\.([0-9]+)\z").expect("the range pattern is a valid regex")
});

/// This enum holds every reason for which a game configuration may be rejected.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The lower bound of the range is greater than the upper bound.
    #[error("invalid range; start ({min}) must not be greater than end ({max})")]
    EmptyRange {
        /// The lower bound that was given.
        min: u32,
        /// The upper bound that was given.
        max: u32,
    },
    /// The range doesn't follow the `n..m` format.
    #[error("invalid range `{0}`; use the format n..m with both bounds inclusive")]
    MalformedRange(String),
    /// The attempt budget is zero, so the game could never be played.
    #[error("the number of attempts must be at least 1")]
    NoAttempts,
    /// One of the bounds is too large to be represented.
    #[error("invalid range; `{0}` does not fit within the supported bounds")]
    OutOfBounds(String),
}

/// This struct holds the rules a game is played with. It can only be built through
/// [`GameConfig::new`] or [`Default`], so the bounds it carries are always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// This field contains the number of guesses the player may make in a single session.
    max_attempts: u32,
    /// This field contains the highest number, inclusive, that the target can be.
    max_guess: u32,
    /// This field contains the lowest number, inclusive, that the target can be.
    min_guess: u32,
}

impl GameConfig {
    /// Checks whether a number lies within the inclusive guessing range.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.min_guess)..=i64::from(self.max_guess)).contains(&value)
    }

    /// The number of guesses allowed per session.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// The upper bound of the guessing range.
    #[must_use]
    pub const fn max_guess(&self) -> u32 {
        self.max_guess
    }

    /// The lower bound of the guessing range.
    #[must_use]
    pub const fn min_guess(&self) -> u32 {
        self.min_guess
    }

    /// Builds a configuration out of the given bounds and attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyRange`] if `min_guess` is greater than `max_guess`, and
    /// [`ConfigError::NoAttempts`] if `max_attempts` is zero.
    pub const fn new(min_guess: u32, max_guess: u32, max_attempts: u32) -> Result<Self, ConfigError> {
        if min_guess > max_guess {
            return Err(ConfigError::EmptyRange {
                min: min_guess,
                max: max_guess,
            });
        }
        if max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }

        Ok(Self {
            max_attempts,
            max_guess,
            min_guess,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_guess: MAX_GUESS,
            min_guess: MIN_GUESS,
        }
    }
}

/// This function parses a range in the format `n..m`, both ends inclusive, into its two bounds.
/// It serves as the value parser for the `--range` command-line option.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedRange`] when the input doesn't match the format,
/// [`ConfigError::OutOfBounds`] when a bound doesn't fit in a `u32`, and
/// [`ConfigError::EmptyRange`] when the start is greater than the end.
pub fn parse_range(input: &str) -> Result<(u32, u32), ConfigError> {
    let captures = RANGE_PATTERN
        .captures(input.trim())
        .ok_or_else(|| ConfigError::MalformedRange(input.to_owned()))?;

    let bound = |index: usize| -> Result<u32, ConfigError> {
        let digits = captures.get(index).map_or("", |found| found.as_str());
        digits
            .parse()
            .map_err(|_parse| ConfigError::OutOfBounds(digits.to_owned()))
    };
    let (start, end) = (bound(1)?, bound(2)?);

    if start > end {
        return Err(ConfigError::EmptyRange {
            min: start,
            max: end,
        });
    }

    Ok((start, end))
}
