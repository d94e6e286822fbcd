//! The game module contains the core of the game: the engine that holds a session and judges every
//! guess made against it.
//!
//! The engine performs no I/O of its own, so the same session type drives the console front end as
//! well as any widget-based one built on top of [`crate::play_turn`].

use fastrand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;

/// This enum holds the outcome of a single call to [`GuessingGame::submit_guess`] or
/// [`GuessingGame::submit_number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum GuessResult {
    /// The session had already ended before the guess was made, so nothing was processed.
    GameOver,
    /// The guess could not be read as a number, or fell outside of the guessing range. No attempt
    /// was consumed.
    InvalidInput,
    /// The guess was wrong and it was the last attempt available.
    Lost,
    /// The guess was greater than the target; the player should guess lower.
    TooHigh,
    /// The guess was smaller than the target; the player should guess higher.
    TooLow,
    /// The guess matched the target.
    Won,
}

/// This enum holds the phase a session is in. Once a session reaches [`GameState::GameOver`], only
/// [`GuessingGame::reset`] brings it back into play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// The session has ended, either because the target was found or the attempts ran out.
    GameOver,
    /// The session accepts guesses.
    InPlay,
}

/// This struct holds a single guessing session along with the generator used to draw the target
/// of every new session.
#[derive(Debug)]
pub struct GuessingGame {
    /// This field contains the number of guesses processed in the current session.
    attempts: u32,
    /// This field contains the rules the session is played with.
    config: GameConfig,
    /// This field contains the generator reused across resets, so that a seeded generator yields a
    /// reproducible sequence of targets.
    rng: Rng,
    /// This field contains the phase of the current session.
    state: GameState,
    /// This field contains the number to be guessed.
    target: u32,
}

impl GuessingGame {
    /// The number of guesses processed so far in this session.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The rules this session is played with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the session has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }

    /// Starts a new session with a generator seeded from the system's entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, Rng::new())
    }

    /// The number of guesses the player still has.
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.config.max_attempts().saturating_sub(self.attempts)
    }

    /// Draws a new target and puts the session back into play with no attempts taken.
    pub fn reset(&mut self) {
        self.target = self
            .rng
            .u32(self.config.min_guess()..=self.config.max_guess());
        self.attempts = 0;
        self.state = GameState::InPlay;

        debug!(
            min = self.config.min_guess(),
            max = self.config.max_guess(),
            attempts = self.config.max_attempts(),
            "new session started"
        );
    }

    /// The phase the session is in.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Plays a turn out of raw user input. Surrounding whitespace is ignored, and anything that
    /// doesn't read as an integer is reported as [`GuessResult::InvalidInput`].
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        if self.is_over() {
            return GuessResult::GameOver;
        }

        match raw.trim().parse::<i64>() {
            Ok(value) => self.submit_number(value),
            Err(err) => {
                debug!(input = raw, %err, "rejected unreadable guess");
                GuessResult::InvalidInput
            }
        }
    }

    /// Plays a turn out of an already numeric guess, such as the value of a spin control.
    pub fn submit_number(&mut self, value: i64) -> GuessResult {
        if self.is_over() {
            return GuessResult::GameOver;
        }
        if !self.config.contains(value) {
            debug!(value, "rejected out of range guess");
            return GuessResult::InvalidInput;
        }

        self.attempts += 1;

        let result = match value {
            _ if value == i64::from(self.target) => GuessResult::Won,
            _ if self.attempts >= self.config.max_attempts() => GuessResult::Lost,
            _ if value > i64::from(self.target) => GuessResult::TooHigh,
            _ => GuessResult::TooLow,
        };

        if matches!(result, GuessResult::Won | GuessResult::Lost) {
            self.state = GameState::GameOver;
            info!(?result, attempts = self.attempts, target = self.target, "session over");
        } else {
            debug!(?result, attempts = self.attempts, "turn played");
        }

        result
    }

    /// The number to be guessed in the current session.
    #[must_use]
    pub const fn target(&self) -> u32 {
        self.target
    }

    /// The 1-based number of the turn about to be played, capped at the attempt budget.
    #[must_use]
    pub fn turn(&self) -> u32 {
        (self.attempts + 1).min(self.config.max_attempts())
    }

    /// Starts a new session drawing its targets from the given generator.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: Rng) -> Self {
        let mut game = Self {
            attempts: 0,
            config,
            rng,
            state: GameState::InPlay,
            target: config.min_guess(),
        };
        game.reset();

        game
    }
}
