//! The library components of the game. They allow configuring a game, playing it through the
//! I/O-free [`GuessingGame`] engine, and rendering its results either as console messages or as
//! the state of a widget-based panel.
//!
//! The starting point of the console game is the cli.rs file, which contains the main game loop.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod cli;
mod config;
mod game;
mod input;
mod messages;
mod panel;

pub use cli::init;
pub use config::{parse_range, ConfigError, GameConfig, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS};
pub use game::{GameState, GuessResult, GuessingGame};
pub use messages::describe;
pub use panel::{play_number, play_turn, spin_bounds, Panel};
