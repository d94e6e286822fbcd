//! # guessgame
//!
//! This crate is a game about guessing a number picked at random from a range. Every guess is
//! answered with a hint telling whether the number is higher or lower, and the game is lost once
//! the attempts run out.
//!
//! The rules of the game live in the library crate, which performs no I/O, so that the same engine
//! can be reused by other front ends. This binary is the console one.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use guessgame::init;

fn main() -> Result<()> {
    init()
}
