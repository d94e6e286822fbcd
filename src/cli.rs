//! The cli module ties the library together into the console game. It contains the `init()`
//! function that parses the command line, sets up logging, and runs the game loop.

use anyhow::Result;
use clap::{ArgAction, Parser};
use console::{style, Term};
use fastrand::Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{parse_range, GameConfig, MAX_ATTEMPTS};
use crate::game::{GameState, GuessResult, GuessingGame};
use crate::input::{play_again, take_guess};
use crate::messages::{describe, greeting, stylize};

/// This struct holds the command-line options of the game. Every game rule can also be given
/// through an environment variable.
#[derive(Parser)]
#[command(name = "guessgame", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// The number of guesses allowed per game.
    #[arg(short, long, default_value_t = MAX_ATTEMPTS)]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    #[arg(env = "GUESSGAME_ATTEMPTS", value_name = "N")]
    attempts: u32,
    /// Quit after a single game instead of offering another one.
    #[arg(long)]
    once: bool,
    /// The range the number to guess is picked from, in the format n..m (both inclusive).
    #[arg(short, long, default_value = "1..200", value_parser = parse_range)]
    #[arg(env = "GUESSGAME_RANGE", value_name = "N..M")]
    range: (u32, u32),
    /// The seed for the random number generator; the same seed picks the same numbers.
    #[arg(short, long)]
    #[arg(env = "GUESSGAME_SEED", value_name = "SEED")]
    seed: Option<u64>,
    /// Log more details to the standard error; repeat for more (-v, -vv, -vvv).
    ///
    /// The `RUST_LOG` environment variable takes precedence over this flag.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// This function builds the game rules out of the parsed options.
    fn config(&self) -> Result<GameConfig> {
        let (min, max) = self.range;

        Ok(GameConfig::new(min, max, self.attempts)?)
    }
}

/// Initializes the game and runs it until the player quits or the input is closed. This is a
/// `main()` function of sorts, though it is still called from main.rs.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - `guessgame::ConfigError`
/// - `io::Error`
/// - `dialoguer::Error`
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config()?;
    let rng = cli.seed.map_or_else(Rng::new, Rng::with_seed);
    let term = Term::stdout();
    let mut game = GuessingGame::with_rng(config, rng);

    info!(?config, seed = ?cli.seed, "starting game");
    init_message(&term, &game)?;

    // game loop
    loop {
        let finished = play_session(
            &mut game,
            |game| take_guess(&term, game),
            |result, message| Ok(term.write_line(&format!("{}", stylize(result, message)))?),
        )?;

        if !finished {
            return Ok(());
        }

        if !wants_another(cli.once, || play_again(&term))? {
            break Ok(());
        }

        game.reset();
        if term.is_term() {
            term.clear_screen()?;
        }
        init_message(&term, &game)?;
    }
}

/// This function prints the message shown at the start of every session. On a terminal, the title
/// of the console window is also set to the name of the game.
fn init_message(term: &Term, game: &GuessingGame) -> Result<()> {
    if term.is_term() {
        term.set_title("guessgame");
    }

    term.write_line(&format!("{}", style(greeting(game)).bold()))?;
    Ok(())
}

/// This function sets up the subscriber that writes log events to the standard error. The level
/// comes from `RUST_LOG` when set, and from the number of `-v` flags otherwise.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// This function plays turns on `game` until its session ends, handing every line returned by
/// `read` to the engine as it is and every resulting message to `write`. It returns `false` if the
/// input was closed before the session ended.
fn play_session<R, W>(game: &mut GuessingGame, mut read: R, mut write: W) -> Result<bool>
where
    R: FnMut(&GuessingGame) -> Result<Option<String>>,
    W: FnMut(GuessResult, String) -> Result<()>,
{
    while game.state() == GameState::InPlay {
        let Some(input) = read(game)? else {
            debug!("input closed");
            return Ok(false);
        };

        let result = game.submit_guess(&input);
        write(result, describe(result, game))?;
    }

    Ok(true)
}

/// This function decides whether another session is played; with `once` set, the player is never
/// asked.
fn wants_another<A>(once: bool, ask: A) -> Result<bool>
where
    A: FnOnce() -> Result<bool>,
{
    if once {
        return Ok(false);
    }

    ask()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::{CommandFactory as _, Parser as _};
    use fastrand::Rng;
    use rstest::rstest;

    use super::{play_session, wants_another, Cli};
    use crate::config::GameConfig;
    use crate::game::{GameState, GuessResult, GuessingGame};
    use crate::input::read_plain_line;

    /// Plays a session out of the given lines, returning whether it finished and every result shown.
    fn replay(game: &mut GuessingGame, lines: &str) -> (bool, Vec<(GuessResult, String)>) {
        let mut reader = Cursor::new(lines.to_owned());
        let mut shown = Vec::new();
        let finished = play_session(
            game,
            |_game| read_plain_line(&mut reader),
            |result, message| {
                shown.push((result, message));
                Ok(())
            },
        )
        .unwrap();

        (finished, shown)
    }

    #[rstest]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn defaults_match_the_classic_rules() {
        let cli = Cli::try_parse_from(["guessgame"]).unwrap();

        assert_eq!(cli.config().unwrap(), GameConfig::default(), "default rules");
        assert!(!cli.once, "replay offered by default");
        assert_eq!(cli.seed, None, "unseeded by default");
    }

    #[rstest]
    fn options_build_the_config() {
        let cli = Cli::try_parse_from(["guessgame", "-r", "5..50", "-a", "3", "--seed", "9"])
            .unwrap();

        assert_eq!(
            cli.config().unwrap(),
            GameConfig::new(5, 50, 3).unwrap(),
            "configured rules"
        );
        assert_eq!(cli.seed, Some(9), "seed kept");
    }

    #[rstest]
    #[case(&["guessgame", "--range", "50..5"])]
    #[case(&["guessgame", "--range", "five..ten"])]
    #[case(&["guessgame", "--attempts", "0"])]
    fn bad_options_are_rejected(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_err(), "args {args:?}");
    }

    #[rstest]
    fn verbosity_counts_flags() {
        let cli = Cli::try_parse_from(["guessgame", "-vv"]).unwrap();

        assert_eq!(cli.verbose, 2, "two flags");
    }

    #[rstest]
    fn closed_input_leaves_the_session_in_play() {
        let mut game = GuessingGame::with_rng(GameConfig::default(), Rng::with_seed(5));
        let (finished, shown) = replay(&mut game, "");

        assert!(!finished, "input closed first");
        assert!(shown.is_empty(), "nothing played");
        assert_eq!(game.state(), GameState::InPlay, "still in play");
        assert_eq!(game.attempts(), 0, "no attempt used");
    }

    #[rstest]
    fn lines_reach_the_engine_until_the_session_ends() {
        let mut game = GuessingGame::with_rng(GameConfig::default(), Rng::with_seed(5));
        let lines = format!("abc\r\n  {}  \nleftover\n", game.target());
        let (finished, shown) = replay(&mut game, &lines);

        assert!(finished, "session ended");
        assert_eq!(
            shown,
            vec![
                (
                    GuessResult::InvalidInput,
                    "Invalid input, please enter a number between 1 and 200.".to_owned()
                ),
                (GuessResult::Won, "You win!".to_owned()),
            ],
            "one message per line read"
        );
        assert_eq!(game.attempts(), 1, "only the valid guess counted");
    }

    #[rstest]
    fn session_ends_when_attempts_run_out() {
        let config = GameConfig::new(1, 2, 1).unwrap();
        let mut game = GuessingGame::with_rng(config, Rng::with_seed(5));
        let wrong = if game.target() == 1 { 2 } else { 1 };
        let (finished, shown) = replay(&mut game, &format!("{wrong}\n"));

        assert!(finished, "session ended");
        assert_eq!(shown.len(), 1, "single turn");
        assert_eq!(shown.first().map(|entry| entry.0), Some(GuessResult::Lost), "lost");
    }

    #[rstest]
    fn once_never_asks_for_another_game() {
        let answer = wants_another(true, || panic!("the player should not be asked"));

        assert!(!answer.unwrap(), "single game");
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn replay_follows_the_answer(#[case] answer: bool) {
        assert_eq!(wants_another(false, || Ok(answer)).unwrap(), answer, "answer {answer}");
    }
}
