//! Hangman solver bot
//!
//! Runs the game as a child process and plays it through its console: game
//! output is classified line by line and every prompt is answered with a letter
//! chosen by a [`Strategy`].

pub mod driver;
pub mod round;
pub mod strategy;

pub use driver::{Driver, Score};
pub use round::{RoundRecord, RoundTracker};
pub use strategy::{RoundView, Strategy, StrategyKind, StrategyType};

use crate::game::Difficulty;
use crate::options::GameOptions;
use log::{debug, info, warn};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to start game process {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("game process has no {0} pipe")]
    MissingPipe(&'static str),
    #[error("game I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("every letter has been guessed but the game still wants more")]
    OutOfLetters,
}

/// How to launch the game being solved
#[derive(Debug, Clone)]
pub struct GameCommand {
    /// Executable providing the `play` subcommand
    pub program: PathBuf,
    /// Lexicon argument passed through to the game
    pub lexicon: String,
    /// Seed for the game's answer order
    pub seed: Option<u64>,
}

impl GameCommand {
    /// Options the game is always launched with: answers shown, hard budget,
    /// every word played once
    pub const OPTIONS: GameOptions = GameOptions {
        debug: true,
        hard: true,
        rush: true,
    };

    /// Guess budget the game will start each round with
    #[must_use]
    pub const fn budget() -> u32 {
        Difficulty::Hard.budget()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("play");
        if let Some(seed) = self.seed {
            cmd.arg("--seed").arg(seed.to_string());
        }
        cmd.arg(Self::OPTIONS.to_flags().to_string())
            .arg(&self.lexicon)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());
        cmd
    }
}

/// Spawn the game and drive it to completion
///
/// # Errors
/// Returns [`SolverError::Spawn`] if the game cannot be started, otherwise
/// whatever the driver reports. The child is killed if the driver fails.
pub fn solve<S: Strategy, C: Write>(
    game: &GameCommand,
    driver: Driver<S>,
    console: &mut C,
) -> Result<Score, SolverError> {
    let mut cmd = game.command();
    debug!("spawning {cmd:?}");

    let mut child = cmd.spawn().map_err(|source| SolverError::Spawn {
        program: game.program.clone(),
        source,
    })?;

    let stdout = child.stdout.take().ok_or(SolverError::MissingPipe("stdout"))?;
    let stdin = child.stdin.take().ok_or(SolverError::MissingPipe("stdin"))?;

    let result = driver.run(BufReader::new(stdout), stdin, console);

    if result.is_err() {
        // The game may already have exited on its own
        child
            .kill()
            .unwrap_or_else(|e| warn!("failed to stop game process: {e}"));
    }

    let status = child.wait()?;
    info!("game process exited: {status}");

    result
}
