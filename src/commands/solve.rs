//! Solver command
//!
//! Launches the game as a child process and plays every lexicon word through it.

use crate::lexicon::Lexicon;
use crate::solver::{Driver, GameCommand, Score, StrategyKind, solve};
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

/// Configuration for a solver run
pub struct SolveConfig {
    /// Lexicon file path, or `builtin`
    pub lexicon: String,
    /// Echo the game transcript and per-round tallies
    pub debug: bool,
    pub strategy: StrategyKind,
    /// Seeds both the game's answer order and the strategy
    pub seed: Option<u64>,
    /// Game executable; defaults to this program
    pub game: Option<PathBuf>,
}

/// Run the solver against a child game process
///
/// # Errors
///
/// Returns an error if the lexicon cannot be loaded, the game cannot be
/// started, or the game's pipes fail mid-run.
pub fn run_solve(config: &SolveConfig) -> Result<Score> {
    // Loaded up front so a bad lexicon fails before spawning, and for the
    // candidates strategy
    let words = Lexicon::load_words(&config.lexicon)
        .with_context(|| format!("cannot solve with lexicon {:?}", config.lexicon))?;

    let program = match &config.game {
        Some(path) => path.clone(),
        None => std::env::current_exe().context("cannot locate the game executable")?,
    };

    let game = GameCommand {
        program,
        lexicon: config.lexicon.clone(),
        seed: config.seed,
    };

    let strategy = config
        .strategy
        .build(&words, config.seed.unwrap_or_else(rand::random));
    let driver = Driver::new(strategy, GameCommand::budget(), config.debug);

    let stdout = io::stdout();
    let mut console = stdout.lock();
    let score = solve(&game, driver, &mut console)?;

    Ok(score)
}
