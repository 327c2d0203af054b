//! Interactive game command
//!
//! Plays hangman on the process's own stdin/stdout.

use crate::game::{Session, SessionSummary};
use crate::lexicon::Lexicon;
use crate::options::GameOptions;
use anyhow::{Context, Result};
use std::io;

/// Configuration for a game session
pub struct PlayConfig {
    /// Lexicon file path, or `builtin`
    pub lexicon: String,
    pub options: GameOptions,
    /// Fixed seed for reproducible answer order
    pub seed: Option<u64>,
}

/// Run a game session on the console
///
/// # Errors
///
/// Returns an error if the lexicon cannot be loaded or console I/O fails.
pub fn run_play(config: &PlayConfig) -> Result<SessionSummary> {
    let mut lexicon = Lexicon::open(
        &config.lexicon,
        config.options.draw_order(),
        config.seed,
    )
    .with_context(|| format!("cannot play with lexicon {:?}", config.lexicon))?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(&mut lexicon, config.options, stdin.lock(), stdout.lock())
        .run()
        .context("game session failed")
}
