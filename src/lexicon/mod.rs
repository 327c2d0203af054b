//! Answer pool for hangman
//!
//! A [`Lexicon`] owns the loaded words and hands out answers. In normal play an
//! answer is drawn uniformly at random each game; in rush mode the words are
//! shuffled once and dealt out in order until every word has been played.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

use crate::core::Word;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use thiserror::Error;

/// Lexicon argument selecting the embedded word list
pub const BUILTIN_NAME: &str = "builtin";

/// Errors raised while building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon contains no valid words")]
    Empty,
}

/// How answers are drawn from the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOrder {
    /// Independent uniform draw each game (words may repeat)
    Random,
    /// Shuffle once, then deal every word exactly once
    Rush,
}

/// An answer handed out by the lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawn<'a> {
    /// Position of the word in the lexicon's (possibly shuffled) order
    pub index: usize,
    pub word: &'a Word,
}

/// Pool of answers
pub struct Lexicon {
    words: Vec<Word>,
    order: DrawOrder,
    next: usize,
    rng: StdRng,
}

impl Lexicon {
    /// Build a lexicon seeded from the operating system
    ///
    /// # Errors
    /// Returns [`LexiconError::Empty`] if `words` is empty.
    pub fn new(words: Vec<Word>, order: DrawOrder) -> Result<Self, LexiconError> {
        Self::with_rng(words, order, StdRng::from_os_rng())
    }

    /// Build a lexicon with a seeded random source for reproducible games
    ///
    /// # Errors
    /// Returns [`LexiconError::Empty`] if `words` is empty.
    pub fn seeded(words: Vec<Word>, order: DrawOrder, seed: u64) -> Result<Self, LexiconError> {
        Self::with_rng(words, order, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        mut words: Vec<Word>,
        order: DrawOrder,
        mut rng: StdRng,
    ) -> Result<Self, LexiconError> {
        if words.is_empty() {
            return Err(LexiconError::Empty);
        }

        if order == DrawOrder::Rush {
            // Every rush session plays in a fresh order
            words.shuffle(&mut rng);
        }

        debug!("lexicon ready: {} words, {order:?} order", words.len());

        Ok(Self {
            words,
            order,
            next: 0,
            rng,
        })
    }

    /// Load and build a lexicon from a lexicon argument
    ///
    /// # Errors
    /// Propagates load errors and rejects an empty word list.
    pub fn open(source: &str, order: DrawOrder, seed: Option<u64>) -> Result<Self, LexiconError> {
        let words = Self::load_words(source)?;
        match seed {
            Some(seed) => Self::seeded(words, order, seed),
            None => Self::new(words, order),
        }
    }

    /// Load words named by a lexicon argument: [`BUILTIN_NAME`] or a file path
    ///
    /// # Errors
    /// Propagates loader errors for unreadable or empty files.
    pub fn load_words(source: &str) -> Result<Vec<Word>, LexiconError> {
        if source == BUILTIN_NAME {
            Ok(loader::words_from_slice(BUILTIN))
        } else {
            loader::load_from_file(source)
        }
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in current draw order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub const fn order(&self) -> DrawOrder {
        self.order
    }

    /// Number of words not yet dealt in rush mode
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len() - self.next
    }

    /// Draw the next answer
    ///
    /// Returns `None` once every word has been played in rush mode. In random
    /// order this always returns a word.
    pub fn next_answer(&mut self) -> Option<Drawn<'_>> {
        let index = match self.order {
            DrawOrder::Rush => {
                if self.next >= self.words.len() {
                    return None;
                }
                self.next += 1;
                self.next - 1
            }
            DrawOrder::Random => self.rng.random_range(0..self.words.len()),
        };

        Some(Drawn {
            index,
            word: &self.words[index],
        })
    }
}
