//! Revealed-letter board
//!
//! The board is the player's view of the answer: each position is either
//! hidden or shows its letter. It renders as the answer with every hidden
//! letter replaced by [`HIDDEN`], e.g. `-A--A-` for `BANANA` after guessing `A`.

use super::{LetterSet, Word};
use std::fmt;

/// Placeholder rendered for a hidden position
pub const HIDDEN: char = '-';

/// Per-position revealed state of a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<u8>>,
}

impl Board {
    /// A board for `word` with every position hidden
    #[must_use]
    pub fn hidden(word: &Word) -> Self {
        Self {
            cells: vec![None; word.len()],
        }
    }

    /// Parse a rendered board such as `-A--A-`
    ///
    /// Returns `None` if the text is empty or contains anything other than
    /// ASCII letters and the hidden marker.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        text.chars()
            .map(|c| match c {
                HIDDEN => Some(None),
                c if c.is_ascii_alphabetic() => Some(Some(c.to_ascii_uppercase() as u8)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(|cells| Self { cells })
    }

    /// Reveal every position of `word` holding `letter`
    ///
    /// Returns the number of positions newly revealed.
    pub fn reveal(&mut self, word: &Word, letter: u8) -> usize {
        let letter = letter.to_ascii_uppercase();
        let mut revealed = 0;

        for (cell, &actual) in self.cells.iter_mut().zip(word.bytes()) {
            if cell.is_none() && actual == letter {
                *cell = Some(actual);
                revealed += 1;
            }
        }

        revealed
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letter at `position`, if revealed
    #[inline]
    #[must_use]
    pub fn cell(&self, position: usize) -> Option<u8> {
        self.cells.get(position).copied().flatten()
    }

    /// Iterate over positions
    pub fn cells(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.cells.iter().copied()
    }

    /// True once no position is hidden
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of hidden positions
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Distinct letters currently shown
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.cells.iter().flatten().copied().collect()
    }

    /// Whether `word` could be the answer behind this board, given every
    /// letter guessed so far
    ///
    /// Revealed positions must match, and hidden positions cannot hold a letter
    /// that was already guessed (it would have been revealed).
    #[must_use]
    pub fn admits(&self, word: &Word, guessed: LetterSet) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.bytes())
                .all(|(cell, &letter)| match cell {
                    Some(shown) => *shown == letter,
                    None => !guessed.contains(letter),
                })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(letter) => write!(f, "{}", *letter as char)?,
                None => write!(f, "{HIDDEN}")?,
            }
        }
        Ok(())
    }
}
