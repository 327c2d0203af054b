//! Single-game turn engine
//!
//! Owns the answer, the revealed board and the remaining guess budget, and
//! applies one guess at a time.

use crate::core::{Board, LetterSet, Word};
use thiserror::Error;

/// Guess budget presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Wrong guesses allowed before the player is hung
    #[must_use]
    pub const fn budget(self) -> u32 {
        match self {
            Self::Normal => 8,
            Self::Hard => 6,
        }
    }
}

/// Result of matching one guessed character against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// At least one new position was revealed
    Revealed(usize),
    /// The letter was already showing on the board
    AlreadyRevealed,
    /// The letter is not in the answer
    Miss,
}

/// Whether the game continues after a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Outcome of a single turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// The guessed character after uppercasing
    pub letter: char,
    pub outcome: GuessOutcome,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("the game is already over")]
    Finished,
}

/// One game of hangman
#[derive(Debug, Clone)]
pub struct Game {
    answer: Word,
    board: Board,
    guesses_left: u32,
    guessed: LetterSet,
    misses: u32,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(answer: Word, difficulty: Difficulty) -> Self {
        let board = Board::hidden(&answer);
        Self {
            answer,
            board,
            guesses_left: difficulty.budget(),
            guessed: LetterSet::EMPTY,
            misses: 0,
            status: GameStatus::Playing,
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Letters guessed so far, hits and misses alike
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Wrong guesses made so far
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.misses
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply one guessed character
    ///
    /// The character is uppercased before matching. Characters that are not
    /// letters can never match and count as a miss, as does repeating an
    /// earlier miss. Only misses cost a guess.
    ///
    /// # Errors
    /// Returns [`EngineError::Finished`] if the game has already been won or lost.
    pub fn guess(&mut self, guess: char) -> Result<Turn, EngineError> {
        if self.status != GameStatus::Playing {
            return Err(EngineError::Finished);
        }

        let letter = guess.to_ascii_uppercase();
        let outcome = if letter.is_ascii_alphabetic() {
            let byte = letter as u8;
            self.guessed.insert(byte);
            if self.board.revealed_letters().contains(byte) {
                GuessOutcome::AlreadyRevealed
            } else {
                match self.board.reveal(&self.answer, byte) {
                    0 => GuessOutcome::Miss,
                    n => GuessOutcome::Revealed(n),
                }
            }
        } else {
            GuessOutcome::Miss
        };

        match outcome {
            GuessOutcome::Revealed(_) if self.board.is_complete() => {
                self.status = GameStatus::Won;
            }
            GuessOutcome::Miss => {
                self.misses += 1;
                self.guesses_left = self.guesses_left.saturating_sub(1);
                if self.guesses_left == 0 {
                    self.status = GameStatus::Lost;
                }
            }
            _ => {}
        }

        Ok(Turn {
            letter,
            outcome,
            status: self.status,
        })
    }
}
