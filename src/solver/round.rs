//! Per-round bookkeeping reconstructed from game output

use super::strategy::RoundView;
use crate::core::{Board, LetterSet};

/// How one observed round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    /// The answer, when the game disclosed it
    pub answer: Option<String>,
    pub won: bool,
    /// Letters sent to the game
    pub guesses: u32,
    /// Guesses that revealed something
    pub correct: u32,
    /// Guesses remaining when the round ended
    pub remaining: u32,
}

/// What the solver has learned about the round in progress
#[derive(Debug, Clone)]
pub struct RoundTracker {
    budget: u32,
    remaining: u32,
    boards_seen: u32,
    guessed: LetterSet,
    board: Option<Board>,
    answer: Option<String>,
}

impl RoundTracker {
    /// Start tracking with the game's guess budget
    #[must_use]
    pub const fn new(budget: u32) -> Self {
        Self {
            budget,
            remaining: budget,
            boards_seen: 0,
            guessed: LetterSet::EMPTY,
            board: None,
            answer: None,
        }
    }

    pub const fn on_miss(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// A board line; every board after the opening one follows a correct guess
    pub fn on_board(&mut self, board: Board) {
        self.boards_seen += 1;
        self.board = Some(board);
    }

    /// The game announced how many guesses are left
    pub const fn on_prompt(&mut self, remaining: u32) {
        self.remaining = remaining;
    }

    pub fn on_answer(&mut self, answer: String) {
        self.answer = Some(answer);
    }

    /// Remember a letter sent to the game
    pub fn record_guess(&mut self, letter: u8) {
        self.guessed.insert(letter);
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Correct guesses so far this round
    ///
    /// The winning guess is not counted: the game announces the win instead
    /// of printing a final board.
    #[must_use]
    pub const fn correct(&self) -> u32 {
        self.boards_seen.saturating_sub(1)
    }

    #[must_use]
    pub fn view(&self) -> RoundView<'_> {
        RoundView {
            board: self.board.as_ref(),
            guessed: self.guessed,
            correct: self.correct(),
            remaining: self.remaining,
        }
    }

    /// Close the round and reset for the next one
    pub fn finish(&mut self, won: bool) -> RoundRecord {
        let record = RoundRecord {
            answer: self.answer.take(),
            won,
            guesses: self.guessed.len() as u32,
            correct: self.correct(),
            remaining: self.remaining,
        };
        *self = Self::new(self.budget);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_is_not_a_correct_guess() {
        let mut tracker = RoundTracker::new(6);
        tracker.on_board(Board::parse("-----").unwrap());
        assert_eq!(tracker.correct(), 0);

        tracker.on_board(Board::parse("-E---").unwrap());
        tracker.on_board(Board::parse("-E-E-").unwrap());
        assert_eq!(tracker.correct(), 2);
        assert_eq!(tracker.view().board.unwrap().to_string(), "-E-E-");
    }

    #[test]
    fn misses_and_prompts_track_remaining() {
        let mut tracker = RoundTracker::new(6);
        tracker.on_miss();
        tracker.on_miss();
        assert_eq!(tracker.remaining(), 4);

        tracker.on_prompt(5);
        assert_eq!(tracker.remaining(), 5);
    }

    #[test]
    fn finish_reports_and_resets() {
        let mut tracker = RoundTracker::new(6);
        tracker.on_board(Board::parse("---").unwrap());
        tracker.record_guess(b'A');
        tracker.record_guess(b'Q');
        tracker.on_miss();
        tracker.on_answer("CAT".to_string());

        let record = tracker.finish(false);
        assert_eq!(
            record,
            RoundRecord {
                answer: Some("CAT".to_string()),
                won: false,
                guesses: 2,
                correct: 0,
                remaining: 5,
            }
        );

        assert_eq!(tracker.remaining(), 6);
        assert!(tracker.view().guessed.is_empty());
        assert!(tracker.view().board.is_none());
    }
}
