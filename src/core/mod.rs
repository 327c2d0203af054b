//! Core domain types for hangman
//!
//! Words, letter sets and the revealed-letter board. These types are pure and
//! shared by the game engine, the output protocol and the solver.

mod board;
mod letters;
mod word;

pub use board::{Board, HIDDEN};
pub use letters::{ALPHABET, LetterSet, VOWELS};
pub use word::{Word, WordError};
