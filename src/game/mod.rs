//! The hangman game
//!
//! [`engine`] scores individual guesses; [`session`] runs games over a console.

pub mod engine;
pub mod session;

pub use engine::{Difficulty, EngineError, Game, GameStatus, GuessOutcome, Turn};
pub use session::{Session, SessionError, SessionSummary};
