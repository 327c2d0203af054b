//! Hangman
//!
//! A line-oriented hangman game and an automated solver that plays it over
//! pipes, plus in-process strategy benchmarking.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::game::{Difficulty, Game, GameStatus};
//!
//! let answer = Word::new("moon").unwrap();
//! let mut game = Game::new(answer, Difficulty::Normal);
//!
//! game.guess('o').unwrap();
//! game.guess('m').unwrap();
//! let turn = game.guess('n').unwrap();
//! assert_eq!(turn.status, GameStatus::Won);
//! assert_eq!(game.board().to_string(), "MOON");
//! ```

// Core domain types
pub mod core;

// Answer pools
pub mod lexicon;

// Game engine and console session
pub mod game;

// Line protocol between game and solver
pub mod protocol;

// Compact command-line flags
pub mod options;

// Automated player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
