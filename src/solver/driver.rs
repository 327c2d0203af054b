//! Reactive control loop over the game's console
//!
//! The driver reads the game's output line by line, keeps the round tracker
//! current, and answers every prompt with a letter from its strategy.

use super::SolverError;
use super::round::{RoundRecord, RoundTracker};
use super::strategy::Strategy;
use crate::protocol::GameEvent;
use log::{debug, info, warn};
use std::fmt;
use std::io::{BufRead, Write};

/// Wins and losses across every observed round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
    pub rounds: Vec<RoundRecord>,
    /// Whether the game reported that the whole lexicon was played
    pub complete: bool,
}

impl Score {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.wins + self.losses
    }

    fn record(&mut self, round: RoundRecord) {
        if round.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.rounds.push(round);
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.wins, self.total())
    }
}

/// Drives one game process with a strategy
pub struct Driver<S> {
    strategy: S,
    debug: bool,
    tracker: RoundTracker,
    score: Score,
}

impl<S: Strategy> Driver<S> {
    /// `budget` is the game's guess budget; `debug` echoes the game transcript
    /// and per-round tallies to the console
    pub const fn new(strategy: S, budget: u32, debug: bool) -> Self {
        Self {
            strategy,
            debug,
            tracker: RoundTracker::new(budget),
            score: Score {
                wins: 0,
                losses: 0,
                rounds: Vec::new(),
                complete: false,
            },
        }
    }

    /// Play until the game's output ends
    ///
    /// # Errors
    /// Returns [`SolverError::Io`] if the game's pipes fail and
    /// [`SolverError::OutOfLetters`] if the strategy has nothing left to guess.
    pub fn run<R, W, C>(
        mut self,
        game_out: R,
        mut game_in: W,
        console: &mut C,
    ) -> Result<Score, SolverError>
    where
        R: BufRead,
        W: Write,
        C: Write,
    {
        if self.debug {
            writeln!(console, "< DEBUG MODE ACTIVATED >")?;
        }
        writeln!(console, "< Starting Hangman solver... >")?;

        for line in game_out.lines() {
            let line = line?;
            let event = GameEvent::parse(&line);

            match &event {
                GameEvent::Miss => self.tracker.on_miss(),
                GameEvent::Board(board) => self.tracker.on_board(board.clone()),
                GameEvent::Solved(word) | GameEvent::Revealed(word) => {
                    self.tracker.on_answer(word.clone());
                }
                GameEvent::DebugAnswer { index, word } => {
                    debug!("game dealt lexicon[{index}] = {word}");
                }
                _ => {}
            }

            if self.debug {
                writeln!(console, "{line}")?;
            }

            match event {
                GameEvent::Win => self.end_round(true, console)?,
                GameEvent::Loss => self.end_round(false, console)?,
                GameEvent::Prompt(remaining) => {
                    self.tracker.on_prompt(remaining);
                    self.print_tally(console)?;

                    let letter = self
                        .strategy
                        .next_letter(&self.tracker.view())
                        .ok_or(SolverError::OutOfLetters)?;
                    self.tracker.record_guess(letter);

                    if self.debug {
                        writeln!(console, "< {} >", char::from(letter))?;
                    }
                    writeln!(game_in, "{}", char::from(letter))?;
                    game_in.flush()?;
                }
                GameEvent::Exhausted => {
                    self.score.complete = true;
                    writeln!(console, "\n< SCORE: {} >", self.score)?;
                }
                _ => {}
            }
        }

        if !self.score.complete {
            warn!(
                "game output ended before the lexicon was exhausted; partial score {}",
                self.score
            );
            writeln!(console, "\n< SCORE: {} >", self.score)?;
        }
        console.flush()?;

        Ok(self.score)
    }

    fn end_round<C: Write>(&mut self, won: bool, console: &mut C) -> Result<(), SolverError> {
        self.print_tally(console)?;
        if self.debug {
            writeln!(console)?;
        }

        let record = self.tracker.finish(won);
        info!(
            "round {}: {} {}",
            self.score.total() + 1,
            if won { "won" } else { "lost" },
            record.answer.as_deref().unwrap_or("?")
        );
        self.score.record(record);

        if self.debug {
            let encountered = if won { "Win" } else { "Loss" };
            writeln!(console, "< {encountered} Encountered >")?;
            writeln!(console, "< Total Wins: {} >", self.score.wins)?;
            writeln!(console, "< Total Losses: {} >", self.score.losses)?;
        }
        Ok(())
    }

    fn print_tally<C: Write>(&self, console: &mut C) -> Result<(), SolverError> {
        if self.debug {
            writeln!(
                console,
                "< Guesses remaining: {} >",
                self.tracker.remaining()
            )?;
            writeln!(console, "< Guesses correct: {} >", self.tracker.correct())?;
        }
        Ok(())
    }
}
