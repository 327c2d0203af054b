//! Console game session
//!
//! Runs games back to back over a line-oriented reader/writer pair: prints the
//! board and prompt, reads one guess per line, reports the outcome. In rush mode
//! a new game starts as soon as the previous one ends, until the lexicon runs dry.

use super::engine::{EngineError, Game, GameStatus, GuessOutcome};
use crate::lexicon::Lexicon;
use crate::options::GameOptions;
use crate::protocol::Message;
use log::{debug, info};
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Tally of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won => self.wins += 1,
            GameStatus::Lost => self.losses += 1,
            GameStatus::Playing => {}
        }
    }
}

/// A game session bound to an input and an output stream
pub struct Session<'a, R, W> {
    lexicon: &'a mut Lexicon,
    options: GameOptions,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(lexicon: &'a mut Lexicon, options: GameOptions, input: R, output: W) -> Self {
        Self {
            lexicon,
            options,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Play until the session ends
    ///
    /// A session ends after one game in normal mode, when the lexicon is
    /// exhausted in rush mode, or when the input stream closes.
    ///
    /// # Errors
    /// Returns [`SessionError::Io`] if reading input or writing output fails.
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        if self.options.rush {
            self.say(Message::RushBanner)?;
        }
        self.say(Message::Welcome)?;

        loop {
            let Some(mut game) = self.start_game()? else {
                self.say(Message::Exhausted)?;
                break;
            };

            match self.play(&mut game)? {
                Some(status) => {
                    self.summary.record(status);
                    info!(
                        "game {} over: {status:?} ({})",
                        self.summary.games,
                        game.answer()
                    );
                    if !self.options.rush {
                        break;
                    }
                }
                None => {
                    info!("input closed mid-game; ending session");
                    break;
                }
            }
        }

        self.output.flush()?;
        info!(
            "session finished: {} games, {} won, {} lost",
            self.summary.games, self.summary.wins, self.summary.losses
        );
        Ok(self.summary)
    }

    /// Draw an answer and show its hidden board; `None` once rush mode is exhausted
    fn start_game(&mut self) -> Result<Option<Game>, SessionError> {
        let Some((index, answer)) = self
            .lexicon
            .next_answer()
            .map(|drawn| (drawn.index, drawn.word.clone()))
        else {
            return Ok(None);
        };

        if self.options.debug {
            self.say(Message::DebugAnswer {
                index,
                word: &answer,
            })?;
        }

        let game = Game::new(answer, self.options.difficulty());
        self.say(Message::Board(game.board()))?;
        Ok(Some(game))
    }

    /// Run turns until the game ends; `None` if input closes first
    fn play(&mut self, game: &mut Game) -> Result<Option<GameStatus>, SessionError> {
        let mut line = String::new();

        loop {
            self.say(Message::Prompt(game.guesses_left()))?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let input = line.trim_end_matches(['\r', '\n']);

            let mut chars = input.chars();
            let guess = match (chars.next(), chars.next()) {
                (None, _) => {
                    self.say(Message::EmptyInput)?;
                    continue;
                }
                (Some(c), None) => c,
                (Some(_), Some(_)) => {
                    self.say(Message::LongInput)?;
                    continue;
                }
            };

            let letter = guess.to_ascii_uppercase();
            self.say(Message::Echo(letter))?;

            let turn = game.guess(guess)?;
            debug!(
                "guess {letter}: {:?}, {} left",
                turn.outcome,
                game.guesses_left()
            );

            match turn.outcome {
                GuessOutcome::AlreadyRevealed => self.say(Message::AlreadyRevealed(letter))?,
                GuessOutcome::Revealed(_) if turn.status == GameStatus::Won => {
                    self.say(Message::Won(game.answer()))?;
                    return Ok(Some(GameStatus::Won));
                }
                GuessOutcome::Revealed(_) => self.say(Message::Board(game.board()))?,
                GuessOutcome::Miss => self.say(Message::Miss(letter))?,
            }

            if turn.status == GameStatus::Lost {
                self.say(Message::Lost(game.answer()))?;
                return Ok(Some(GameStatus::Lost));
            }
        }
    }

    fn say(&mut self, message: Message<'_>) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::DrawOrder;
    use crate::lexicon::loader::words_from_slice;
    use std::io::Cursor;

    fn run(words: &[&str], options: GameOptions, input: &str) -> (SessionSummary, String) {
        let order = options.draw_order();
        let mut lexicon = Lexicon::seeded(words_from_slice(words), order, 11).unwrap();
        let mut output = Vec::new();

        let summary = Session::new(&mut lexicon, options, Cursor::new(input), &mut output)
            .run()
            .unwrap();

        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn winning_game_transcript() {
        let (summary, out) = run(&["abba"], GameOptions::default(), "a\nb\n");

        assert_eq!(
            summary,
            SessionSummary {
                games: 1,
                wins: 1,
                losses: 0
            }
        );
        assert_eq!(
            out,
            "Welcome to Hangman!\n\
             The word now looks like this: ----\n\
             You have 8 guesses left.\n\
             You guess: A\n\
             The word now looks like this: A--A\n\
             You have 8 guesses left.\n\
             You guess: B\n\
             You guessed the word: ABBA\n\
             You win.\n"
        );
    }

    #[test]
    fn input_complaints_reprompt_without_cost() {
        let (_, out) = run(&["abba"], GameOptions::default(), "\nab\nz\n");

        assert!(out.contains("Please input the letter you would like to guess.\n"));
        assert!(out.contains("Please input only one letter at a time.\n"));
        assert!(out.contains("There are no Z's in the word.\nYou have 7 guesses left.\n"));
        // Three prompts at 8, then one at 7 before input ran out
        assert_eq!(out.matches("You have 8 guesses left.").count(), 3);
    }

    #[test]
    fn already_revealed_letter_is_reported() {
        let (_, out) = run(&["abba"], GameOptions::default(), "a\na\n");
        assert!(out.contains("You already correctly guessed: A\n"));
        assert!(!out.contains("There are no A's"));
    }

    #[test]
    fn hard_mode_loss_transcript_ends_with_reveal() {
        let options = GameOptions {
            hard: true,
            ..GameOptions::default()
        };
        let (summary, out) = run(&["abba"], options, "c\nd\ne\nf\ng\nh\n");

        assert_eq!(summary.losses, 1);
        assert!(out.contains("You have 6 guesses left.\n"));
        assert!(out.contains("You have 1 guess left.\n"));
        assert!(out.ends_with(
            "There are no H's in the word.\n\
             You're completely hung.\n\
             The word was: ABBA\n\
             You lose.\n"
        ));
    }

    #[test]
    fn debug_mode_prints_answer() {
        let options = GameOptions {
            debug: true,
            ..GameOptions::default()
        };
        let (_, out) = run(&["abba"], options, "");
        assert!(out.contains("[ DEBUG MODE - lexicon[0]: ABBA ]\n"));
    }

    #[test]
    fn rush_mode_plays_every_word_then_stops() {
        let options = GameOptions {
            rush: true,
            ..GameOptions::default()
        };
        // Guessing A then B solves both words whichever order they are dealt in
        let (summary, out) = run(&["ab", "ba"], options, "a\nb\na\nb\n");

        assert!(out.starts_with("[ RUSH MODE ACTIVATED ]\nWelcome to Hangman!\n"));
        assert_eq!(summary.games, 2);
        assert_eq!(summary.wins, 2);
        assert!(out.ends_with("You win.\nEntire lexicon has been played.\n"));
    }

    #[test]
    fn closed_input_ends_session_quietly() {
        let (summary, out) = run(&["abba"], GameOptions::default(), "a\n");
        assert_eq!(summary, SessionSummary::default());
        assert!(out.ends_with("You have 8 guesses left.\n"));
    }
}
