//! Console text protocol between the game and its drivers
//!
//! The game speaks plain lines on stdout. [`Message`] renders them, and
//! [`GameEvent::parse`] classifies a single line back into what happened. Both
//! sides live here so the wording can never drift apart.

use crate::core::{Board, Word};
use std::fmt;

const RUSH_BANNER: &str = "[ RUSH MODE ACTIVATED ]";
const WELCOME: &str = "Welcome to Hangman!";
const DEBUG_PREFIX: &str = "[ DEBUG MODE - lexicon[";
const BOARD_PREFIX: &str = "The word now looks like this: ";
const PROMPT_PREFIX: &str = "You have ";
const EMPTY_INPUT: &str = "Please input the letter you would like to guess.";
const LONG_INPUT: &str = "Please input only one letter at a time.";
const ECHO_PREFIX: &str = "You guess: ";
const ALREADY_PREFIX: &str = "You already correctly guessed: ";
const MISS_PREFIX: &str = "There are no ";
const SOLVED_PREFIX: &str = "You guessed the word: ";
const WIN: &str = "You win.";
const HUNG: &str = "You're completely hung.";
const REVEAL_PREFIX: &str = "The word was: ";
const LOSS: &str = "You lose.";
const EXHAUSTED: &str = "Entire lexicon has been played.";

/// Everything the game prints
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    RushBanner,
    Welcome,
    DebugAnswer { index: usize, word: &'a Word },
    Board(&'a Board),
    Prompt(u32),
    EmptyInput,
    LongInput,
    Echo(char),
    AlreadyRevealed(char),
    Miss(char),
    Won(&'a Word),
    Lost(&'a Word),
    Exhausted,
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RushBanner => f.write_str(RUSH_BANNER),
            Self::Welcome => f.write_str(WELCOME),
            Self::DebugAnswer { index, word } => write!(f, "{DEBUG_PREFIX}{index}]: {word} ]"),
            Self::Board(board) => write!(f, "{BOARD_PREFIX}{board}"),
            Self::Prompt(n) => write!(
                f,
                "{PROMPT_PREFIX}{n} {} left.",
                if *n == 1 { "guess" } else { "guesses" }
            ),
            Self::EmptyInput => f.write_str(EMPTY_INPUT),
            Self::LongInput => f.write_str(LONG_INPUT),
            Self::Echo(c) => write!(f, "{ECHO_PREFIX}{c}"),
            Self::AlreadyRevealed(c) => write!(f, "{ALREADY_PREFIX}{c}"),
            Self::Miss(c) => write!(f, "{MISS_PREFIX}{c}'s in the word."),
            Self::Won(word) => write!(f, "{SOLVED_PREFIX}{word}\n{WIN}"),
            Self::Lost(word) => write!(f, "{HUNG}\n{REVEAL_PREFIX}{word}\n{LOSS}"),
            Self::Exhausted => f.write_str(EXHAUSTED),
        }
    }
}

/// A classified line of game output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A guess matched nothing
    Miss,
    /// The board as currently revealed
    Board(Board),
    /// The game is waiting for a guess with this many guesses left
    Prompt(u32),
    /// The completed word after a win
    Solved(String),
    Win,
    /// The answer disclosed after a loss
    Revealed(String),
    Loss,
    /// Rush mode has dealt every word
    Exhausted,
    DebugAnswer { index: usize, word: String },
    /// Anything else (banners, echoes, input complaints)
    Other(String),
}

impl GameEvent {
    /// Classify one line of game output
    ///
    /// # Examples
    /// ```
    /// use hangman::protocol::GameEvent;
    ///
    /// assert_eq!(GameEvent::parse("You have 1 guess left."), GameEvent::Prompt(1));
    /// assert_eq!(GameEvent::parse("You win."), GameEvent::Win);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if line.starts_with(MISS_PREFIX) {
            return Self::Miss;
        }
        if let Some(board) = line.strip_prefix(BOARD_PREFIX).and_then(Board::parse) {
            return Self::Board(board);
        }
        if let Some(count) = parse_prompt(line) {
            return Self::Prompt(count);
        }
        if let Some(word) = line.strip_prefix(SOLVED_PREFIX) {
            return Self::Solved(word.to_string());
        }
        if let Some(word) = line.strip_prefix(REVEAL_PREFIX) {
            return Self::Revealed(word.to_string());
        }
        if let Some((index, word)) = parse_debug_answer(line) {
            return Self::DebugAnswer { index, word };
        }

        match line {
            WIN => Self::Win,
            LOSS => Self::Loss,
            EXHAUSTED => Self::Exhausted,
            other => Self::Other(other.to_string()),
        }
    }
}

/// `You have <n> guesses left.` / `You have 1 guess left.`
fn parse_prompt(line: &str) -> Option<u32> {
    let rest = line.strip_prefix(PROMPT_PREFIX)?;
    let (count, tail) = rest.split_once(' ')?;
    if !matches!(tail, "guesses left." | "guess left.") {
        return None;
    }
    count.parse().ok()
}

/// `[ DEBUG MODE - lexicon[<i>]: <WORD> ]`
fn parse_debug_answer(line: &str) -> Option<(usize, String)> {
    let rest = line.strip_prefix(DEBUG_PREFIX)?.strip_suffix(" ]")?;
    let (index, word) = rest.split_once("]: ")?;
    Some((index.parse().ok()?, word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn prompt_pluralises() {
        assert_eq!(Message::Prompt(6).to_string(), "You have 6 guesses left.");
        assert_eq!(Message::Prompt(1).to_string(), "You have 1 guess left.");
    }

    #[test]
    fn end_of_game_messages_span_lines() {
        let answer = word("heron");
        assert_eq!(
            Message::Won(&answer).to_string(),
            "You guessed the word: HERON\nYou win."
        );
        assert_eq!(
            Message::Lost(&answer).to_string(),
            "You're completely hung.\nThe word was: HERON\nYou lose."
        );
    }

    #[test]
    fn miss_and_debug_wording() {
        let answer = word("stoat");
        assert_eq!(
            Message::Miss('Q').to_string(),
            "There are no Q's in the word."
        );
        assert_eq!(
            Message::DebugAnswer {
                index: 12,
                word: &answer
            }
            .to_string(),
            "[ DEBUG MODE - lexicon[12]: STOAT ]"
        );
    }

    #[test]
    fn parse_classifies_game_lines() {
        assert_eq!(
            GameEvent::parse("There are no Q's in the word."),
            GameEvent::Miss
        );
        assert_eq!(
            GameEvent::parse("The word now looks like this: -A--A-\n"),
            GameEvent::Board(Board::parse("-A--A-").unwrap())
        );
        assert_eq!(
            GameEvent::parse("You have 8 guesses left."),
            GameEvent::Prompt(8)
        );
        assert_eq!(
            GameEvent::parse("You guessed the word: OTTER"),
            GameEvent::Solved("OTTER".to_string())
        );
        assert_eq!(
            GameEvent::parse("The word was: OTTER"),
            GameEvent::Revealed("OTTER".to_string())
        );
        assert_eq!(GameEvent::parse("You lose.\r\n"), GameEvent::Loss);
        assert_eq!(
            GameEvent::parse("Entire lexicon has been played."),
            GameEvent::Exhausted
        );
        assert_eq!(
            GameEvent::parse("[ DEBUG MODE - lexicon[3]: OTTER ]"),
            GameEvent::DebugAnswer {
                index: 3,
                word: "OTTER".to_string()
            }
        );
    }

    #[test]
    fn parse_leaves_chatter_as_other() {
        for line in [
            "Welcome to Hangman!",
            "[ RUSH MODE ACTIVATED ]",
            "You guess: E",
            "You already correctly guessed: E",
            "You have many guesses left.",
        ] {
            assert_eq!(GameEvent::parse(line), GameEvent::Other(line.to_string()));
        }
    }

    #[test]
    fn rendered_messages_parse_back() {
        let answer = word("marten");
        let board = Board::hidden(&answer);

        assert_eq!(
            GameEvent::parse(&Message::Board(&board).to_string()),
            GameEvent::Board(board.clone())
        );
        assert_eq!(
            GameEvent::parse(&Message::Prompt(1).to_string()),
            GameEvent::Prompt(1)
        );
    }
}
