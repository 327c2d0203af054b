//! Compact command-line flags
//!
//! Both programs take `[FLAGS] LEXICON`, where FLAGS is a single token such as
//! `-dhr` whose characters each switch one feature on.

use crate::game::Difficulty;
use crate::lexicon::DrawOrder;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("no option flags given")]
    Empty,
    #[error("improper option format {0:?}: flags must start with '-'")]
    MissingDash(String),
    #[error("please specify lexicon to read from")]
    MissingLexicon,
    #[error("too many command line arguments ({0}); expected [FLAGS] LEXICON")]
    TooManyArguments(usize),
}

/// A set of single-character flags parsed from a `-xyz` token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: BTreeSet<char>,
}

impl FlagSet {
    /// Parse a token such as `-dhr`
    ///
    /// # Errors
    /// Returns [`OptionsError::Empty`] for an empty token and
    /// [`OptionsError::MissingDash`] if the token does not start with `-`.
    ///
    /// # Examples
    /// ```
    /// use hangman::options::FlagSet;
    ///
    /// let flags = FlagSet::parse("-dr").unwrap();
    /// assert!(flags.has('d'));
    /// assert!(!flags.has('h'));
    /// ```
    pub fn parse(token: &str) -> Result<Self, OptionsError> {
        let rest = match token.strip_prefix('-') {
            Some(rest) => rest,
            None if token.is_empty() => return Err(OptionsError::Empty),
            None => return Err(OptionsError::MissingDash(token.to_string())),
        };

        Ok(Self {
            flags: rest.chars().collect(),
        })
    }

    #[must_use]
    pub fn has(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl FromStr for FlagSet {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<char> for FlagSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-")?;
        for flag in &self.flags {
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

/// Split `[FLAGS] LEXICON` positional arguments
///
/// # Errors
/// Returns [`OptionsError::MissingLexicon`] with no arguments,
/// [`OptionsError::TooManyArguments`] with more than two, or a flag parse
/// error for a malformed FLAGS token.
pub fn split_positionals(args: &[String]) -> Result<(FlagSet, &str), OptionsError> {
    match args {
        [] => Err(OptionsError::MissingLexicon),
        [lexicon] => Ok((FlagSet::default(), lexicon.as_str())),
        [flags, lexicon] => Ok((FlagSet::parse(flags)?, lexicon.as_str())),
        _ => Err(OptionsError::TooManyArguments(args.len())),
    }
}

/// Game flag: show the answer when each game starts
pub const DEBUG: char = 'd';
/// Game flag: six guesses instead of eight
pub const HARD: char = 'h';
/// Game flag: play every word once in random order
pub const RUSH: char = 'r';

/// Features selected for a game session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub debug: bool,
    pub hard: bool,
    pub rush: bool,
}

impl GameOptions {
    #[must_use]
    pub fn from_flags(flags: &FlagSet) -> Self {
        Self {
            debug: flags.has(DEBUG),
            hard: flags.has(HARD),
            rush: flags.has(RUSH),
        }
    }

    /// The flag token that selects these options
    #[must_use]
    pub fn to_flags(self) -> FlagSet {
        [(self.debug, DEBUG), (self.hard, HARD), (self.rush, RUSH)]
            .into_iter()
            .filter_map(|(on, flag)| on.then_some(flag))
            .collect()
    }

    #[must_use]
    pub const fn difficulty(self) -> Difficulty {
        if self.hard {
            Difficulty::Hard
        } else {
            Difficulty::Normal
        }
    }

    #[must_use]
    pub const fn draw_order(self) -> DrawOrder {
        if self.rush {
            DrawOrder::Rush
        } else {
            DrawOrder::Random
        }
    }
}
