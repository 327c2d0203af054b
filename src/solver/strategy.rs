//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Board, LetterSet, VOWELS, Word};
use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// English letters from most to least frequent
pub const ENGLISH_FREQUENCY: &[u8; 26] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// What a strategy knows about the round in progress
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    /// Latest board, if one has been seen
    pub board: Option<&'a Board>,
    /// Every letter already guessed this round
    pub guessed: LetterSet,
    /// Guesses that revealed at least one letter
    pub correct: u32,
    /// Wrong guesses still allowed
    pub remaining: u32,
}

impl RoundView<'_> {
    /// Letters not yet guessed this round
    #[must_use]
    pub const fn unused(&self) -> LetterSet {
        LetterSet::ALL.difference(self.guessed)
    }
}

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick an unused letter
    ///
    /// Returns `None` only when every letter has already been guessed.
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8>;
}

/// Strategy names accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Random vowels until three hits, then random letters
    #[default]
    VowelsFirst,
    /// Most common English letter first
    Frequency,
    /// Uniformly random unused letter
    Random,
    /// Most common letter among lexicon words that fit the board
    Candidates,
}

impl StrategyKind {
    /// Instantiate the strategy
    ///
    /// `lexicon` is only consulted by [`StrategyKind::Candidates`]; `seed`
    /// drives the random strategies.
    #[must_use]
    pub fn build(self, lexicon: &[Word], seed: u64) -> StrategyType<'_> {
        let rng = StdRng::seed_from_u64(seed);
        match self {
            Self::VowelsFirst => StrategyType::VowelsFirst(VowelsFirstStrategy::new(rng)),
            Self::Frequency => StrategyType::Frequency(FrequencyStrategy),
            Self::Random => StrategyType::Random(RandomStrategy::new(rng)),
            Self::Candidates => StrategyType::Candidates(CandidateStrategy::new(lexicon)),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    VowelsFirst(VowelsFirstStrategy),
    Frequency(FrequencyStrategy),
    Random(RandomStrategy),
    Candidates(CandidateStrategy<'a>),
}

impl Strategy for StrategyType<'_> {
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8> {
        match self {
            Self::VowelsFirst(s) => s.next_letter(view),
            Self::Frequency(s) => s.next_letter(view),
            Self::Random(s) => s.next_letter(view),
            Self::Candidates(s) => s.next_letter(view),
        }
    }
}

fn choose(letters: LetterSet, rng: &mut StdRng) -> Option<u8> {
    let pool: Vec<u8> = letters.iter().collect();
    pool.choose(rng).copied()
}

/// Correct guesses after which vowels lose priority
const VOWEL_HITS: u32 = 3;

/// Vowels first
///
/// Guesses random unused vowels while fewer than `VOWEL_HITS` guesses have
/// landed this round, then random unused letters.
pub struct VowelsFirstStrategy {
    rng: StdRng,
}

impl VowelsFirstStrategy {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for VowelsFirstStrategy {
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8> {
        let vowels: LetterSet = VOWELS.iter().copied().collect();
        let unused_vowels = vowels.difference(view.guessed);

        if view.correct < VOWEL_HITS && !unused_vowels.is_empty() {
            return choose(unused_vowels, &mut self.rng);
        }
        choose(view.unused(), &mut self.rng)
    }
}

/// Most frequent English letter not yet guessed
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8> {
        ENGLISH_FREQUENCY
            .iter()
            .copied()
            .find(|&letter| !view.guessed.contains(letter))
    }
}

/// Uniformly random unused letter
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub const fn new(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8> {
        choose(view.unused(), &mut self.rng)
    }
}

/// Candidate filtering
///
/// Narrows the lexicon to words consistent with the board and the letters
/// already guessed, then picks the unused letter that appears in the most
/// candidates. Ties go to the more frequent English letter. Falls back to
/// [`FrequencyStrategy`] when nothing in the lexicon fits.
pub struct CandidateStrategy<'a> {
    words: &'a [Word],
}

impl<'a> CandidateStrategy<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Lexicon words that could still be the answer
    pub fn candidates(&self, view: &RoundView<'_>) -> impl Iterator<Item = &'a Word> {
        let board = view.board;
        let guessed = view.guessed;
        self.words
            .iter()
            .filter(move |word| board.is_some_and(|b| b.admits(word, guessed)))
    }
}

impl Strategy for CandidateStrategy<'_> {
    fn next_letter(&mut self, view: &RoundView<'_>) -> Option<u8> {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in self.candidates(view) {
            for letter in word.letters().difference(view.guessed).iter() {
                *counts.entry(letter).or_default() += 1;
            }
        }

        let best = ENGLISH_FREQUENCY
            .iter()
            .copied()
            .filter_map(|letter| counts.get(&letter).map(|&n| (letter, n)))
            .fold(None, |best: Option<(u8, usize)>, (letter, n)| match best {
                Some((_, top)) if top >= n => best,
                _ => Some((letter, n)),
            });

        best.map(|(letter, _)| letter)
            .or_else(|| FrequencyStrategy.next_letter(view))
    }
}
