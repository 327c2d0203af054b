//! Benchmark command
//!
//! Plays every lexicon word in-process against the engine with one strategy
//! and collects win/loss statistics.

use crate::core::Word;
use crate::game::{Difficulty, Game, GameStatus, GuessOutcome};
use crate::solver::{RoundView, Strategy, StrategyKind};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchConfig {
    pub strategy: StrategyKind,
    pub difficulty: Difficulty,
    /// Only test the first N words
    pub limit: Option<usize>,
    /// Base seed; word `i` uses `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

/// Result from playing a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub won: bool,
    pub guesses: u32,
    pub misses: u32,
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchResult {
    pub strategy: StrategyKind,
    pub budget: u32,
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    /// Average wrong guesses over won games
    pub average_misses: f64,
    /// Wrong guesses per won game -> number of games
    pub miss_distribution: FxHashMap<u32, usize>,
    /// Words the strategy failed on
    pub lost_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play one word to completion with a strategy
pub fn play_word<S: Strategy>(answer: &Word, difficulty: Difficulty, strategy: &mut S) -> WordResult {
    let mut game = Game::new(answer.clone(), difficulty);
    let mut correct = 0;
    let mut guesses = 0;

    while game.status() == GameStatus::Playing {
        let view = RoundView {
            board: Some(game.board()),
            guessed: game.guessed(),
            correct,
            remaining: game.guesses_left(),
        };
        let Some(letter) = strategy.next_letter(&view) else {
            break;
        };
        let Ok(turn) = game.guess(char::from(letter)) else {
            break;
        };

        guesses += 1;
        if matches!(turn.outcome, GuessOutcome::Revealed(_)) && turn.status == GameStatus::Playing {
            correct += 1;
        }
    }

    WordResult {
        word: answer.text().to_string(),
        won: game.status() == GameStatus::Won,
        guesses,
        misses: game.misses(),
    }
}

/// Run the benchmark over `words`
///
/// Each word gets a fresh strategy seeded from its position, so results are
/// reproducible for a given seed regardless of thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_bench(words: &[Word], config: &BenchConfig) -> BenchResult {
    let test_words = &words[..config.limit.unwrap_or(words.len()).min(words.len())];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(test_words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results: Vec<WordResult> = test_words
        .par_iter()
        .enumerate()
        .map(|(i, answer)| {
            let mut strategy = config.strategy.build(words, config.seed.wrapping_add(i as u64));
            let result = play_word(answer, config.difficulty, &mut strategy);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(results, config, duration)
}

fn summarize(results: Vec<WordResult>, config: &BenchConfig, duration: Duration) -> BenchResult {
    let total_words = results.len();
    let mut miss_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut lost_words = Vec::new();
    let mut won_misses = 0;

    for result in results {
        if result.won {
            *miss_distribution.entry(result.misses).or_insert(0) += 1;
            won_misses += result.misses;
        } else {
            lost_words.push(result.word);
        }
    }

    let losses = lost_words.len();
    let wins = total_words - losses;

    BenchResult {
        strategy: config.strategy,
        budget: config.difficulty.budget(),
        total_words,
        wins,
        losses,
        win_rate: if total_words > 0 {
            wins as f64 / total_words as f64
        } else {
            0.0
        },
        average_misses: if wins > 0 {
            f64::from(won_misses) / wins as f64
        } else {
            0.0
        },
        miss_distribution,
        lost_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
