//! Hangman - CLI
//!
//! Line-oriented hangman game, an automated solver that drives the game as a
//! child process, and an in-process strategy benchmark.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use hangman::{
    commands::{BenchConfig, PlayConfig, SolveConfig, run_bench, run_play, run_solve},
    game::Difficulty,
    lexicon::{BUILTIN_NAME, Lexicon},
    options::{self, GameOptions},
    output::{print_bench_result, print_solve_summary},
    solver::StrategyKind,
};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman game over stdin/stdout, with an automated solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raise log verbosity (repeatable); RUST_LOG overrides
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play hangman on the console
    ///
    /// FLAGS is a single token: d = debug (show answer), h = hard (6 guesses),
    /// r = rush (every word once). LEXICON is a file path or 'builtin'.
    #[command(disable_help_flag = true)]
    Play {
        /// Print help (`-h` selects hard mode)
        #[arg(long, action = ArgAction::Help)]
        help: Option<bool>,

        /// Fixed seed for a reproducible answer order
        #[arg(long)]
        seed: Option<u64>,

        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_names = ["FLAGS", "LEXICON"]
        )]
        args: Vec<String>,
    },

    /// Solve every word of a lexicon by driving the game as a child process
    ///
    /// FLAGS is a single token: d = debug (echo the game transcript).
    #[command(disable_help_flag = true)]
    Solve {
        /// Print help
        #[arg(long, action = ArgAction::Help)]
        help: Option<bool>,

        /// Letter-picking strategy
        #[arg(short, long, value_enum, default_value_t = StrategyKind::VowelsFirst)]
        strategy: StrategyKind,

        /// Seed for the game's answer order and the strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Game executable to drive (defaults to this program)
        #[arg(long)]
        game: Option<PathBuf>,

        #[arg(
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_names = ["FLAGS", "LEXICON"]
        )]
        args: Vec<String>,
    },

    /// Benchmark a strategy against every lexicon word in-process
    Bench {
        /// Letter-picking strategy
        #[arg(short, long, value_enum, default_value_t = StrategyKind::VowelsFirst)]
        strategy: StrategyKind,

        /// Six guesses instead of eight
        #[arg(long)]
        hard: bool,

        /// Only test the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Base seed for the per-word strategies
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Lexicon file path, or 'builtin'
        #[arg(default_value = BUILTIN_NAME)]
        lexicon: String,
    },
}

/// Initialise `env_logger` from the `--verbose` count, letting `RUST_LOG` win
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play { seed, args, .. } => run_play_command(&args, seed),
        Commands::Solve {
            strategy,
            seed,
            game,
            args,
            ..
        } => run_solve_command(&args, strategy, seed, game),
        Commands::Bench {
            strategy,
            hard,
            limit,
            seed,
            lexicon,
        } => run_bench_command(&lexicon, strategy, hard, limit, seed),
    }
}

fn run_play_command(args: &[String], seed: Option<u64>) -> Result<()> {
    let (flags, lexicon) = options::split_positionals(args)?;

    let config = PlayConfig {
        lexicon: lexicon.to_string(),
        options: GameOptions::from_flags(&flags),
        seed,
    };
    run_play(&config)?;
    Ok(())
}

fn run_solve_command(
    args: &[String],
    strategy: StrategyKind,
    seed: Option<u64>,
    game: Option<PathBuf>,
) -> Result<()> {
    let (flags, lexicon) = options::split_positionals(args)?;

    let config = SolveConfig {
        lexicon: lexicon.to_string(),
        debug: flags.has(options::DEBUG),
        strategy,
        seed,
        game,
    };
    let score = run_solve(&config)?;

    print_solve_summary(&score);
    Ok(())
}

fn run_bench_command(
    lexicon: &str,
    strategy: StrategyKind,
    hard: bool,
    limit: Option<usize>,
    seed: u64,
) -> Result<()> {
    let words = Lexicon::load_words(lexicon)
        .with_context(|| format!("cannot benchmark with lexicon {lexicon:?}"))?;

    let difficulty = if hard {
        Difficulty::Hard
    } else {
        Difficulty::Normal
    };

    println!(
        "Benchmarking {strategy:?} on {} words...",
        limit.unwrap_or(words.len()).min(words.len())
    );

    let config = BenchConfig {
        strategy,
        difficulty,
        limit,
        seed,
        show_progress: true,
    };
    let result = run_bench(&words, &config);
    print_bench_result(&result);
    Ok(())
}
