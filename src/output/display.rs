//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::BenchResult;
use crate::solver::Score;
use colored::Colorize;

/// Print a summary of a solver run after the game has finished
pub fn print_solve_summary(score: &Score) {
    let total = score.total() as usize;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solver won {} of {} rounds {}",
        score.wins.to_string().green().bold(),
        total,
        format!("({})", percentage(score.wins as usize, total)).bright_yellow()
    );

    let lost: Vec<&str> = score
        .rounds
        .iter()
        .filter(|r| !r.won)
        .filter_map(|r| r.answer.as_deref())
        .collect();
    if !lost.is_empty() {
        println!("Hung on: {}", lost.join(", ").red());
    }

    if !score.complete {
        println!(
            "{}",
            "⚠ The game stopped before the whole lexicon was played".yellow()
        );
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {:?} ",
        "BENCHMARK RESULTS:".bright_cyan().bold(),
        result.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Guess budget:     {}", result.budget);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({})", percentage(result.wins, result.total_words)).green()
    );
    if result.losses > 0 {
        println!(
            "   Lost:             {} {}",
            result.losses,
            format!("({})", percentage(result.losses, result.total_words)).red()
        );
    }
    println!(
        "   Average misses:   {}",
        format!("{:.2}", result.average_misses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.wins > 0 {
        println!("\n📈 {}", "Misses per won game:".bright_cyan().bold());
        for misses in 0..result.budget {
            let count = result.miss_distribution.get(&misses).copied().unwrap_or(0);
            let bar = create_progress_bar(count as f64, result.wins as f64, 40);
            println!(
                "   {misses}: {} {count:4} ({:>6})",
                bar.green(),
                percentage(count, result.wins)
            );
        }
    }

    if !result.lost_words.is_empty() {
        println!("\n😰 {}", "Hung on:".yellow().bold());
        for word in result.lost_words.iter().take(10) {
            println!("   {}", word.yellow());
        }
        if result.lost_words.len() > 10 {
            println!("   … and {} more", result.lost_words.len() - 10);
        }
    }
}
