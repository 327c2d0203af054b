//! Terminal output formatting
//!
//! Display utilities for solver and benchmark summaries. Game protocol lines
//! are plain text and live in [`crate::protocol`].

pub mod display;
pub mod formatters;

pub use display::{print_bench_result, print_solve_summary};
