//! Command implementations

pub mod bench;
pub mod play;
pub mod solve;

pub use bench::{BenchConfig, BenchResult, run_bench};
pub use play::{PlayConfig, run_play};
pub use solve::{SolveConfig, run_solve};
