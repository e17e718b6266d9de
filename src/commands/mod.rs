//! Command implementations

pub mod solve;
pub mod test_all;

pub use solve::{SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all, select_targets};
