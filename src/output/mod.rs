//! Terminal output formatting
//!
//! Color rendering of rounds and pretty-printing of results.

pub mod display;
pub mod formatters;

pub use display::{ColorRenderer, outcome_message, print_solve_result};
