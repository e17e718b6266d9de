//! Guess selection and candidate elimination
//!
//! The greedy letter-frequency heuristic: count letter frequencies over the
//! bank, guess the word covering the most common letters, then pare the bank
//! with the hints that guess earned.

mod filter;
mod frequency;
mod scorer;

pub use filter::{is_consistent, pare};
pub use frequency::{FrequencyMap, letter_frequencies};
pub use scorer::{best_with_score, score, select_best};
