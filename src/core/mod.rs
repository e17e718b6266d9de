//! Core domain types for Wordle
//!
//! Words, per-letter hints and the candidate bank. Everything here is pure
//! data plus the hint evaluation rule; no I/O.

mod bank;
mod hint;
mod word;

pub use bank::WordBank;
pub use hint::{Hint, HintSequence, evaluate};
pub use word::{WORD_LENGTH, Word};
