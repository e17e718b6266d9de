//! Word lists for Wordle solving
//!
//! The starting bank comes from a plain-text dictionary, one word per line.

pub mod loader;

pub use loader::{
    DEFAULT_DICTIONARY, is_dictionary_word, load_from_file, load_from_reader, words_from_slice,
};
