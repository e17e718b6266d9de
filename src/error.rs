//! Error types for the solver library

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// The errors the solver library can produce
#[derive(Debug, Error)]
pub enum WordleError {
    /// A guess and solution could not be compared letter-by-letter.
    #[error("cannot compare guess {guess:?} with solution {solution:?}: both must be exactly 5 letters")]
    InvalidInput { guess: String, solution: String },

    /// Selection was attempted on a bank with no candidates left.
    #[error("no candidates remain in the word bank")]
    EmptyBank,

    /// A string was rejected as a Wordle word.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: WordReason },

    /// A session needs room for at least one guess.
    #[error("guess limit must be at least 1, got {0}")]
    InvalidGuessLimit(usize),

    /// The dictionary file could not be opened or read.
    #[error("could not read dictionary {}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a string is not a valid word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordReason {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl std::fmt::Display for WordReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "word must be exactly 5 letters, got {len}"),
            Self::NonAscii => write!(f, "word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "word contains invalid characters"),
        }
    }
}
