//! Wordle Greedy
//!
//! Plays Wordle automatically: guess the word whose letters are most common
//! across the remaining candidates, read the hints, drop every inconsistent
//! candidate, repeat.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_greedy::core::{Word, WordBank};
//! use wordle_greedy::game::{GameSession, GameState, SessionConfig, SilentRenderer};
//!
//! let bank: WordBank = ["abbey", "table", "chair"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let solution = Word::new("chair").unwrap();
//!
//! let mut session = GameSession::new(solution, bank, SessionConfig::default()).unwrap();
//! assert!(matches!(session.play(&mut SilentRenderer).unwrap(), GameState::Won { .. }));
//! ```

// Core domain types
pub mod core;

// Library error type
pub mod error;

// Guess selection and filtering
pub mod solver;

// Session orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, WordleError};
