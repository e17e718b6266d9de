//! Word solving command
//!
//! Plays one session against a given target word and returns the path taken.

use crate::core::{HintSequence, Word, WordBank};
use crate::error::Result;
use crate::game::{DEFAULT_GUESS_LIMIT, GameSession, GameState, Renderer, SessionConfig};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub guess_limit: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            guess_limit: DEFAULT_GUESS_LIMIT,
        }
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: String,
    pub state: GameState,
    pub guesses: Vec<HintSequence>,
    pub guess_limit: usize,
    pub initial_candidates: usize,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.state, GameState::Won { .. })
    }
}

/// Solve a specific word starting from `words`, rendering each round
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 ASCII letters)
/// - The guess limit is zero
pub fn solve_word(
    config: SolveConfig,
    words: &[Word],
    renderer: &mut impl Renderer,
) -> Result<SolveResult> {
    let solution = Word::new(config.target)?;
    let bank: WordBank = words.iter().cloned().collect();
    let initial_candidates = bank.len();

    let mut session = GameSession::new(solution, bank, SessionConfig::new(config.guess_limit))?;
    let state = session.play(renderer)?;

    Ok(SolveResult {
        target: session.solution().text().to_string(),
        state,
        guesses: session.history().to_vec(),
        guess_limit: session.guess_limit(),
        initial_candidates,
    })
}
