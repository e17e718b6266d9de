//! A single Wordle session
//!
//! Each round: pick the best-scoring guess from the bank, evaluate it against
//! the solution, record the hints, then either stop or pare the bank.

use super::Renderer;
use crate::core::{HintSequence, Word, WordBank, evaluate};
use crate::error::{Result, WordleError};
use crate::solver::{best_with_score, letter_frequencies, pare};
use log::{debug, info, warn};
use std::fmt;

/// Guesses allowed by a standard game
pub const DEFAULT_GUESS_LIMIT: usize = 6;

/// Configuration for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub guess_limit: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(guess_limit: usize) -> Self {
        Self { guess_limit }
    }

    /// # Errors
    /// Returns `WordleError::InvalidGuessLimit` if the limit is zero.
    pub fn validate(&self) -> Result<()> {
        if self.guess_limit == 0 {
            return Err(WordleError::InvalidGuessLimit(self.guess_limit));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GUESS_LIMIT)
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    /// Solved on round `rounds`
    Won { rounds: usize },
    Lost(LossCause),
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Every allowed guess was used without finding the solution
    OutOfGuesses,
    /// Filtering left no candidate to guess
    EmptyBank,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfGuesses => write!(f, "out of guesses"),
            Self::EmptyBank => write!(f, "no candidates remain"),
        }
    }
}

/// A session playing toward one fixed solution
#[derive(Debug, Clone)]
pub struct GameSession {
    solution: Word,
    bank: WordBank,
    history: Vec<HintSequence>,
    guess_limit: usize,
    state: GameState,
}

impl GameSession {
    /// Start a session over an explicit bank
    ///
    /// The solution does not have to be in the bank; if it is not, the
    /// session may end in `Lost(LossCause::EmptyBank)`.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidGuessLimit` if the configured limit is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Word, WordBank};
    /// use wordle_greedy::game::{GameSession, GameState, SessionConfig, SilentRenderer};
    ///
    /// let bank: WordBank = ["abbey", "table", "chair", "amber", "belay"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let solution = Word::new("abbey").unwrap();
    ///
    /// let mut session = GameSession::new(solution, bank, SessionConfig::default()).unwrap();
    /// let state = session.play(&mut SilentRenderer).unwrap();
    /// assert_eq!(state, GameState::Won { rounds: 2 });
    /// ```
    pub fn new(solution: Word, bank: WordBank, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            solution,
            bank,
            history: Vec::with_capacity(config.guess_limit),
            guess_limit: config.guess_limit,
            state: GameState::InProgress,
        })
    }

    /// Play one round
    ///
    /// Returns the hints earned this round, or `None` if no guess was made
    /// because the session was already over or the bank ran dry.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidInput` if the guess cannot be compared with
    /// the solution. Banks built from [`Word`]s never trigger this.
    pub fn step(&mut self) -> Result<Option<&HintSequence>> {
        if self.state.is_terminal() {
            return Ok(None);
        }

        let freqs = letter_frequencies(self.bank.words());
        let (guess, score) = match best_with_score(&self.bank, &freqs) {
            Ok(best) => best,
            Err(WordleError::EmptyBank) => {
                warn!(
                    "no candidates remain for {} after {} rounds",
                    self.solution,
                    self.history.len()
                );
                self.state = GameState::Lost(LossCause::EmptyBank);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let hints = evaluate(guess.chars(), self.solution.chars())?;
        let round = self.history.len() + 1;
        debug!(
            "round {round}: guessed {guess} (score {score}, {} candidates) -> {hints}",
            self.bank.len()
        );

        let solved = hints.is_solved();
        self.history.push(hints);

        if solved {
            self.state = GameState::Won { rounds: round };
            info!("solved {} in {round}/{}", self.solution, self.guess_limit);
        } else if round == self.guess_limit {
            self.state = GameState::Lost(LossCause::OutOfGuesses);
            info!("failed to solve {} in {round} guesses", self.solution);
        } else {
            let before = self.bank.len();
            self.bank = pare(&self.bank, &self.history[round - 1]);
            debug!("pared bank {before} -> {}", self.bank.len());
        }

        Ok(self.history.last())
    }

    /// Play rounds until the session ends, rendering each one
    ///
    /// # Errors
    /// Propagates errors from [`step`](Self::step).
    pub fn play(&mut self, renderer: &mut impl Renderer) -> Result<GameState> {
        while !self.state.is_terminal() {
            if let Some(hints) = self.step()? {
                renderer.render(hints);
            }
        }
        Ok(self.state)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.state, GameState::Won { .. })
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// Candidates still in play
    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Hints from every round so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[HintSequence] {
        &self.history
    }

    #[must_use]
    pub const fn guess_limit(&self) -> usize {
        self.guess_limit
    }

    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }
}
