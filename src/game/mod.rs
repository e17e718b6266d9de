//! Game orchestration
//!
//! A session repeatedly picks a guess, scores it against the solution and
//! narrows the bank until it wins, runs out of guesses, or runs out of words.

mod renderer;
mod session;

pub use renderer::{Renderer, SilentRenderer};
pub use session::{DEFAULT_GUESS_LIMIT, GameSession, GameState, LossCause, SessionConfig};
