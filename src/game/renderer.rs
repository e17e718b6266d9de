//! Rendering boundary for per-round feedback

use crate::core::HintSequence;

/// Receives each round's hints as the session plays
///
/// Implementations only observe; nothing flows back into the session.
pub trait Renderer {
    fn render(&mut self, hints: &HintSequence);
}

/// Discards every round
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn render(&mut self, _hints: &HintSequence) {}
}
