//! Formatting utilities for terminal output

use crate::core::{Hint, HintSequence};
use colored::{ColoredString, Colorize};

/// Format hints as an emoji string
#[must_use]
pub fn hints_to_emoji(hints: &HintSequence) -> String {
    hints
        .iter()
        .map(|(hint, _)| match hint {
            Hint::Exact => '🟩',
            Hint::Present => '🟨',
            Hint::Absent => '⬜',
        })
        .collect()
}

/// Color one guessed letter: green in place, yellow elsewhere, plain if absent
#[must_use]
pub fn colored_letter(hint: Hint, letter: u8) -> ColoredString {
    let letter = char::from(letter.to_ascii_uppercase()).to_string();
    match hint {
        Hint::Exact => letter.green(),
        Hint::Present => letter.yellow(),
        Hint::Absent => letter.normal(),
    }
}

/// The guessed word, uppercased and colored letter by letter
#[must_use]
pub fn colored_guess(hints: &HintSequence) -> String {
    hints
        .iter()
        .map(|(hint, letter)| colored_letter(hint, letter).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // clamped to [0, width] below
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
