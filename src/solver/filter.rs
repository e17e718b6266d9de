//! Candidate elimination
//!
//! Narrows a word bank to the words consistent with one round of hints.

use crate::core::{Hint, HintSequence, Word, WordBank};

/// Check whether a word satisfies every per-position constraint of `hints`
///
/// - `Exact` requires the same letter at that position.
/// - `Present` requires the letter somewhere in the word, including at that
///   same position.
/// - `Absent` requires the letter nowhere in the word.
#[must_use]
pub fn is_consistent(word: &Word, hints: &HintSequence) -> bool {
    hints
        .iter()
        .enumerate()
        .all(|(position, (hint, letter))| match hint {
            Hint::Exact => word.char_at(position) == letter,
            Hint::Present => word.has_letter(letter),
            Hint::Absent => !word.has_letter(letter),
        })
}

/// Remove every candidate inconsistent with `hints`
///
/// The constraints are a conjunction, so the result does not depend on the
/// order they are checked in. An empty result is legal.
///
/// # Examples
/// ```
/// use wordle_greedy::core::{evaluate, Word, WordBank};
/// use wordle_greedy::solver::pare;
///
/// let bank: WordBank = ["abbey", "table", "chair", "amber", "belay"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let hints = evaluate(b"belay", b"abbey").unwrap();
///
/// let narrowed = pare(&bank, &hints);
/// assert_eq!(narrowed.len(), 1);
/// assert_eq!(narrowed.words()[0].text(), "abbey");
/// ```
#[must_use]
pub fn pare(bank: &WordBank, hints: &HintSequence) -> WordBank {
    bank.retain_matching(|word| is_consistent(word, hints))
}
