//! Per-letter feedback for a guess
//!
//! Feedback is purely positional against the full solution: a letter that
//! occurs anywhere in the solution is marked `Present` no matter how many
//! times it appears in the guess. Repeated guess letters are therefore never
//! capped at the solution's letter count.

use super::word::WORD_LENGTH;
use crate::error::{Result, WordleError};
use std::fmt;

/// Verdict for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Right letter, right position
    Exact,
    /// Letter occurs somewhere else in the solution
    Present,
    /// Letter does not occur in the solution
    Absent,
}

/// Ordered `(hint, letter)` pairs, one per position of a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintSequence([(Hint, u8); WORD_LENGTH]);

impl HintSequence {
    /// Build a sequence from explicit pairs
    ///
    /// Mostly useful for replaying feedback observed elsewhere.
    #[must_use]
    pub const fn from_pairs(pairs: [(Hint, u8); WORD_LENGTH]) -> Self {
        Self(pairs)
    }

    /// True when every position is `Exact`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&(hint, _)| hint == Hint::Exact)
    }

    /// Iterate over `(hint, letter)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (Hint, u8)> + '_ {
        self.0.iter().copied()
    }

    /// Just the hints, in position order
    #[must_use]
    pub fn hints(&self) -> [Hint; WORD_LENGTH] {
        self.0.map(|(hint, _)| hint)
    }

    /// The guessed word this feedback belongs to
    #[must_use]
    pub fn guess(&self) -> String {
        self.0.iter().map(|&(_, letter)| char::from(letter)).collect()
    }
}

impl<'a> IntoIterator for &'a HintSequence {
    type Item = (Hint, u8);
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, (Hint, u8)>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl fmt::Display for HintSequence {
    /// Compact text form: uppercase for `Exact`, lowercase for `Present`,
    /// `.` for `Absent`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &(hint, letter) in &self.0 {
            let ch = match hint {
                Hint::Exact => char::from(letter.to_ascii_uppercase()),
                Hint::Present => char::from(letter),
                Hint::Absent => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Compare a guess against the solution, position by position
///
/// # Errors
/// Returns `WordleError::InvalidInput` if either side is not exactly 5 bytes
/// long. Words drawn from a [`WordBank`](super::WordBank) always satisfy this.
///
/// # Examples
/// ```
/// use wordle_greedy::core::{evaluate, Hint};
///
/// let hints = evaluate(b"table", b"abbey").unwrap();
/// assert_eq!(
///     hints.hints(),
///     [Hint::Absent, Hint::Present, Hint::Exact, Hint::Absent, Hint::Present]
/// );
/// ```
pub fn evaluate(guess: &[u8], solution: &[u8]) -> Result<HintSequence> {
    let (Ok(guess), Ok(solution)) = (
        <&[u8; WORD_LENGTH]>::try_from(guess),
        <&[u8; WORD_LENGTH]>::try_from(solution),
    ) else {
        return Err(WordleError::InvalidInput {
            guess: String::from_utf8_lossy(guess).into_owned(),
            solution: String::from_utf8_lossy(solution).into_owned(),
        });
    };

    Ok(HintSequence(std::array::from_fn(|i| {
        let letter = guess[i];
        let hint = if letter == solution[i] {
            Hint::Exact
        } else if solution.contains(&letter) {
            Hint::Present
        } else {
            Hint::Absent
        };
        (hint, letter)
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Hint::{Absent, Exact, Present};

    #[test]
    fn table_against_abbey() {
        let hints = evaluate(b"table", b"abbey").unwrap();

        // t absent, a elsewhere, b in place, l absent, e elsewhere
        assert_eq!(hints.hints(), [Absent, Present, Exact, Absent, Present]);
        assert_eq!(hints.guess(), "table");
        assert!(!hints.is_solved());
    }

    #[test]
    fn all_exact_when_guess_matches() {
        for word in [b"abbey", b"chair", b"aaaaa"] {
            let hints = evaluate(word, word).unwrap();
            assert!(hints.is_solved());
            assert_eq!(hints.hints(), [Exact; 5]);
        }
    }

    #[test]
    fn all_absent_when_no_letters_shared() {
        let hints = evaluate(b"chair", b"debug").unwrap();
        assert_eq!(hints.hints(), [Absent; 5]);
    }

    #[test]
    fn repeated_guess_letters_are_not_capped() {
        // "abbey" holds a single 'e', yet every misplaced e of "geese" is Present
        let hints = evaluate(b"geese", b"abbey").unwrap();
        assert_eq!(hints.hints(), [Absent, Present, Present, Absent, Present]);
    }

    #[test]
    fn letters_are_recorded_per_position() {
        let hints = evaluate(b"belay", b"abbey").unwrap();
        let pairs: Vec<(Hint, u8)> = hints.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Present, b'b'),
                (Present, b'e'),
                (Absent, b'l'),
                (Present, b'a'),
                (Exact, b'y'),
            ]
        );
    }

    #[test]
    fn length_mismatch_is_invalid_input() {
        let err = evaluate(b"abc", b"abbey").unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidInput { ref guess, ref solution }
                if guess == "abc" && solution == "abbey"
        ));
    }

    #[test]
    fn equal_but_wrong_length_is_invalid_input() {
        assert!(evaluate(b"abcdef", b"abcdef").is_err());
        assert!(evaluate(b"", b"").is_err());
    }

    #[test]
    fn display_compact_form() {
        let hints = evaluate(b"belay", b"abbey").unwrap();
        assert_eq!(hints.to_string(), "be.aY");
    }
}
