//! Wordle word representation
//!
//! A Word stores a 5-letter lowercase word along with a letter-set mask for
//! constant-time membership checks.

use crate::error::{Result, WordReason, WordleError};
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word with letter membership tracking
///
/// Stores the word as bytes and a 26-bit mask of the letters it contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: u32,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::Word;
    ///
    /// let word = Word::new("abbey").unwrap();
    /// assert_eq!(word.text(), "abbey");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_lowercase();

        let reject = |reason| WordleError::InvalidWord {
            word: text.clone(),
            reason,
        };

        if !text.is_ascii() {
            return Err(reject(WordReason::NonAscii));
        }

        let Ok(chars) = <[u8; WORD_LENGTH]>::try_from(text.as_bytes()) else {
            return Err(reject(WordReason::InvalidLength(text.len())));
        };

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(reject(WordReason::InvalidCharacters));
        }

        let letters = chars.iter().fold(0, |mask, &ch| mask | letter_bit(ch));

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.letters & letter_bit(letter) != 0
    }

    /// Iterate over each letter of the word once, in first-occurrence order
    ///
    /// `abbey` yields `a`, `b`, `e`, `y`.
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.chars
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.chars[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }
}

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
