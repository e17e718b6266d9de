//! Word list loading utilities
//!
//! Reads dictionaries such as `/usr/share/dict/words` and keeps only plain
//! five-letter lowercase entries. Capitalized lines are proper nouns and are
//! skipped, as is anything with punctuation.

use crate::core::{WORD_LENGTH, Word};
use crate::error::{Result, WordleError};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// System word list used when no dictionary is given
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Check whether a dictionary line is a usable word
///
/// Surrounding whitespace is ignored; the rest must be exactly five
/// lowercase ASCII letters.
///
/// # Examples
/// ```
/// use wordle_greedy::wordlists::is_dictionary_word;
///
/// assert!(is_dictionary_word("abbey\n"));
/// assert!(!is_dictionary_word("Abbey"));
/// assert!(!is_dictionary_word("can't"));
/// ```
#[must_use]
pub fn is_dictionary_word(line: &str) -> bool {
    let word = line.trim();
    word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Load dictionary words from any buffered reader, in file order
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_dictionary_word(&line)
            && let Ok(word) = Word::new(line.trim())
        {
            words.push(word);
        }
    }
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordleError::Dictionary` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_greedy::wordlists::{load_from_file, DEFAULT_DICTIONARY};
///
/// let words = load_from_file(DEFAULT_DICTIONARY).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let dictionary_error = |source| WordleError::Dictionary {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(dictionary_error)?;
    let words = load_from_reader(BufReader::new(file)).map_err(dictionary_error)?;

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert a string slice list to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_greedy::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["abbey", "toolong", "table"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
