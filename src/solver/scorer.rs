//! Greedy frequency-based word selection
//!
//! A word's score is the sum of the frequencies of its distinct letters. The
//! best guess is the word covering the letters most common across the
//! remaining candidates.

use super::frequency::FrequencyMap;
use crate::core::{Word, WordBank};
use crate::error::{Result, WordleError};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Score a single word against a frequency map
///
/// Letters missing from the map contribute nothing.
#[must_use]
pub fn score(word: &Word, freqs: &FrequencyMap) -> usize {
    word.distinct_letters()
        .map(|letter| freqs.get(&letter).copied().unwrap_or(0))
        .sum()
}

/// Select the highest-scoring word in the bank, along with its score
///
/// Scoring runs in parallel. Each word carries its bank index so that among
/// equal scores the earliest word wins, independent of completion order.
///
/// # Errors
/// Returns `WordleError::EmptyBank` if the bank has no words.
pub fn best_with_score<'a>(bank: &'a WordBank, freqs: &FrequencyMap) -> Result<(&'a Word, usize)> {
    bank.words()
        .par_iter()
        .enumerate()
        .map(|(index, word)| (index, word, score(word, freqs)))
        .max_by_key(|&(index, _, score)| (score, Reverse(index)))
        .map(|(_, word, score)| (word, score))
        .ok_or(WordleError::EmptyBank)
}

/// Select the highest-scoring word in the bank
///
/// # Errors
/// Returns `WordleError::EmptyBank` if the bank has no words.
///
/// # Examples
/// ```
/// use wordle_greedy::core::{Word, WordBank};
/// use wordle_greedy::solver::{letter_frequencies, select_best};
///
/// let bank: WordBank = ["abbey", "table", "chair", "amber", "belay"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let freqs = letter_frequencies(bank.words());
///
/// assert_eq!(select_best(&bank, &freqs).unwrap().text(), "belay");
/// ```
pub fn select_best<'a>(bank: &'a WordBank, freqs: &FrequencyMap) -> Result<&'a Word> {
    best_with_score(bank, freqs).map(|(word, _)| word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::letter_frequencies;

    fn bank(list: &[&str]) -> WordBank {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn score_sums_distinct_letters() {
        let freqs = letter_frequencies(bank(&["abbey", "table", "chair", "amber", "belay"]).words());

        // a=5 b=4 e=4 y=2
        assert_eq!(score(&Word::new("abbey").unwrap(), &freqs), 15);
        // b=4 e=4 l=2 a=5 y=2
        assert_eq!(score(&Word::new("belay").unwrap(), &freqs), 17);
    }

    #[test]
    fn unknown_letters_score_zero() {
        let freqs = letter_frequencies(bank(&["abbey"]).words());
        assert_eq!(score(&Word::new("xxxxz").unwrap(), &freqs), 0);
    }

    #[test]
    fn selects_maximum_score() {
        let bank = bank(&["abbey", "table", "chair", "amber", "belay"]);
        let freqs = letter_frequencies(bank.words());

        let (best, best_score) = best_with_score(&bank, &freqs).unwrap();
        assert_eq!(best.text(), "belay");
        assert_eq!(best_score, 17);
    }

    #[test]
    fn ties_go_to_the_earliest_word() {
        // Anagrams always tie
        let forward = bank(&["stare", "tears", "rates"]);
        let freqs = letter_frequencies(forward.words());
        assert_eq!(select_best(&forward, &freqs).unwrap().text(), "stare");

        let backward = bank(&["rates", "tears", "stare"]);
        assert_eq!(select_best(&backward, &freqs).unwrap().text(), "rates");
    }

    #[test]
    fn tie_break_holds_on_large_banks() {
        // Enough words that rayon actually splits the work
        let mut words: Vec<String> = (0..2000)
            .map(|i| {
                let a = (b'a' + (i % 20) as u8) as char;
                let b = (b'a' + (i / 20 % 20) as u8) as char;
                format!("{a}{b}zzz")
            })
            .collect();
        words.push("qvwxy".to_string());
        words.push("yxwvq".to_string());
        let bank: WordBank = words.iter().map(|w| Word::new(w.as_str()).unwrap()).collect();

        let mut freqs = FrequencyMap::default();
        for letter in b"qvwxy" {
            freqs.insert(*letter, 1000);
        }

        for _ in 0..10 {
            assert_eq!(select_best(&bank, &freqs).unwrap().text(), "qvwxy");
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let bank = bank(&["amber", "table", "chair"]);
        let freqs = letter_frequencies(bank.words());
        let first = select_best(&bank, &freqs).unwrap().clone();

        for _ in 0..20 {
            assert_eq!(select_best(&bank, &freqs).unwrap(), &first);
        }
    }

    #[test]
    fn empty_bank_is_an_error() {
        let bank = WordBank::default();
        let freqs = FrequencyMap::default();
        assert!(matches!(
            select_best(&bank, &freqs),
            Err(WordleError::EmptyBank)
        ));
    }
}
