//! Letter document-frequency counting
//!
//! Counts how many candidate words contain each letter at least once.

use crate::core::Word;
use log::trace;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Letter → number of words containing that letter
pub type FrequencyMap = FxHashMap<u8, usize>;

/// Count, for each letter, how many of `words` contain it
///
/// A letter repeated inside one word still counts once for that word.
///
/// # Examples
/// ```
/// use wordle_greedy::core::Word;
/// use wordle_greedy::solver::letter_frequencies;
///
/// let words = [Word::new("abbey").unwrap(), Word::new("deeds").unwrap()];
/// let freqs = letter_frequencies(&words);
///
/// assert_eq!(freqs[&b'b'], 1);
/// assert_eq!(freqs[&b'e'], 2);
/// assert_eq!(freqs[&b'd'], 1);
/// ```
#[must_use]
pub fn letter_frequencies(words: &[Word]) -> FrequencyMap {
    let freqs = words
        .par_iter()
        .fold(FrequencyMap::default, |mut counts, word| {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
            counts
        })
        .reduce(FrequencyMap::default, merge);

    trace!("letter frequencies over {} words: {freqs:?}", words.len());
    freqs
}

fn merge(mut left: FrequencyMap, right: FrequencyMap) -> FrequencyMap {
    for (letter, count) in right {
        *left.entry(letter).or_insert(0) += count;
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn counts_words_not_occurrences() {
        let freqs = letter_frequencies(&words(&["abbey", "deeds"]));

        assert_eq!(freqs.get(&b'b'), Some(&1));
        assert_eq!(freqs.get(&b'e'), Some(&2));
        assert_eq!(freqs.get(&b'd'), Some(&1));
        assert_eq!(freqs.get(&b's'), Some(&1));
        assert_eq!(freqs.get(&b'z'), None);
    }

    #[test]
    fn three_word_bank() {
        let freqs = letter_frequencies(&words(&["abbey", "table", "chair"]));

        assert_eq!(freqs[&b'a'], 3);
        assert_eq!(freqs[&b'b'], 2); // abbey, table
        assert_eq!(freqs[&b'e'], 2);
        assert_eq!(freqs[&b'c'], 1);
        assert_eq!(freqs.len(), 10);
    }

    #[test]
    fn empty_input_gives_empty_map() {
        assert!(letter_frequencies(&[]).is_empty());
    }

    #[test]
    fn no_count_exceeds_word_count() {
        let list = words(&["aaaaa", "aabbb", "abcde", "eeeee"]);
        let freqs = letter_frequencies(&list);

        assert_eq!(freqs[&b'a'], 3);
        assert!(freqs.values().all(|&count| count <= list.len()));
    }
}
