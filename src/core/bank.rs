//! Candidate word bank
//!
//! An ordered set of words. Iteration order is insertion order, which is what
//! breaks scoring ties, so it is preserved through every narrowing step.

use super::Word;
use rustc_hash::FxHashSet;

/// The words still consistent with every hint seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Build a bank, dropping repeated words but keeping first-seen order
    ///
    /// # Examples
    /// ```
    /// use wordle_greedy::core::{Word, WordBank};
    ///
    /// let words = ["table", "abbey", "table"].map(|w| Word::new(w).unwrap());
    /// let bank = WordBank::new(words);
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(bank.words()[0].text(), "table");
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        Self { words }
    }

    /// Keep only the words matching `keep`, in their current order
    ///
    /// The result is always a subset of `self`.
    #[must_use]
    pub fn retain_matching(&self, mut keep: impl FnMut(&Word) -> bool) -> Self {
        Self {
            words: self.words.iter().filter(|w| keep(w)).cloned().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Words in iteration order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordBank {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(words: &[&str]) -> WordBank {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let bank = bank(&["chair", "abbey", "table"]);
        let texts: Vec<&str> = bank.iter().map(Word::text).collect();
        assert_eq!(texts, ["chair", "abbey", "table"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let bank = bank(&["amber", "belay", "amber", "chair", "belay"]);
        let texts: Vec<&str> = bank.iter().map(Word::text).collect();
        assert_eq!(texts, ["amber", "belay", "chair"]);
    }

    #[test]
    fn retain_matching_is_a_subset() {
        let bank = bank(&["abbey", "table", "chair"]);
        let narrowed = bank.retain_matching(|w| w.has_letter(b'b'));

        assert_eq!(narrowed.len(), 2);
        assert!(narrowed.iter().all(|w| bank.contains(w)));
        assert!(!narrowed.contains(&Word::new("chair").unwrap()));
    }

    #[test]
    fn empty_bank() {
        let bank = WordBank::default();
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
        assert!(bank.retain_matching(|_| true).is_empty());
    }
}
