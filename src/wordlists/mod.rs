//! Word lists
//!
//! The ordered list used for both target selection and guess validation.

mod embedded;
pub mod loader;

pub use embedded::{
    BLUEPRINT_FALLBACK, CORRUPTED_FALLBACK, REGULAR_FALLBACK, WORDS, WORDS_COUNT,
    fallback_targets,
};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Ordered word list with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    members: FxHashSet<Word>,
}

impl WordList {
    /// Build a list, dropping later duplicates but keeping order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            list.push_if_missing(word);
        }
        list
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` is a legal guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Word at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Words in list order
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Iterate words in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Append `word` unless already present; returns whether it was added
    pub fn push_if_missing(&mut self, word: Word) -> bool {
        if self.members.insert(word.clone()) {
            self.words.push(word);
            true
        } else {
            false
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid_uppercase() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn fallback_targets_are_in_embedded_list() {
        let list = WordList::embedded();
        for mode in GameMode::ALL {
            for &word in fallback_targets(mode) {
                let word = Word::new(word).unwrap();
                assert!(list.contains(&word), "{word} missing for {mode}");
            }
        }
    }

    #[test]
    fn opener_words_are_in_embedded_list() {
        let list = WordList::embedded();
        for word in ["CRANE", "AUDIO", "RAISE", "POINT", "BLEND"] {
            assert!(list.contains(&Word::new(word).unwrap()));
        }
    }

    #[test]
    fn new_drops_duplicates_and_keeps_order() {
        let list = WordList::new(loader::words_from_slice(&["crane", "slate", "CRANE"]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).map(Word::text), Some("CRANE"));
        assert_eq!(list.get(1).map(Word::text), Some("SLATE"));
    }

    #[test]
    fn push_if_missing_appends_once() {
        let mut list = WordList::new(loader::words_from_slice(&["crane"]));
        let ghost = Word::new("ghost").unwrap();

        assert!(list.push_if_missing(ghost.clone()));
        assert!(!list.push_if_missing(ghost.clone()));
        assert_eq!(list.len(), 2);
        assert!(list.contains(&ghost));
    }
}
