//! Immutable vocabulary grouped by word length
//!
//! Built once at startup and shared by reference with every solving session.

use super::WORDS;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Construction options for a [`Vocabulary`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VocabularyOptions {
    /// Keep at most this many words of each length, in input order
    pub max_per_length: Option<usize>,
}

/// Read-only word collection, grouped by length
///
/// Words keep their input order within each length. That order is the
/// enumeration order the ranker uses to break entropy ties.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    by_length: FxHashMap<usize, Vec<Word>>,
    members: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from raw strings
    ///
    /// Entries are trimmed and lowercased. Invalid entries (non-alphabetic, or
    /// outside 3..=15 letters) and repeats are skipped.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::Word;
    /// use entropy_wordle::wordlists::{Vocabulary, VocabularyOptions};
    ///
    /// let words = ["apple", "Raise", "cat", "it's", "apple"];
    /// let vocab = Vocabulary::new(words, VocabularyOptions::default());
    /// assert_eq!(vocab.words(5).len(), 2);
    /// assert_eq!(vocab.words(3).len(), 1);
    /// assert!(vocab.contains(&Word::new("raise").unwrap()));
    /// ```
    pub fn new<I, S>(words: I, options: VocabularyOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut members = FxHashSet::default();
        let mut skipped = 0usize;

        for raw in words {
            let Ok(word) = Word::new(raw.as_ref().trim()) else {
                skipped += 1;
                continue;
            };
            if members.contains(&word) {
                continue;
            }

            let bucket = by_length.entry(word.len()).or_default();
            if options.max_per_length.is_some_and(|cap| bucket.len() >= cap) {
                continue;
            }
            bucket.push(word.clone());
            members.insert(word);
        }

        let vocab = Self {
            by_length,
            members,
        };

        log::info!(
            "vocabulary ready: {} words across {} lengths",
            vocab.len(),
            vocab.by_length.len()
        );
        for len in vocab.lengths() {
            log::debug!("  {len} letters: {} words", vocab.words(len).len());
        }
        if skipped > 0 {
            log::debug!("skipped {skipped} invalid entries");
        }

        vocab
    }

    /// Build the vocabulary from the word list bundled at compile time
    #[must_use]
    pub fn embedded(options: VocabularyOptions) -> Self {
        Self::new(WORDS.iter().copied(), options)
    }

    /// All words of the given length, in input order
    ///
    /// Returns an empty slice for lengths with no words.
    #[must_use]
    pub fn words(&self, len: usize) -> &[Word] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.members.contains(word)
    }

    /// Word lengths that have at least one word, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
