//! Word lists and the vocabulary provider
//!
//! The bundled list is compiled into the binary; custom lists load from files.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{WORDS, WORDS_COUNT};
pub use vocabulary::{Vocabulary, VocabularyOptions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn bundled_words_are_valid() {
        for &word in WORDS {
            assert!(
                (3..=15).contains(&word.len()),
                "Word '{word}' has unsupported length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
