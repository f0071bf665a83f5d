//! Word list loading utilities
//!
//! Reads word lists from files, or converts embedded string slices into words.

use super::{Vocabulary, VocabularyOptions};
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read the entries of a word list file
///
/// One word per line. Blank lines and lines starting with `#` are ignored.
/// Entries are returned unvalidated; [`Vocabulary::new`] filters them.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_word_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Load a vocabulary from a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use entropy_wordle::wordlists::{VocabularyOptions, loader::load_vocabulary};
///
/// let vocab = load_vocabulary("words.txt", VocabularyOptions::default()).unwrap();
/// println!("Loaded {} words", vocab.len());
/// ```
pub fn load_vocabulary<P: AsRef<Path>>(
    path: P,
    options: VocabularyOptions,
) -> io::Result<Vocabulary> {
    let path = path.as_ref();
    let entries = read_word_file(path)?;
    log::info!("read {} entries from {}", entries.len(), path.display());
    Ok(Vocabulary::new(entries, options))
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use entropy_wordle::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "x", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "no", "sh0rt", "telephone"]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "telephone"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_vocabulary_from_file() {
        let path = std::env::temp_dir().join(format!(
            "entropy_wordle_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# comment").unwrap();
            writeln!(file, "crane").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  Slate  ").unwrap();
            writeln!(file, "cat").unwrap();
        }

        let vocab = load_vocabulary(&path, VocabularyOptions::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(vocab.words(5).len(), 2);
        assert_eq!(vocab.words(3).len(), 1);
    }

    #[test]
    fn load_vocabulary_missing_file() {
        let result = load_vocabulary(
            "/definitely/not/a/real/wordlist.txt",
            VocabularyOptions::default(),
        );
        assert!(result.is_err());
    }
}
