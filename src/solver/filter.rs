//! Candidate filtering by feedback consistency

use crate::core::{Pattern, Word};

/// Keep the candidates that would have produced `pattern` for `guess`
///
/// Order is preserved. An empty result means the (guess, pattern) pair
/// contradicts every candidate; callers treat that as a dead end.
///
/// # Examples
/// ```
/// use entropy_wordle::core::{Pattern, Word};
/// use entropy_wordle::solver::filter_candidates;
/// use entropy_wordle::wordlists::loader::words_from_slice;
///
/// let candidates = words_from_slice(&["apple", "ample", "maple"]);
/// let guess = Word::new("apple").unwrap();
///
/// let kept = filter_candidates(&candidates, &guess, Pattern::perfect(5));
/// assert_eq!(kept, [guess]);
/// ```
#[must_use]
pub fn filter_candidates(candidates: &[Word], guess: &Word, pattern: Pattern) -> Vec<Word> {
    candidates
        .iter()
        .filter(|&candidate| Pattern::calculate(guess, candidate) == pattern)
        .cloned()
        .collect()
}
