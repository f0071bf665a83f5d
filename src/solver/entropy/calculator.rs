//! Shannon entropy calculation for feedback patterns
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Summary statistics for a guess against a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, assuming the target is
/// uniformly distributed over `candidates`. Zero for an empty set.
///
/// # Formula
/// H(X) = Σ p(x) · log₂(1 / p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Examples
/// ```
/// use entropy_wordle::core::Word;
/// use entropy_wordle::solver::entropy::calculate_entropy;
/// use entropy_wordle::wordlists::loader::words_from_slice;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = words_from_slice(&["slate", "zzzzz"]);
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-12); // even binary split
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    shannon_entropy(group_by_pattern(guess, candidates).into_values())
}

/// Count candidates per pattern produced with the guess
fn group_by_pattern(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from class sizes
///
/// Sizes are summed smallest first, so two guesses with the same class sizes
/// always score bit-for-bit identically whatever order the classes come in.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one non-empty class)
/// - Never negative
/// - Maximized for uniform distribution, at log₂(n) for n classes
///
/// # Examples
/// ```
/// use entropy_wordle::solver::entropy::shannon_entropy;
///
/// let entropy = shannon_entropy([25, 25, 25, 25]);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<I>(class_sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let mut sizes: Vec<usize> = class_sizes.into_iter().filter(|&n| n > 0).collect();
    let total: usize = sizes.iter().sum();

    if total == 0 {
        return 0.0;
    }

    sizes.sort_unstable();
    let total = total as f64;

    sizes
        .iter()
        .map(|&count| {
            let count = count as f64;
            // p · log2(1/p) stays >= +0.0 even when p = 1
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates, and worst case together
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = counts
        .values()
        .map(|&size| {
            let size = size as f64;
            size / total * size
        })
        .sum();
    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(counts.into_values()),
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 classes of one = log2(4) = 2 bits
        let entropy = shannon_entropy([1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy([10]);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        assert!(shannon_entropy([25, 25, 25, 25]) > shannon_entropy([97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let entropy = shannon_entropy([10, 20, 30]);
        assert!(entropy > 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn shannon_entropy_order_independent() {
        // Bit-identical, not just approximately equal
        assert_eq!(
            shannon_entropy([3, 1, 7, 2]).to_bits(),
            shannon_entropy([7, 2, 1, 3]).to_bits()
        );
    }

    #[test]
    fn shannon_entropy_empty() {
        assert_eq!(shannon_entropy(std::iter::empty()), 0.0);
        assert_eq!(shannon_entropy([0, 0]), 0.0);
    }

    #[test]
    fn calculate_entropy_real_words() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "irate", "trace", "raise"]);

        let entropy = calculate_entropy(&guess, &candidates);

        // Four candidates, at most two bits
        assert!(entropy > 1.0 && entropy <= 2.0);
    }

    #[test]
    fn calculate_entropy_all_same_pattern() {
        // Every candidate is all-absent against zzzzz
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words_from_slice(&["aaaaa", "bbbbb", "ccccc"]);

        assert_eq!(calculate_entropy(&guess, &candidates), 0.0);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words_from_slice(&["slate", "zzzzz"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(calculate_entropy(&guess, &[]), 0.0);
    }

    #[test]
    fn group_by_pattern_works() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "crate", "plate"]);

        let groups = group_by_pattern(&guess, &candidates);

        // slate and plate look the same to crane
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.values().sum::<usize>(), 3);
    }

    #[test]
    fn metrics_agree_with_entropy() {
        let guess = Word::new("crane").unwrap();
        let candidates = words_from_slice(&["slate", "crate", "plate", "crane"]);

        let metrics = calculate_metrics(&guess, &candidates);
        assert_eq!(metrics.entropy, calculate_entropy(&guess, &candidates));
        assert_eq!(metrics.max_partition, 2);
        // (2/4)·2 + (1/4)·1 + (1/4)·1 = 1.5
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-12);
    }
}
