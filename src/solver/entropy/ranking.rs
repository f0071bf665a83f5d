//! Entropy ranking of a guess pool
//!
//! Scores every word in the pool in parallel and orders them by expected
//! information gain.

use super::calculator::calculate_entropy;
use crate::core::Word;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::time::Instant;

/// A guess and its entropy against the candidate set it was ranked on
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGuess {
    pub word: Word,
    pub entropy: f64,
}

/// Guesses ordered by descending entropy
///
/// Equal entropies keep the order of the pool the ranking was built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessRanking {
    entries: Vec<RankedGuess>,
}

impl GuessRanking {
    /// Highest-entropy guess, if any
    #[must_use]
    pub fn best(&self) -> Option<&RankedGuess> {
        self.entries.first()
    }

    #[must_use]
    pub fn entries(&self) -> &[RankedGuess] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedGuess> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for GuessRanking {
    type Item = RankedGuess;
    type IntoIter = std::vec::IntoIter<RankedGuess>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a GuessRanking {
    type Item = &'a RankedGuess;
    type IntoIter = std::slice::Iter<'a, RankedGuess>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank `pool` by entropy against `candidates` and keep the top `top_n`
///
/// Deterministic: the same inputs always give the same ordered output,
/// however the parallel work is scheduled.
///
/// # Examples
/// ```
/// use entropy_wordle::solver::entropy::rank_guesses;
/// use entropy_wordle::wordlists::loader::words_from_slice;
///
/// let pool = words_from_slice(&["aaaaa", "aeros"]);
/// let candidates = words_from_slice(&["slate", "irate", "crate", "grate"]);
///
/// let ranking = rank_guesses(&pool, &candidates, 10);
/// assert_eq!(ranking.len(), 2);
/// assert_eq!(ranking.best().unwrap().word.text(), "aeros");
/// ```
#[must_use]
pub fn rank_guesses(pool: &[Word], candidates: &[Word], top_n: usize) -> GuessRanking {
    rank_guesses_with_progress(pool, candidates, top_n, &ProgressBar::hidden())
}

/// Same as [`rank_guesses`], ticking `progress` once per scored word
///
/// The bar is ticked from worker threads and is not finished here.
#[must_use]
pub fn rank_guesses_with_progress(
    pool: &[Word],
    candidates: &[Word],
    top_n: usize,
    progress: &ProgressBar,
) -> GuessRanking {
    let start = Instant::now();

    // Parallel collect keeps pool order
    let scores: Vec<f64> = pool
        .par_iter()
        .map(|guess| {
            let entropy = calculate_entropy(guess, candidates);
            progress.inc(1);
            entropy
        })
        .collect();

    // Stable sort: ties stay in pool order
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order.truncate(top_n);

    let entries = order
        .into_iter()
        .map(|i| RankedGuess {
            word: pool[i].clone(),
            entropy: scores[i],
        })
        .collect();

    log::debug!(
        "ranked {} guesses against {} candidates in {:.1?}",
        pool.len(),
        candidates.len(),
        start.elapsed()
    );

    GuessRanking { entries }
}
