//! Entropy-based guess scoring
//!
//! Implements Shannon entropy calculation for feedback pattern distributions
//! and the parallel ranking built on it.

mod calculator;
mod ranking;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use ranking::{GuessRanking, RankedGuess, rank_guesses, rank_guesses_with_progress};
