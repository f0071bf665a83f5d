//! Formatting utilities for terminal output
//!
//! Plain strings only; coloring happens in [`super::display`].

use crate::solver::entropy::RankedGuess;
use indicatif::ProgressStyle;

/// Create a progress bar string
///
/// # Examples
/// ```
/// use entropy_wordle::output::formatters::create_progress_bar;
///
/// assert_eq!(create_progress_bar(1.0, 4.0, 8), "██░░░░░░");
/// ```
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let fraction = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    // Cast is safe: fraction is clamped to [0, 1]
    let filled = ((fraction * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining-candidates line printed after each filtered turn
///
/// # Examples
/// ```
/// use entropy_wordle::output::formatters::candidate_bar;
///
/// assert_eq!(
///     candidate_bar(2, 25, 100, 8),
///     "[Turn 2] Remaining candidates: 25 |██░░░░░░|"
/// );
/// ```
#[must_use]
pub fn candidate_bar(turn: usize, remaining: usize, initial: usize, width: usize) -> String {
    format!(
        "[Turn {turn}] Remaining candidates: {remaining} |{}|",
        create_progress_bar(remaining as f64, initial as f64, width)
    )
}

/// Format entropy as a bar, scaled to the most a guess could score
///
/// A guess can split `candidates` into at most `candidates` classes, so the
/// bar is full at log2(candidates) bits.
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// One ranked suggestion, `rank` counted from 1
#[must_use]
pub fn format_suggestion(rank: usize, guess: &RankedGuess) -> String {
    format!("{rank:>4}. {}  {:.3} bits", guess.word, guess.entropy)
}

/// Style for the bar shown while a guess pool is ranked
#[must_use]
pub fn ranking_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .map_or_else(
            |_| ProgressStyle::default_bar(),
            |style| style.progress_chars("█▓▒░"),
        )
}
