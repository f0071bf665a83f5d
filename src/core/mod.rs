//! Core domain types for the puzzle
//!
//! Words and feedback patterns. Everything here is pure and has no
//! dependencies outside the standard library.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, PatternError};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
