//! Entropy Wordle
//!
//! A solver for fixed-length word-guessing puzzles (3 to 15 letters) that
//! always plays the candidate with the highest Shannon entropy over the words
//! still consistent with the feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use entropy_wordle::core::{Pattern, Word};
//!
//! let guess = Word::new("arise").unwrap();
//! let target = Word::new("raise").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &target);
//! assert_eq!(pattern.to_string(), "yyggg");
//! ```

// Core domain types
pub mod core;

// Filtering, ranking and sessions
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Human-driven play over a console port
pub mod interactive;
