//! Errors that end or interrupt a solving session

use crate::core::PatternError;
use std::fmt;
use std::io;

/// Why a session ran out of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhaustion {
    /// Human-supplied feedback contradicts every remaining word
    ContradictoryFeedback,
    /// A session with a known target lost it; the solver itself is wrong
    InvariantViolated,
}

/// Error type for solving sessions
#[derive(Debug)]
pub enum SolveError {
    /// Word length outside the supported range
    InvalidLength(usize),
    /// The vocabulary has no words of the requested length
    EmptyVocabulary(usize),
    /// Auto mode target is malformed, the wrong length, or not in the vocabulary
    InvalidTarget { target: String, reason: String },
    /// Human guess is malformed, the wrong length, or not in the vocabulary
    InvalidGuessInput { input: String, reason: String },
    /// Human feedback is the wrong length or uses a disallowed symbol
    InvalidFeedbackInput(PatternError),
    /// Filtering left nothing
    NoCandidatesRemaining { turn: usize, cause: Exhaustion },
    /// Feedback submitted after the session reached a terminal state
    SessionOver,
    /// The human input port failed
    Io(io::Error),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};

        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Only word lengths {MIN_WORD_LEN} to {MAX_WORD_LEN} are supported, got {len}"
            ),
            Self::EmptyVocabulary(len) => {
                write!(f, "No vocabulary available for {len}-letter words")
            }
            Self::InvalidTarget { target, reason } => {
                write!(f, "Target word '{target}' is invalid: {reason}")
            }
            Self::InvalidGuessInput { input, reason } => {
                write!(f, "Guess '{input}' is invalid: {reason}")
            }
            Self::InvalidFeedbackInput(err) => write!(f, "{err}"),
            Self::NoCandidatesRemaining {
                turn,
                cause: Exhaustion::ContradictoryFeedback,
            } => write!(
                f,
                "No candidates match the feedback given through turn {turn}"
            ),
            Self::NoCandidatesRemaining {
                turn,
                cause: Exhaustion::InvariantViolated,
            } => write!(
                f,
                "No candidates left after turn {turn} although the target was known"
            ),
            Self::SessionOver => write!(f, "The session has already finished"),
            Self::Io(err) => write!(f, "Input/output error: {err}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedbackInput(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SolveError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PatternError> for SolveError {
    fn from(err: PatternError) -> Self {
        Self::InvalidFeedbackInput(err)
    }
}
