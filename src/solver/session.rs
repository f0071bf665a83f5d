//! Solving session state machine
//!
//! A [`Session`] owns one candidate set and walks it from the full
//! vocabulary slice down to a single word, one (guess, pattern) pair per turn.

use super::entropy::{GuessRanking, RankedGuess, calculate_entropy, rank_guesses_with_progress};
use super::error::{Exhaustion, SolveError};
use super::filter::filter_candidates;
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, Pattern, PatternError, Word};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the next (guess, pattern) pair
    Guessing,
    /// An all-correct pattern was submitted on this turn
    Solved { turns: usize },
    /// Filtering left no candidates
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

/// One completed turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub turn: usize,
    pub guess: Word,
    pub pattern: Pattern,
    /// Entropy of the guess against the candidates it was played into
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of one solving session
///
/// The vocabulary is borrowed; the candidate set belongs to the session
/// and only ever shrinks.
#[derive(Debug)]
pub struct Session<'v> {
    vocabulary: &'v Vocabulary,
    length: usize,
    candidates: Vec<Word>,
    initial_count: usize,
    turn: usize,
    phase: Phase,
    target: Option<Word>,
    history: Vec<TurnRecord>,
}

impl<'v> Session<'v> {
    /// Start a session over every vocabulary word of `length` letters
    ///
    /// # Errors
    /// `InvalidLength` outside 3..=15, `EmptyVocabulary` when the vocabulary
    /// has no words of that length.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::solver::{Session, SolveError};
    /// use entropy_wordle::wordlists::{Vocabulary, VocabularyOptions};
    ///
    /// let vocab = Vocabulary::new(["crane", "slate", "cat"], VocabularyOptions::default());
    ///
    /// let session = Session::new(&vocab, 5).unwrap();
    /// assert_eq!(session.candidates().len(), 2);
    ///
    /// assert!(matches!(Session::new(&vocab, 16), Err(SolveError::InvalidLength(16))));
    /// assert!(matches!(Session::new(&vocab, 4), Err(SolveError::EmptyVocabulary(4))));
    /// ```
    pub fn new(vocabulary: &'v Vocabulary, length: usize) -> Result<Self, SolveError> {
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&length) {
            return Err(SolveError::InvalidLength(length));
        }

        let candidates = vocabulary.words(length).to_vec();
        if candidates.is_empty() {
            return Err(SolveError::EmptyVocabulary(length));
        }

        log::info!(
            "session started: {length} letters, {} candidates",
            candidates.len()
        );

        Ok(Self {
            vocabulary,
            length,
            initial_count: candidates.len(),
            candidates,
            turn: 0,
            phase: Phase::Guessing,
            target: None,
            history: Vec::new(),
        })
    }

    /// Fix the hidden target for a simulated game
    ///
    /// A requested target must be a vocabulary word of the session length.
    /// Without one, a target is drawn uniformly from the candidates with `rng`.
    ///
    /// # Errors
    /// `InvalidTarget` naming what is wrong with the requested word.
    pub fn resolve_target<R>(
        &mut self,
        requested: Option<&str>,
        rng: &mut R,
    ) -> Result<&Word, SolveError>
    where
        R: Rng + ?Sized,
    {
        let target = match requested {
            Some(raw) => self.validate_target(raw)?,
            None => self
                .candidates
                .choose(rng)
                .cloned()
                .ok_or(SolveError::EmptyVocabulary(self.length))?,
        };

        log::debug!("target resolved");
        Ok(&*self.target.insert(target))
    }

    fn validate_target(&self, raw: &str) -> Result<Word, SolveError> {
        let invalid = |reason: String| SolveError::InvalidTarget {
            target: raw.to_string(),
            reason,
        };

        let word = Word::new(raw.trim()).map_err(|err| invalid(err.to_string()))?;
        if word.len() != self.length {
            return Err(invalid(format!(
                "expected {} letters, got {}",
                self.length,
                word.len()
            )));
        }
        if !self.vocabulary.contains(&word) {
            return Err(invalid("not in the vocabulary".to_string()));
        }
        Ok(word)
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Words still consistent with every submitted pattern
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Number of turns played so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Remaining candidates as a fraction of the starting set, in [0, 1]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.candidates.len() as f64 / self.initial_count as f64
    }

    /// Rank the candidates against themselves
    #[must_use]
    pub fn rank(&self, top_n: usize) -> GuessRanking {
        self.rank_with_progress(top_n, &ProgressBar::hidden())
    }

    /// Same as [`Session::rank`], ticking `progress` once per candidate
    #[must_use]
    pub fn rank_with_progress(&self, top_n: usize, progress: &ProgressBar) -> GuessRanking {
        rank_guesses_with_progress(&self.candidates, &self.candidates, top_n, progress)
    }

    /// The highest-entropy candidate
    #[must_use]
    pub fn best_guess(&self) -> Option<RankedGuess> {
        self.rank(1).into_iter().next()
    }

    /// Validate a typed guess
    ///
    /// # Errors
    /// `InvalidGuessInput` when the input is not a word, has the wrong
    /// length, or is not in the vocabulary.
    pub fn parse_guess(&self, input: &str) -> Result<Word, SolveError> {
        let input = input.trim();
        let invalid = |reason: String| SolveError::InvalidGuessInput {
            input: input.to_string(),
            reason,
        };

        let word = Word::new(input).map_err(|err| invalid(err.to_string()))?;
        if word.len() != self.length {
            return Err(invalid(format!(
                "expected {} letters, got {}",
                self.length,
                word.len()
            )));
        }
        if !self.vocabulary.contains(&word) {
            return Err(invalid("not in the vocabulary".to_string()));
        }
        Ok(word)
    }

    /// Validate a typed feedback string
    ///
    /// # Errors
    /// `InvalidFeedbackInput` for a wrong length or a non-feedback symbol.
    pub fn parse_feedback(&self, input: &str) -> Result<Pattern, SolveError> {
        Ok(Pattern::parse(input.trim(), self.length)?)
    }

    /// Apply the feedback for one guess and advance the turn
    ///
    /// The candidate set is replaced only once filtering is complete. On
    /// exhaustion the previous set is kept for diagnostics.
    ///
    /// # Errors
    /// - `SessionOver` if the session already finished
    /// - `InvalidGuessInput` / `InvalidFeedbackInput` on a length mismatch
    /// - `NoCandidatesRemaining` when no candidate is consistent with the pattern
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::{Pattern, Word};
    /// use entropy_wordle::solver::{Phase, Session};
    /// use entropy_wordle::wordlists::{Vocabulary, VocabularyOptions};
    ///
    /// let words = ["slate", "irate", "crate", "apple"];
    /// let vocab = Vocabulary::new(words, VocabularyOptions::default());
    /// let mut session = Session::new(&vocab, 5).unwrap();
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let phase = session.submit(&guess, Pattern::parse("bbggg", 5).unwrap()).unwrap();
    /// assert_eq!(phase, Phase::Guessing);
    /// assert_eq!(session.candidates().len(), 2);
    /// ```
    pub fn submit(&mut self, guess: &Word, pattern: Pattern) -> Result<Phase, SolveError> {
        if self.phase.is_finished() {
            return Err(SolveError::SessionOver);
        }
        if guess.len() != self.length {
            return Err(SolveError::InvalidGuessInput {
                input: guess.text().to_string(),
                reason: format!("expected {} letters, got {}", self.length, guess.len()),
            });
        }
        if pattern.len() != self.length {
            return Err(PatternError::WrongLength {
                expected: self.length,
                found: pattern.len(),
            }
            .into());
        }

        let entropy = calculate_entropy(guess, &self.candidates);
        let before = self.candidates.len();
        self.turn += 1;

        let after = if pattern.is_perfect() {
            self.candidates = vec![guess.clone()];
            self.phase = Phase::Solved { turns: self.turn };
            1
        } else {
            let filtered = filter_candidates(&self.candidates, guess, pattern);
            if filtered.is_empty() {
                0
            } else {
                let after = filtered.len();
                self.candidates = filtered;
                after
            }
        };

        log::debug!(
            "turn {}: {guess} -> {pattern} ({entropy:.3} bits), {before} -> {after} candidates",
            self.turn
        );

        self.history.push(TurnRecord {
            turn: self.turn,
            guess: guess.clone(),
            pattern,
            entropy,
            candidates_before: before,
            candidates_after: after,
        });

        if after == 0 {
            self.phase = Phase::Exhausted;
            let cause = if self.target.is_some() {
                log::error!(
                    "candidate set emptied on turn {} although the target was known",
                    self.turn
                );
                Exhaustion::InvariantViolated
            } else {
                log::warn!("no candidates match the feedback on turn {}", self.turn);
                Exhaustion::ContradictoryFeedback
            };
            return Err(SolveError::NoCandidatesRemaining {
                turn: self.turn,
                cause,
            });
        }

        Ok(self.phase)
    }
}
