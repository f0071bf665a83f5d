//! Simulated play against a hidden target

use super::error::{Exhaustion, SolveError};
use super::session::{Phase, Session, TurnRecord};
use crate::core::{Pattern, Word};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;

/// Settings for a simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoConfig {
    /// Word length, checked against 3..=15 when the session starts
    pub length: usize,
    /// Fixed target; drawn at random when absent
    pub target: Option<String>,
}

impl Default for AutoConfig {
    fn default() -> Self {
        Self {
            length: 5,
            target: None,
        }
    }
}

/// Result of a solved simulated game
#[derive(Debug, Clone, PartialEq)]
pub struct AutoReport {
    pub target: Word,
    pub turns: Vec<TurnRecord>,
}

impl AutoReport {
    /// Number of guesses it took, including the winning one
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// Hooks for watching a simulated game as it runs
///
/// Both methods have no-op defaults, and `()` observes nothing.
pub trait TurnObserver {
    /// Progress bar to tick while ranking `pool_size` guesses for `turn`
    fn ranking_progress(&mut self, _turn: usize, _pool_size: usize) -> ProgressBar {
        ProgressBar::hidden()
    }

    /// Called after each turn that did not end the game in failure
    fn on_turn(&mut self, _record: &TurnRecord, _session: &Session<'_>) {}
}

impl TurnObserver for () {}

/// Play a full game: rank, guess the top word, score it against the target, filter
///
/// Every turn removes the guess from the candidates unless it was the
/// target, so a real target is found within the initial candidate count.
///
/// # Errors
/// `InvalidLength`, `EmptyVocabulary` or `InvalidTarget` before any turn is
/// played; `NoCandidatesRemaining` if the candidate set ever empties.
///
/// # Examples
/// ```
/// use entropy_wordle::solver::{AutoConfig, play_auto};
/// use entropy_wordle::wordlists::{Vocabulary, VocabularyOptions};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let words = ["slate", "irate", "crate", "grate", "apple"];
/// let vocab = Vocabulary::new(words, VocabularyOptions::default());
/// let config = AutoConfig { length: 5, target: Some("grate".to_string()) };
///
/// let report = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(7), &mut ()).unwrap();
/// assert_eq!(report.target.text(), "grate");
/// assert!(report.turn_count() <= 5);
/// ```
pub fn play_auto<R, O>(
    vocabulary: &Vocabulary,
    config: &AutoConfig,
    rng: &mut R,
    observer: &mut O,
) -> Result<AutoReport, SolveError>
where
    R: Rng + ?Sized,
    O: TurnObserver + ?Sized,
{
    let mut session = Session::new(vocabulary, config.length)?;
    let target = session
        .resolve_target(config.target.as_deref(), rng)?
        .clone();

    loop {
        let progress = observer.ranking_progress(session.turn() + 1, session.candidates().len());
        let ranking = session.rank_with_progress(1, &progress);
        progress.finish_and_clear();

        let Some(best) = ranking.best() else {
            return Err(SolveError::NoCandidatesRemaining {
                turn: session.turn(),
                cause: Exhaustion::InvariantViolated,
            });
        };

        let guess = best.word.clone();
        let pattern = Pattern::calculate(&guess, &target);
        let phase = session.submit(&guess, pattern)?;

        if let Some(record) = session.history().last() {
            observer.on_turn(record, &session);
        }

        if let Phase::Solved { turns } = phase {
            log::info!("solved {target} in {turns} turns");
            return Ok(AutoReport {
                target,
                turns: session.history().to_vec(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::VocabularyOptions;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct Recorder {
        pools: Vec<usize>,
        remaining: Vec<usize>,
    }

    impl TurnObserver for Recorder {
        fn ranking_progress(&mut self, _turn: usize, pool_size: usize) -> ProgressBar {
            self.pools.push(pool_size);
            ProgressBar::hidden()
        }

        fn on_turn(&mut self, record: &TurnRecord, session: &Session<'_>) {
            assert_eq!(record.turn, session.turn());
            self.remaining.push(session.candidates().len());
        }
    }

    fn embedded() -> Vocabulary {
        Vocabulary::embedded(VocabularyOptions::default())
    }

    #[test]
    fn solves_apple() {
        let vocab = embedded();
        let config = AutoConfig {
            length: 5,
            target: Some("apple".to_string()),
        };

        let report = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(0), &mut ()).unwrap();

        assert_eq!(report.target.text(), "apple");
        assert!(report.turn_count() >= 1);
        assert!(report.turn_count() <= vocab.words(5).len());

        let last = report.turns.last().unwrap();
        assert_eq!(last.guess.text(), "apple");
        assert!(last.pattern.is_perfect());
        // Every non-final turn strictly shrinks the candidate set
        for record in &report.turns[..report.turns.len() - 1] {
            assert!(record.candidates_after < record.candidates_before);
            assert!(!record.pattern.is_perfect());
        }
    }

    #[test]
    fn unknown_target_fails_before_any_turn() {
        let vocab = embedded();
        let config = AutoConfig {
            length: 5,
            target: Some("zzzzz".to_string()),
        };
        let mut recorder = Recorder::default();

        let result = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(0), &mut recorder);

        assert!(matches!(result, Err(SolveError::InvalidTarget { .. })));
        assert!(recorder.pools.is_empty());
        assert!(recorder.remaining.is_empty());
    }

    #[test]
    fn invalid_length_is_reported_first() {
        let vocab = embedded();
        let config = AutoConfig {
            length: 2,
            target: Some("zzzzz".to_string()),
        };

        let result = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(0), &mut ());
        assert!(matches!(result, Err(SolveError::InvalidLength(2))));
    }

    #[test]
    fn empty_vocabulary_is_reported() {
        let vocab = Vocabulary::new(["crane"], VocabularyOptions::default());
        let config = AutoConfig {
            length: 6,
            target: None,
        };

        let result = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(0), &mut ());
        assert!(matches!(result, Err(SolveError::EmptyVocabulary(6))));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let vocab = embedded();
        let config = AutoConfig {
            length: 4,
            target: None,
        };

        let first = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(99), &mut ()).unwrap();
        let second = play_auto(&vocab, &config, &mut StdRng::seed_from_u64(99), &mut ()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn observer_sees_every_turn() {
        let vocab = embedded();
        let config = AutoConfig {
            length: 6,
            target: None,
        };
        let mut recorder = Recorder::default();

        let report =
            play_auto(&vocab, &config, &mut StdRng::seed_from_u64(5), &mut recorder).unwrap();

        assert_eq!(recorder.pools.len(), report.turn_count());
        assert_eq!(recorder.remaining.len(), report.turn_count());
        assert_eq!(recorder.pools[0], vocab.words(6).len());
        assert_eq!(recorder.remaining.last(), Some(&1));
    }

    #[test]
    fn single_word_vocabulary_solves_in_one() {
        let vocab = Vocabulary::new(["crane"], VocabularyOptions::default());
        let report = play_auto(
            &vocab,
            &AutoConfig::default(),
            &mut StdRng::seed_from_u64(0),
            &mut (),
        )
        .unwrap();

        assert_eq!(report.turn_count(), 1);
        assert_eq!(report.turns[0].entropy, 0.0);
    }
}
