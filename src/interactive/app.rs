//! Human-driven game loop
//!
//! The human plays the guesses in a real puzzle and types back the feedback;
//! the solver narrows the candidates and suggests what to play next.

use super::console::Console;
use crate::core::{Pattern, Word};
use crate::output::formatters::{candidate_bar, format_suggestion};
use crate::solver::entropy::{GuessRanking, RankedGuess, calculate_metrics};
use crate::solver::{Phase, Session, SolveError};
use crate::wordlists::Vocabulary;

const BAR_WIDTH: usize = 30;

/// Who picks each turn's guess
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HumanMode {
    /// The solver proposes its top guess; Enter accepts it
    #[default]
    Assisted,
    /// The human types every guess
    ManualGuess,
}

/// Settings for a human-driven game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanConfig {
    pub length: usize,
    pub mode: HumanMode,
    /// How many ranked suggestions to show each turn
    pub suggestions: usize,
}

impl Default for HumanConfig {
    fn default() -> Self {
        Self {
            length: 5,
            mode: HumanMode::Assisted,
            suggestions: 100,
        }
    }
}

/// How a human-driven game ended, short of an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanOutcome {
    Solved { turns: usize, word: Word },
    /// The human quit, or input ran out
    Quit { turns: usize },
}

/// What a prompt produced
enum Reply<T> {
    Value(T),
    Quit,
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

/// Run a human-driven game over `console`
///
/// Malformed guesses or feedback are reported and asked for again; they do
/// not use up a turn. At the guess prompt a vocabulary word always counts as
/// a guess, even when it spells a quit command.
///
/// # Errors
/// - `InvalidLength` / `EmptyVocabulary` before the first prompt
/// - `NoCandidatesRemaining` when the feedback contradicts every candidate
/// - `Io` if the console fails
///
/// # Examples
/// ```
/// use entropy_wordle::interactive::{
///     HumanConfig, HumanMode, HumanOutcome, ScriptedConsole, play_human,
/// };
/// use entropy_wordle::wordlists::{Vocabulary, VocabularyOptions};
///
/// let words = ["slate", "irate", "crate", "grate"];
/// let vocab = Vocabulary::new(words, VocabularyOptions::default());
/// let config = HumanConfig { length: 5, mode: HumanMode::ManualGuess, suggestions: 3 };
/// let mut console = ScriptedConsole::new(["slate", "bbggg", "crate", "win"]);
///
/// let outcome = play_human(&vocab, &config, &mut console).unwrap();
/// assert!(matches!(outcome, HumanOutcome::Solved { turns: 2, .. }));
/// ```
pub fn play_human<C>(
    vocabulary: &Vocabulary,
    config: &HumanConfig,
    console: &mut C,
) -> Result<HumanOutcome, SolveError>
where
    C: Console + ?Sized,
{
    let mut session = Session::new(vocabulary, config.length)?;

    console.write_line(&format!(
        "Solving a {}-letter word from {} candidates.",
        session.length(),
        session.initial_count()
    ))?;
    console.write_line("Feedback: g = right spot, y = wrong spot, b = absent (or 'win').")?;
    console.write_line("Type 'quit' to stop.")?;

    loop {
        let ranking = if config.suggestions == 0 && config.mode == HumanMode::ManualGuess {
            GuessRanking::default()
        } else {
            let progress = console.ranking_progress(session.candidates().len());
            let ranking = session.rank_with_progress(config.suggestions.max(1), &progress);
            progress.finish_and_clear();
            ranking
        };
        show_suggestions(console, &ranking, config.suggestions)?;

        let proposal = match config.mode {
            HumanMode::Assisted => ranking.best(),
            HumanMode::ManualGuess => None,
        };
        if let Some(best) = proposal {
            let metrics = calculate_metrics(&best.word, session.candidates());
            console.write_line(&format!(
                "Suggested: {} ({:.3} bits, ~{:.1} left on average, {} at worst)",
                best.word, metrics.entropy, metrics.expected_remaining, metrics.max_partition
            ))?;
        }

        let guess = match read_guess(console, &session, proposal)? {
            Reply::Value(guess) => guess,
            Reply::Quit => return quit(console, &session),
        };
        let pattern = match read_feedback(console, &session, &guess)? {
            Reply::Value(pattern) => pattern,
            Reply::Quit => return quit(console, &session),
        };

        match session.submit(&guess, pattern) {
            Ok(Phase::Solved { turns }) => {
                console.write_line(&format!("Solved in {turns} turns: {guess}"))?;
                return Ok(HumanOutcome::Solved { turns, word: guess });
            }
            Ok(_) => {
                console.write_line(&candidate_bar(
                    session.turn(),
                    session.candidates().len(),
                    session.initial_count(),
                    BAR_WIDTH,
                ))?;
            }
            Err(err @ SolveError::NoCandidatesRemaining { .. }) => {
                console.write_line(&format!(
                    "No word fits {guess} = {pattern} together with the earlier feedback; \
                     the feedback contradicts itself."
                ))?;
                return Err(err);
            }
            Err(err) => return Err(err),
        }
    }
}

fn show_suggestions<C>(
    console: &mut C,
    ranking: &GuessRanking,
    limit: usize,
) -> Result<(), SolveError>
where
    C: Console + ?Sized,
{
    if limit == 0 {
        return Ok(());
    }

    console.write_line(&format!("Top {} suggestions:", ranking.len()))?;
    for (i, guess) in ranking.iter().enumerate() {
        console.write_line(&format_suggestion(i + 1, guess))?;
    }
    Ok(())
}

fn read_guess<C>(
    console: &mut C,
    session: &Session<'_>,
    proposal: Option<&RankedGuess>,
) -> Result<Reply<Word>, SolveError>
where
    C: Console + ?Sized,
{
    let prompt = match proposal {
        Some(best) => format!("Guess [{}]", best.word),
        None => "Guess".to_string(),
    };

    loop {
        let Some(input) = console.read_line(&prompt)? else {
            return Ok(Reply::Quit);
        };
        let input = input.trim().to_lowercase();

        if input.is_empty() {
            if let Some(best) = proposal {
                return Ok(Reply::Value(best.word.clone()));
            }
        }

        match session.parse_guess(&input) {
            Ok(guess) => return Ok(Reply::Value(guess)),
            Err(_) if is_quit(&input) => return Ok(Reply::Quit),
            Err(err) => console.write_line(&err.to_string())?,
        }
    }
}

fn read_feedback<C>(
    console: &mut C,
    session: &Session<'_>,
    guess: &Word,
) -> Result<Reply<Pattern>, SolveError>
where
    C: Console + ?Sized,
{
    let prompt = format!("Feedback for {guess}");

    loop {
        let Some(input) = console.read_line(&prompt)? else {
            return Ok(Reply::Quit);
        };
        let input = input.trim();
        let lowered = input.to_lowercase();

        if is_quit(&lowered) {
            return Ok(Reply::Quit);
        }
        if lowered == "win" {
            return Ok(Reply::Value(Pattern::perfect(session.length())));
        }

        match session.parse_feedback(input) {
            Ok(pattern) => return Ok(Reply::Value(pattern)),
            Err(err) => console.write_line(&format!("Invalid feedback: {err}"))?,
        }
    }
}

fn quit<C>(console: &mut C, session: &Session<'_>) -> Result<HumanOutcome, SolveError>
where
    C: Console + ?Sized,
{
    console.write_line(&format!(
        "Stopped after {} turns with {} candidates left.",
        session.turn(),
        session.candidates().len()
    ))?;
    Ok(HumanOutcome::Quit {
        turns: session.turn(),
    })
}
