//! Human-driven game command

use crate::interactive::{HumanConfig, HumanOutcome, StdConsole, play_human};
use crate::solver::SolveError;
use crate::wordlists::Vocabulary;

/// Play a human-driven game on the terminal
///
/// # Errors
///
/// Returns the session error on contradictory feedback, an unsupported
/// length, or a terminal I/O failure.
pub fn run_interactive(
    vocabulary: &Vocabulary,
    config: &HumanConfig,
) -> Result<HumanOutcome, SolveError> {
    play_human(vocabulary, config, &mut StdConsole)
}
