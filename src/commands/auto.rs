//! Simulated game command
//!
//! Plays against a hidden target, printing each turn and a progress bar
//! while the guesses are ranked.

use crate::output::formatters::ranking_style;
use crate::output::{print_auto_header, print_auto_report, print_turn};
use crate::solver::{
    AutoConfig, AutoReport, Session, SolveError, TurnObserver, TurnRecord, play_auto,
};
use crate::wordlists::Vocabulary;
use indicatif::ProgressBar;
use rand::Rng;

/// Prints turns to stdout and ranking progress to stderr
#[derive(Debug)]
pub struct CliObserver {
    length: usize,
    quiet: bool,
}

impl CliObserver {
    #[must_use]
    pub const fn new(length: usize, quiet: bool) -> Self {
        Self { length, quiet }
    }
}

impl TurnObserver for CliObserver {
    fn ranking_progress(&mut self, turn: usize, pool_size: usize) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        if turn == 1 {
            print_auto_header(self.length, pool_size);
        }

        let pb = ProgressBar::new(pool_size as u64);
        pb.set_style(ranking_style());
        pb.set_message(format!("turn {turn}: ranking guesses"));
        pb
    }

    fn on_turn(&mut self, record: &TurnRecord, session: &Session<'_>) {
        if !self.quiet {
            print_turn(record, session.initial_count());
        }
    }
}

/// Run a simulated game and print how it went
///
/// # Errors
///
/// Returns the session error when the game could not start or the
/// candidate set emptied.
pub fn run_auto<R>(
    vocabulary: &Vocabulary,
    config: &AutoConfig,
    rng: &mut R,
    quiet: bool,
) -> Result<AutoReport, SolveError>
where
    R: Rng + ?Sized,
{
    let mut observer = CliObserver::new(config.length, quiet);
    let report = play_auto(vocabulary, config, rng, &mut observer)?;
    print_auto_report(&report);
    Ok(report)
}
