//! Display functions for solver results

use super::formatters::{candidate_bar, entropy_bar};
use crate::core::{Mark, Pattern, Word};
use crate::solver::{AutoReport, Exhaustion, SolveError, TurnRecord};
use colored::{ColoredString, Colorize};

const BAR_WIDTH: usize = 30;

/// Guess letters colored by their feedback marks
fn colored_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .text()
        .to_uppercase()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| {
            let letter: ColoredString = match mark {
                Mark::Correct => letter.to_string().black().on_green(),
                Mark::Present => letter.to_string().black().on_yellow(),
                Mark::Absent => letter.to_string().white().on_bright_black(),
            };
            letter.bold().to_string()
        })
        .collect()
}

/// Print the banner for a simulated game
pub fn print_auto_header(length: usize, candidates: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving a hidden {}-letter word from {} candidates",
        length.to_string().bright_yellow().bold(),
        candidates
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print one simulated turn as it happens
pub fn print_turn(record: &TurnRecord, initial: usize) {
    println!(
        "\nTurn {}: {}  {}  {}",
        record.turn,
        colored_guess(&record.guess, record.pattern),
        record.pattern,
        record.pattern.to_emoji()
    );
    println!(
        "  Entropy:    [{}] {}",
        entropy_bar(record.entropy, record.candidates_before, BAR_WIDTH).green(),
        format!("{:.3} bits", record.entropy).bright_yellow()
    );
    println!(
        "  Candidates: {} → {}",
        record.candidates_before, record.candidates_after
    );
    if !record.pattern.is_perfect() {
        println!(
            "  {}",
            candidate_bar(record.turn, record.candidates_after, initial, BAR_WIDTH)
        );
    }
}

/// Print the outcome of a solved simulated game
pub fn print_auto_report(report: &AutoReport) {
    println!();
    println!(
        "{}",
        format!(
            "✅ Solved {} in {} turns!",
            report.target.text().to_uppercase(),
            report.turn_count()
        )
        .green()
        .bold()
    );
}

/// Print a failure diagnostic
pub fn print_failure(err: &SolveError) {
    eprintln!("{} {err}", "error:".red().bold());

    let hint = match err {
        SolveError::NoCandidatesRemaining {
            cause: Exhaustion::ContradictoryFeedback,
            ..
        } => Some("check the feedback typed for each guess"),
        SolveError::NoCandidatesRemaining {
            cause: Exhaustion::InvariantViolated,
            ..
        } => Some("the solver lost a known target; please report this"),
        SolveError::InvalidTarget { .. } => {
            Some("the target must be a word list entry of the chosen length")
        }
        SolveError::EmptyVocabulary(_) => Some("try another --length or --wordlist"),
        _ => None,
    };
    if let Some(hint) = hint {
        eprintln!("  {} {hint}", "hint:".cyan());
    }
}
