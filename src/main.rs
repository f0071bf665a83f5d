//! Entropy Wordle - CLI
//!
//! Plays a word-guessing puzzle by always guessing the word with the most
//! expected information, either against a hidden target or alongside a human.

use anyhow::{Context, Result};
use clap::Parser;
use entropy_wordle::{
    commands::{run_auto, run_interactive},
    interactive::{HumanConfig, HumanMode, HumanOutcome},
    output::print_failure,
    solver::AutoConfig,
    wordlists::{Vocabulary, VocabularyOptions, loader::load_vocabulary},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "entropy_wordle",
    about = "Word-guessing puzzle solver that maximizes expected information gain",
    version,
    author
)]
struct Cli {
    /// Word length (3 to 15)
    #[arg(short, long, default_value_t = 5)]
    length: usize,

    /// Hidden target for simulated play; random when omitted
    #[arg(short, long)]
    target: Option<String>,

    /// Play alongside a human: the solver proposes, you type the feedback
    #[arg(short, long)]
    interactive: bool,

    /// Type every guess yourself and see the ranked suggestions
    #[arg(short, long)]
    manual_guess: bool,

    /// Word list file, one word per line; defaults to the bundled list
    #[arg(short, long)]
    wordlist: Option<PathBuf>,

    /// Keep at most this many words of each length
    #[arg(long)]
    max_per_length: Option<usize>,

    /// Number of ranked suggestions shown per turn in human-driven play
    #[arg(short, long, default_value_t = 100)]
    suggestions: usize,

    /// Seed for picking a random target
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final result
    #[arg(short, long)]
    quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load(cli: &Cli) -> Result<Vocabulary> {
    let options = VocabularyOptions {
        max_per_length: cli.max_per_length,
    };

    match &cli.wordlist {
        Some(path) => load_vocabulary(path, options)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Ok(Vocabulary::embedded(options)),
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocabulary = load(&cli)?;

    if cli.interactive || cli.manual_guess {
        let config = HumanConfig {
            length: cli.length,
            mode: if cli.manual_guess {
                HumanMode::ManualGuess
            } else {
                HumanMode::Assisted
            },
            suggestions: cli.suggestions,
        };

        return Ok(match run_interactive(&vocabulary, &config) {
            Ok(HumanOutcome::Solved { .. }) => ExitCode::SUCCESS,
            Ok(HumanOutcome::Quit { .. }) => ExitCode::from(2),
            Err(err) => {
                print_failure(&err);
                ExitCode::FAILURE
            }
        });
    }

    let config = AutoConfig {
        length: cli.length,
        target: cli.target.clone(),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(match run_auto(&vocabulary, &config, &mut rng, cli.quiet) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            print_failure(&err);
            ExitCode::FAILURE
        }
    })
}
