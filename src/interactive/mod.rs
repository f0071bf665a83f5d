//! Human-driven play over a line-based console

mod app;
mod console;

pub use app::{HumanConfig, HumanMode, HumanOutcome, play_human};
pub use console::{Console, ScriptedConsole, StdConsole};
