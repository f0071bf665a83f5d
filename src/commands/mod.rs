//! Command implementations

pub mod auto;
pub mod interactive;

pub use auto::{CliObserver, run_auto};
pub use interactive::run_interactive;
