//! Entropy-driven solving
//!
//! Candidate filtering, entropy ranking, and the session state machine that
//! ties them together into simulated or human-fed games.

mod auto;
pub mod entropy;
mod error;
mod filter;
mod session;

pub use auto::{AutoConfig, AutoReport, TurnObserver, play_auto};
pub use error::{Exhaustion, SolveError};
pub use filter::filter_candidates;
pub use session::{Phase, Session, TurnRecord};
