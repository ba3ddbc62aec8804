//! Solver core: constraint tracking, candidate filtering, entropy ranking,
//! the probe fallback, and the driving state machine

mod constraints;
mod engine;
pub mod entropy;
mod filter;
mod probe;

pub use constraints::ConstraintState;
pub use engine::{OPENING_GUESS, SolverState, WordleSolver};
pub use filter::filter_candidates;
pub use probe::{ProbeInfo, ambiguity_budget, find_probe_word};
