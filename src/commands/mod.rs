//! Command implementations behind the CLI

mod simulate;
mod solve;

pub use simulate::{SimulationStats, run_simulation};
pub use solve::{GuessStep, SolveResult, solve_word};
