//! Core domain types: words, feedback patterns, and errors

mod error;
mod feedback;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, Pattern, letter_frequency};
pub use word::{WORD_LENGTH, Word};
