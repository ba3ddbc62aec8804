//! Solver error types
//!
//! All failures are local, synchronous precondition violations. Nothing is
//! retried internally; retry policy belongs to the calling session.

use std::fmt;

/// Errors raised by the solver and its collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A word or feedback code had the wrong length
    LengthMismatch { text: String, actual: usize },
    /// A word contained characters outside ASCII a-z
    InvalidCharacters { text: String },
    /// An empty guess where a word is required
    EmptyGuess,
    /// An empty feedback code where a pattern is required
    EmptyFeedback,
    /// Solver construction received a word list with zero entries
    EmptyWordList,
    /// Filtering would erase every candidate: the feedback contradicts the
    /// word list. Fatal for the current game.
    NoCandidatesRemain,
    /// The attempt budget is exhausted
    NoGuessesLeft { max_attempts: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { text, actual } => {
                write!(f, "'{text}' must be exactly 5 characters, got {actual}")
            }
            Self::InvalidCharacters { text } => {
                write!(f, "'{text}' contains characters other than ASCII letters")
            }
            Self::EmptyGuess => write!(f, "The guess cannot be empty"),
            Self::EmptyFeedback => write!(f, "The feedback cannot be empty"),
            Self::EmptyWordList => write!(f, "The word list is empty"),
            Self::NoCandidatesRemain => {
                write!(f, "No candidates remain: feedback is inconsistent with the word list")
            }
            Self::NoGuessesLeft { max_attempts } => {
                write!(f, "No guesses left: all {max_attempts} attempts used")
            }
        }
    }
}

impl std::error::Error for SolverError {}
