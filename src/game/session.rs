//! A single Wordle game: a secret word and an attempt counter
//!
//! The session is the solver's counterpart, not its owner: it produces
//! feedback via the shared oracle and counts attempts. The solver never sees
//! the secret.

use crate::core::{Pattern, SolverError, Word};
use rand::Rng;
use rand::seq::IndexedRandom;

/// One game of Wordle with a fixed secret
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    attempts: usize,
    max_attempts: usize,
}

impl GameSession {
    /// Start a game with a known secret
    #[must_use]
    pub const fn new(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            attempts: 0,
            max_attempts,
        }
    }

    /// Start a game with a secret drawn uniformly from `words`
    ///
    /// # Errors
    /// [`SolverError::EmptyWordList`] if `words` is empty.
    pub fn with_random_secret(words: &[Word], max_attempts: usize) -> Result<Self, SolverError> {
        Self::with_secret_from(words, max_attempts, &mut rand::rng())
    }

    /// Start a game drawing the secret from a caller-supplied RNG
    ///
    /// # Errors
    /// [`SolverError::EmptyWordList`] if `words` is empty.
    pub fn with_secret_from<R: Rng + ?Sized>(
        words: &[Word],
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, SolverError> {
        let secret = words.choose(rng).ok_or(SolverError::EmptyWordList)?;
        Ok(Self::new(secret.clone(), max_attempts))
    }

    /// Evaluate a guess, consuming one attempt
    #[must_use]
    pub fn guess(&mut self, word: &Word) -> Pattern {
        self.attempts += 1;
        Pattern::of(word, &self.secret)
    }

    /// Attempts used so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// The attempt ceiling for this game
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// True once the attempt ceiling is reached
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// The secret word (for reporting after the game ends)
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}
