//! Five-letter word representation
//!
//! A `Word` is validated at construction and normalized to lowercase, so the
//! solver core never re-checks lengths or case.

use super::SolverError;
use std::fmt;

/// Every word, guess, and feedback pattern has exactly this many positions.
pub const WORD_LENGTH: usize = 5;

/// A validated, lowercase five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new `Word`, normalizing to lowercase
    ///
    /// # Errors
    /// - [`SolverError::EmptyGuess`] for an empty string
    /// - [`SolverError::LengthMismatch`] if the length is not 5
    /// - [`SolverError::InvalidCharacters`] for anything outside ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_probe::core::Word;
    ///
    /// let word = Word::new("Slate").unwrap();
    /// assert_eq!(word.text(), "slate");
    /// assert!(Word::new("toolong").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, SolverError> {
        if text.is_empty() {
            return Err(SolverError::EmptyGuess);
        }
        if text.len() != WORD_LENGTH {
            return Err(SolverError::LengthMismatch {
                text: text.to_string(),
                actual: text.len(),
            });
        }
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SolverError::InvalidCharacters {
                text: text.to_string(),
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.bytes()) {
            *slot = ch.to_ascii_lowercase();
        }

        Ok(Self { letters })
    }

    /// The word as a byte array of lowercase letters
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// The letter at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// How many times `letter` occurs in this word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }

    /// The word as an owned string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
