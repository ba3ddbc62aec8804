//! Feedback symbols and patterns
//!
//! A `Pattern` holds the five per-position classifications of a guess against
//! a solution. The oracle in [`Pattern::of`] implements the exact Wordle
//! feedback rules, including duplicate-letter accounting: a guess with k
//! copies of a letter receives at most as many non-`Absent` marks as that
//! letter's true multiplicity in the solution.

use super::SolverError;
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Per-position classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the solution
    Present,
    /// Letter does not occur (subject to duplicate accounting)
    Absent,
}

/// Feedback for a full guess, positionally aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    symbols: [Feedback; WORD_LENGTH],
}

impl Pattern {
    /// All positions `Correct`
    pub const WIN: Self = Self {
        symbols: [Feedback::Correct; WORD_LENGTH],
    };

    /// Build a pattern from explicit symbols
    #[must_use]
    pub const fn new(symbols: [Feedback; WORD_LENGTH]) -> Self {
        Self { symbols }
    }

    /// Compute the feedback pattern for `guess` against `solution`
    ///
    /// Two passes. The first marks exact matches and tombstones the matched
    /// solution letters. The second scans remaining solution letters left to
    /// right, so ties among duplicated guess letters resolve to the leftmost
    /// unconsumed solution occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_probe::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("steal").unwrap();
    /// let pattern = Pattern::of(&guess, &solution);
    /// assert_eq!(pattern.to_code(), "20200");
    /// ```
    #[must_use]
    pub fn of(guess: &Word, solution: &Word) -> Self {
        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        // 0 marks a consumed solution letter; letters are always a-z.
        let mut remaining = *solution.letters();

        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == solution.letter_at(i) {
                symbols[i] = Feedback::Correct;
                remaining[i] = 0;
            }
        }

        for i in 0..WORD_LENGTH {
            if symbols[i] == Feedback::Correct {
                continue;
            }
            let wanted = guess.letter_at(i);
            if let Some(j) = remaining.iter().position(|&b| b == wanted) {
                symbols[i] = Feedback::Present;
                remaining[j] = 0;
            }
        }

        Self { symbols }
    }

    /// The five symbols in guess order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.symbols
    }

    /// The symbol at a position (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Feedback {
        self.symbols[position]
    }

    /// True if every position is `Correct`
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.symbols.iter().all(|&s| s == Feedback::Correct)
    }

    /// Number of `Correct` positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.symbols
            .iter()
            .filter(|&&s| s == Feedback::Correct)
            .count()
    }

    /// Encode as the interop string form: '2' Correct, '1' Present, '0' Absent
    #[must_use]
    pub fn to_code(&self) -> String {
        self.symbols
            .iter()
            .map(|s| match s {
                Feedback::Correct => '2',
                Feedback::Present => '1',
                Feedback::Absent => '0',
            })
            .collect()
    }

    /// Parse the interop string form produced by [`Pattern::to_code`]
    ///
    /// # Errors
    /// - [`SolverError::EmptyFeedback`] for an empty code
    /// - [`SolverError::LengthMismatch`] if the code is not 5 characters
    /// - [`SolverError::InvalidCharacters`] for digits other than 0, 1, 2
    pub fn from_code(code: &str) -> Result<Self, SolverError> {
        if code.is_empty() {
            return Err(SolverError::EmptyFeedback);
        }
        if code.len() != WORD_LENGTH {
            return Err(SolverError::LengthMismatch {
                text: code.to_string(),
                actual: code.len(),
            });
        }

        let mut symbols = [Feedback::Absent; WORD_LENGTH];
        for (slot, ch) in symbols.iter_mut().zip(code.chars()) {
            *slot = match ch {
                '2' => Feedback::Correct,
                '1' => Feedback::Present,
                '0' => Feedback::Absent,
                _ => {
                    return Err(SolverError::InvalidCharacters {
                        text: code.to_string(),
                    });
                }
            };
        }

        Ok(Self { symbols })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_code())
    }
}

/// Per-letter frequency of `word`, restricted to positions where the
/// feedback carries `symbol`
///
/// Shared by the constraint-state update (counting `Present` letters of the
/// latest guess) and the probe heuristic (counting candidate letters at
/// `Absent` positions).
#[must_use]
pub fn letter_frequency(word: &Word, feedback: &Pattern, symbol: Feedback) -> [u8; 26] {
    let mut frequency = [0u8; 26];
    for i in 0..WORD_LENGTH {
        if feedback.symbol_at(i) == symbol {
            frequency[(word.letter_at(i) - b'a') as usize] += 1;
        }
    }
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn all_correct_for_identical_words() {
        for text in ["crane", "slate", "aaaaa"] {
            let w = word(text);
            let pattern = Pattern::of(&w, &w);
            assert_eq!(pattern, Pattern::WIN);
            assert!(pattern.is_all_correct());
        }
    }

    #[test]
    fn all_absent_for_disjoint_words() {
        let pattern = Pattern::of(&word("abcde"), &word("fghij"));
        assert_eq!(pattern.to_code(), "00000");
        assert_eq!(pattern.count_correct(), 0);
    }

    #[test]
    fn speed_against_steal() {
        // Second E exceeds STEAL's single E and must stay Absent
        let pattern = Pattern::of(&word("speed"), &word("steal"));
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Correct,
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Absent,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn speed_against_erase() {
        let pattern = Pattern::of(&word("speed"), &word("erase"));
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Present,
                Feedback::Absent,
                Feedback::Present,
                Feedback::Present,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn speed_against_crepe() {
        let pattern = Pattern::of(&word("speed"), &word("crepe"));
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Absent,
                Feedback::Present,
                Feedback::Correct,
                Feedback::Present,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_ties_resolve_to_leftmost_occurrence() {
        let pattern = Pattern::of(&word("aabbb"), &word("ababa"));
        assert_eq!(
            pattern.symbols(),
            &[
                Feedback::Correct,
                Feedback::Present,
                Feedback::Present,
                Feedback::Correct,
                Feedback::Absent,
            ]
        );
    }

    #[test]
    fn apple_against_lemon() {
        let pattern = Pattern::of(&word("apple"), &word("lemon"));
        assert_eq!(pattern.to_code(), "00011");
    }

    #[test]
    fn oracle_is_case_insensitive_via_word_normalization() {
        let upper = Pattern::of(&word("SPEED"), &word("STEAL"));
        let lower = Pattern::of(&word("speed"), &word("steal"));
        assert_eq!(upper, lower);
    }

    #[test]
    fn code_roundtrip() {
        let pattern = Pattern::of(&word("speed"), &word("crepe"));
        assert_eq!(Pattern::from_code(&pattern.to_code()).unwrap(), pattern);
    }

    #[test]
    fn from_code_rejects_bad_input() {
        assert_eq!(Pattern::from_code(""), Err(SolverError::EmptyFeedback));
        assert!(matches!(
            Pattern::from_code("210"),
            Err(SolverError::LengthMismatch { actual: 3, .. })
        ));
        assert!(matches!(
            Pattern::from_code("21034"),
            Err(SolverError::InvalidCharacters { .. })
        ));
    }

    #[test]
    fn letter_frequency_counts_only_requested_symbol() {
        let guess = word("speed");
        let pattern = Pattern::of(&guess, &word("erase")); // 10110
        let present = letter_frequency(&guess, &pattern, Feedback::Present);
        assert_eq!(present[(b's' - b'a') as usize], 1);
        assert_eq!(present[(b'e' - b'a') as usize], 2);
        assert_eq!(present[(b'p' - b'a') as usize], 0);

        let absent = letter_frequency(&guess, &pattern, Feedback::Absent);
        assert_eq!(absent[(b'p' - b'a') as usize], 1);
        assert_eq!(absent[(b'd' - b'a') as usize], 1);
        assert_eq!(absent[(b's' - b'a') as usize], 0);
    }
}
