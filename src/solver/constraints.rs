//! Accumulated letter constraints derived from feedback
//!
//! Three independent pieces of evidence per turn:
//! - letters confirmed absent (with the duplicate-letter exception),
//! - per-letter upper bounds on occurrence counts, fixed the first time a
//!   bound is discovered,
//! - per-letter lower bounds from the latest guess's `Present` marks only.
//!   These are recomputed every turn rather than accumulated: a `Present`
//!   can be upgraded to `Correct` by a later guess and must not linger as a
//!   stale floor.

use crate::core::{Feedback, Pattern, WORD_LENGTH, Word, letter_frequency};
use rustc_hash::FxHashSet;

const ALPHABET: usize = 26;

/// Letter constraints accumulated over a game
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    absent: FxHashSet<u8>,
    max_count: [Option<u8>; ALPHABET],
    min_present: [u8; ALPHABET],
}

impl ConstraintState {
    /// Fresh state with no evidence
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one turn of evidence into the state
    pub fn observe(&mut self, guess: &Word, feedback: &Pattern) {
        self.record_absent_letters(guess, feedback);
        self.record_max_counts(guess, feedback);
        self.min_present = letter_frequency(guess, feedback, Feedback::Present);

        #[cfg(debug_assertions)]
        for i in 0..ALPHABET {
            if let Some(max) = self.max_count[i] {
                debug_assert!(
                    max >= self.min_present[i],
                    "max-count bound below present lower bound for '{}'",
                    (b'a' + i as u8) as char
                );
            }
        }
    }

    /// A letter marked `Absent` is genuinely absent only if no other position
    /// of the same guess marks it `Correct` or `Present`; otherwise the guess
    /// merely over-used a letter that does occur.
    fn record_absent_letters(&mut self, guess: &Word, feedback: &Pattern) {
        for i in 0..WORD_LENGTH {
            if feedback.symbol_at(i) != Feedback::Absent {
                continue;
            }
            let letter = guess.letter_at(i);
            let seen_elsewhere = (0..WORD_LENGTH).any(|j| {
                j != i
                    && guess.letter_at(j) == letter
                    && feedback.symbol_at(j) != Feedback::Absent
            });
            if !seen_elsewhere {
                self.absent.insert(letter);
            }
        }
    }

    /// An `Absent` mark on a letter that also has non-`Absent` marks in the
    /// same guess pins that letter's count: the number of non-`Absent`
    /// occurrences is an upper bound. Only the first discovered bound is
    /// kept; later guesses must not loosen it.
    fn record_max_counts(&mut self, guess: &Word, feedback: &Pattern) {
        for i in 0..WORD_LENGTH {
            if feedback.symbol_at(i) != Feedback::Absent {
                continue;
            }
            let letter = guess.letter_at(i);
            let bound = (0..WORD_LENGTH)
                .filter(|&j| {
                    guess.letter_at(j) == letter
                        && feedback.symbol_at(j) != Feedback::Absent
                })
                .count() as u8;
            let slot = &mut self.max_count[(letter - b'a') as usize];
            if slot.is_none() {
                *slot = Some(bound);
            }
        }
    }

    /// Is `letter` confirmed to not occur in the solution?
    #[inline]
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// Established upper bound on `letter`'s occurrence count, if any
    #[inline]
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_count[(letter - b'a') as usize]
    }

    /// Lower bound on `letter`'s occurrences, from the latest guess only
    #[inline]
    #[must_use]
    pub fn min_present(&self, letter: u8) -> u8 {
        self.min_present[(letter - b'a') as usize]
    }

    /// Letters with a positive present lower bound, as (letter, bound) pairs
    pub fn present_lower_bounds(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.min_present
            .iter()
            .enumerate()
            .filter(|&(_, &need)| need > 0)
            .map(|(i, &need)| (b'a' + i as u8, need))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pattern(code: &str) -> Pattern {
        Pattern::from_code(code).unwrap()
    }

    #[test]
    fn absent_letters_detected() {
        let mut state = ConstraintState::new();
        // apple vs a solution containing only E of these letters
        state.observe(&word("apple"), &pattern("00001"));
        assert!(state.is_absent(b'a'));
        assert!(state.is_absent(b'p'));
        assert!(state.is_absent(b'l'));
        assert!(!state.is_absent(b'e'));
    }

    #[test]
    fn absent_skips_letters_correct_elsewhere() {
        // P is Correct at position 1, so the Absent P at position 2 only
        // bounds the count, it does not blacklist the letter.
        let mut state = ConstraintState::new();
        state.observe(&word("apple"), &pattern("02000"));
        assert!(!state.is_absent(b'p'));
        assert!(state.is_absent(b'a'));
        assert!(state.is_absent(b'l'));
        assert!(state.is_absent(b'e'));
    }

    #[test]
    fn absent_skips_letters_present_elsewhere() {
        let mut state = ConstraintState::new();
        state.observe(&word("speed"), &pattern("10100"));
        // E at position 3 is Absent but E at position 2 is Present
        assert!(!state.is_absent(b'e'));
        assert!(state.is_absent(b'p'));
        assert!(state.is_absent(b'd'));
    }

    #[test]
    fn max_count_from_partial_duplicates() {
        // salsa with S correct at 3 and Absent at 0: max one S.
        // A correct at 1 and Absent at 4: max one A. The fully-Absent L
        // pins to zero; only unguessed letters stay unbounded.
        let mut state = ConstraintState::new();
        state.observe(&word("salsa"), &pattern("02020"));
        assert_eq!(state.max_count(b's'), Some(1));
        assert_eq!(state.max_count(b'a'), Some(1));
        assert_eq!(state.max_count(b'l'), Some(0));
        assert_eq!(state.max_count(b'z'), None);
    }

    #[test]
    fn max_count_zero_for_fully_absent_letter() {
        let mut state = ConstraintState::new();
        state.observe(&word("salsa"), &pattern("00200"));
        assert_eq!(state.max_count(b's'), Some(0));
        assert_eq!(state.max_count(b'a'), Some(0));
    }

    #[test]
    fn max_count_is_not_loosened_by_later_guesses() {
        let mut state = ConstraintState::new();
        state.observe(&word("salsa"), &pattern("02020"));
        assert_eq!(state.max_count(b's'), Some(1));
        // A later guess with two non-Absent S marks must not raise the bound
        state.observe(&word("sassy"), &pattern("21200"));
        assert_eq!(state.max_count(b's'), Some(1));
    }

    #[test]
    fn min_present_recomputed_from_latest_guess() {
        let mut state = ConstraintState::new();
        state.observe(&word("speed"), &pattern("10110"));
        assert_eq!(state.min_present(b'e'), 2);
        assert_eq!(state.min_present(b's'), 1);

        // Next turn the S is Correct, not Present: the floor resets
        state.observe(&word("spare"), &pattern("20001"));
        assert_eq!(state.min_present(b's'), 0);
        assert_eq!(state.min_present(b'e'), 1);
    }

    #[test]
    fn present_lower_bounds_enumerates_positive_entries() {
        let mut state = ConstraintState::new();
        state.observe(&word("speed"), &pattern("10110"));
        let bounds: Vec<(u8, u8)> = state.present_lower_bounds().collect();
        assert!(bounds.contains(&(b's', 1)));
        assert!(bounds.contains(&(b'e', 2)));
        assert_eq!(bounds.len(), 2);
    }
}
