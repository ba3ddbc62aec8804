//! Candidate filtering
//!
//! Prunes the candidate set against the latest (guess, feedback) pair and
//! the accumulated constraint state. The filter is a pure function: it
//! returns the surviving set and the caller commits it, so a failing turn
//! never leaves a partially pruned set behind.

use super::ConstraintState;
use crate::core::{Feedback, Pattern, SolverError, WORD_LENGTH, Word};

/// Filter `candidates` down to the words consistent with the new evidence
///
/// The guessed word itself never survives: repeating a guess carries no new
/// information.
///
/// # Errors
/// [`SolverError::NoCandidatesRemain`] if no word survives, which signals an
/// inconsistency between the feedback source and the word list. Fatal for
/// the current game.
pub fn filter_candidates(
    candidates: &[Word],
    guess: &Word,
    feedback: &Pattern,
    state: &ConstraintState,
) -> Result<Vec<Word>, SolverError> {
    let filtered: Vec<Word> = candidates
        .iter()
        .filter(|&w| w != guess && matches_feedback(w, guess, feedback, state))
        .cloned()
        .collect();

    if filtered.is_empty() {
        return Err(SolverError::NoCandidatesRemain);
    }
    Ok(filtered)
}

/// Could `word` be the solution, given the evidence of this turn?
fn matches_feedback(
    word: &Word,
    guess: &Word,
    feedback: &Pattern,
    state: &ConstraintState,
) -> bool {
    // Positional rules: Correct pins the letter, Present forbids it at that
    // position, and confirmed-absent letters may not appear anywhere.
    for i in 0..WORD_LENGTH {
        let symbol = feedback.symbol_at(i);
        if symbol == Feedback::Correct && word.letter_at(i) != guess.letter_at(i) {
            return false;
        }
        if symbol == Feedback::Present && word.letter_at(i) == guess.letter_at(i) {
            return false;
        }
        if state.is_absent(word.letter_at(i)) {
            return false;
        }
    }

    // Every Present letter of the latest guess must be reused, at positions
    // this feedback has not already pinned Correct.
    for (letter, need) in state.present_lower_bounds() {
        let available = (0..WORD_LENGTH)
            .filter(|&j| {
                feedback.symbol_at(j) != Feedback::Correct && word.letter_at(j) == letter
            })
            .count();
        if available < need as usize {
            return false;
        }
    }

    // Established occurrence-count bounds.
    for i in 0..WORD_LENGTH {
        let letter = word.letter_at(i);
        if let Some(limit) = state.max_count(letter)
            && word.count_of(letter) > limit as usize
        {
            return false;
        }
    }

    true
}
