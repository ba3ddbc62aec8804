//! Solve a single target word, recording the full trace

use crate::core::{Pattern, SolverError, Word};
use crate::game::GameSession;
use crate::solver::WordleSolver;
use crate::solver::entropy::calculate_entropy;

/// One attempt of a solve trace
pub struct GuessStep {
    pub word: Word,
    pub feedback: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the chosen guess against the candidates it faced
    pub entropy: f64,
}

/// Outcome of solving one target word
pub struct SolveResult {
    pub target: Word,
    pub steps: Vec<GuessStep>,
    pub solved: bool,
}

/// Run the solver against `target` until it wins or runs out of attempts
///
/// # Errors
/// - [`SolverError::EmptyWordList`] if `words` is empty
/// - [`SolverError::NoCandidatesRemain`] if the target is not reachable from
///   the word list (e.g. the target word is missing from it)
pub fn solve_word(
    target: &Word,
    words: &[Word],
    max_attempts: usize,
) -> Result<SolveResult, SolverError> {
    let mut solver = WordleSolver::new(words, max_attempts)?;
    let mut session = GameSession::new(target.clone(), max_attempts);
    let mut steps = Vec::new();
    let mut solved = false;

    while !session.is_over() {
        let guess = match solver.next_guess() {
            Ok(word) => word,
            Err(SolverError::NoGuessesLeft { .. }) => break,
            Err(err) => return Err(err),
        };

        let candidates_before = solver.candidates().len();
        let entropy = calculate_entropy(&guess, solver.candidates());
        let feedback = session.guess(&guess);

        if feedback.is_all_correct() {
            solver.observe(&guess, feedback)?;
            steps.push(GuessStep {
                word: guess,
                feedback,
                candidates_before,
                candidates_after: solver.candidates().len(),
                entropy,
            });
            solved = true;
            break;
        }

        solver.observe(&guess, feedback)?;
        steps.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after: solver.candidates().len(),
            entropy,
        });
    }

    Ok(SolveResult {
        target: target.clone(),
        steps,
        solved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORD_BANK, loader::words_from_slice};

    #[test]
    fn solves_a_bank_word() {
        let words = words_from_slice(&WORD_BANK[..60]);
        let target = words[10].clone();

        let result = solve_word(&target, &words, 6).unwrap();
        assert!(result.solved, "failed to solve {target}");
        assert!(result.steps.len() <= 6);
        assert!(result.steps.last().unwrap().feedback.is_all_correct());
    }

    #[test]
    fn trace_counts_shrink_monotonically() {
        let words = words_from_slice(&WORD_BANK[..60]);
        let target = words[20].clone();

        let result = solve_word(&target, &words, 6).unwrap();
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.entropy >= 0.0);
        }
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let target = Word::new("crane").unwrap();
        assert!(matches!(
            solve_word(&target, &[], 6),
            Err(SolverError::EmptyWordList)
        ));
    }

    #[test]
    fn unreachable_target_reports_inconsistency() {
        // The target is not in the word list, so the candidate set
        // eventually empties out
        let words: Vec<Word> = ["crate", "grate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let target = Word::new("jumbo").unwrap();

        let result = solve_word(&target, &words, 6);
        assert!(matches!(result, Err(SolverError::NoCandidatesRemain)));
    }
}
