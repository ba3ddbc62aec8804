//! Solver driver
//!
//! Owns the per-game mutable state (constraints, candidate set, feedback
//! history, attempt counter) and orchestrates one turn: entropy ranking
//! picks the guess, the probe heuristic may override it on a late-game
//! plateau, and each observed feedback tightens the constraints and prunes
//! the candidates.

use super::constraints::ConstraintState;
use super::entropy::rank_candidates;
use super::filter::filter_candidates;
use super::probe::{ambiguity_budget, find_probe_word};
use crate::core::{Pattern, SolverError, Word};

/// Fixed opening word, returned without ranking: the first guess faces the
/// same unconstrained candidate set every game, so its entropy is
/// precomputed knowledge, not per-game work.
pub const OPENING_GUESS: &str = "slate";

/// Probe may only replace guesses while this many attempts are completed
const PROBE_ATTEMPT_LIMIT: usize = 4;

/// Probe only fires while more than this many candidates remain
const PROBE_MIN_CANDIDATES: usize = 2;

/// Minimum coverage for a probe to displace the entropy pick
const PROBE_COVERAGE_FLOOR_4: usize = 2;
const PROBE_COVERAGE_FLOOR_3: usize = 3;

/// Where the solver stands in its game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Accepting feedback and producing guesses
    Guessing,
    /// All-correct feedback observed
    Won,
    /// Attempt budget exhausted
    Exhausted,
    /// Feedback contradicted the word list; terminal for this game
    Inconsistent,
}

/// Entropy-driven Wordle solver with a probe-word fallback
///
/// Constructed from a word list and an attempt budget; one instance owns one
/// game's state exclusively. All computation is synchronous and in-memory.
///
/// # Examples
/// ```
/// use wordle_probe::core::{Pattern, Word};
/// use wordle_probe::solver::WordleSolver;
///
/// let words: Vec<Word> = ["slate", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let secret = Word::new("grate").unwrap();
///
/// let mut solver = WordleSolver::new(&words, 6).unwrap();
/// let guess = solver.next_guess().unwrap();
/// assert_eq!(guess.text(), "slate");
///
/// let feedback = Pattern::of(&guess, &secret);
/// solver.observe(&guess, feedback).unwrap();
/// ```
pub struct WordleSolver {
    all_words: Vec<Word>,
    candidates: Vec<Word>,
    constraints: ConstraintState,
    history: Vec<Pattern>,
    attempts: usize,
    max_attempts: usize,
    state: SolverState,
}

impl WordleSolver {
    /// Create a solver over `word_list` with an attempt budget
    ///
    /// The candidate set starts as the full list, in list order.
    ///
    /// # Errors
    /// [`SolverError::EmptyWordList`] if the list has no entries.
    pub fn new(word_list: &[Word], max_attempts: usize) -> Result<Self, SolverError> {
        if word_list.is_empty() {
            return Err(SolverError::EmptyWordList);
        }
        Ok(Self {
            all_words: word_list.to_vec(),
            candidates: word_list.to_vec(),
            constraints: ConstraintState::new(),
            history: Vec::new(),
            attempts: 0,
            max_attempts,
            state: SolverState::Guessing,
        })
    }

    /// Produce the next guess and consume one attempt
    ///
    /// # Errors
    /// - [`SolverError::NoGuessesLeft`] once the attempt budget is spent, the
    ///   game is won, or the solver was exhausted; the caller must stop.
    /// - [`SolverError::NoCandidatesRemain`] if a previous turn proved the
    ///   evidence inconsistent; terminal until a new solver is built.
    pub fn next_guess(&mut self) -> Result<Word, SolverError> {
        match self.state {
            SolverState::Inconsistent => return Err(SolverError::NoCandidatesRemain),
            SolverState::Won | SolverState::Exhausted => {
                return Err(SolverError::NoGuessesLeft {
                    max_attempts: self.max_attempts,
                });
            }
            SolverState::Guessing => {}
        }
        if self.attempts >= self.max_attempts {
            self.state = SolverState::Exhausted;
            return Err(SolverError::NoGuessesLeft {
                max_attempts: self.max_attempts,
            });
        }

        if self.attempts == 0 {
            self.attempts += 1;
            return Word::new(OPENING_GUESS);
        }

        let mut guess = match rank_candidates(&self.candidates) {
            Some((best, _)) => best.clone(),
            None => return Err(SolverError::NoCandidatesRemain),
        };

        if let Some(probe) = self.plateau_probe() {
            guess = probe;
        }

        self.attempts += 1;
        Ok(guess)
    }

    /// Report the feedback the game produced for `guess`
    ///
    /// Appends to the feedback history, tightens constraints, and prunes the
    /// candidate set. All-correct feedback ends the game as won without
    /// filtering.
    ///
    /// # Errors
    /// [`SolverError::NoCandidatesRemain`] if the evidence eliminates every
    /// candidate. The candidate set is left untouched and the solver is
    /// terminally inconsistent.
    pub fn observe(&mut self, guess: &Word, feedback: Pattern) -> Result<(), SolverError> {
        if self.state == SolverState::Inconsistent {
            return Err(SolverError::NoCandidatesRemain);
        }

        self.history.push(feedback);

        if feedback.is_all_correct() {
            self.state = SolverState::Won;
            return Ok(());
        }

        self.constraints.observe(guess, &feedback);

        match filter_candidates(&self.candidates, guess, &feedback, &self.constraints) {
            Ok(filtered) => {
                self.candidates = filtered;
                Ok(())
            }
            Err(err) => {
                self.state = SolverState::Inconsistent;
                Err(err)
            }
        }
    }

    /// Try the probe fallback; `Some` replaces the entropy pick
    ///
    /// Fires when 4 positions are correct, or when the last two feedback
    /// patterns are identical (a stall) with exactly 3 correct, in both
    /// cases only early in the game and with more than two candidates left.
    fn plateau_probe(&self) -> Option<Word> {
        let last = self.history.last()?;
        let correct = last.count_correct();

        let stalled = self.history.len() >= 2
            && self.history[self.history.len() - 2] == *last;

        let window = self.attempts - 1 < PROBE_ATTEMPT_LIMIT
            && self.candidates.len() > PROBE_MIN_CANDIDATES;

        let triggered =
            (correct == 4 && window) || (stalled && correct == 3 && window);
        if !triggered {
            return None;
        }

        let budget = ambiguity_budget(&self.candidates, last);
        let probe = find_probe_word(&self.all_words, &self.candidates, &budget, correct)?;

        let floor = if correct == 4 {
            PROBE_COVERAGE_FLOOR_4
        } else {
            PROBE_COVERAGE_FLOOR_3
        };
        (probe.coverage >= floor).then_some(probe.word)
    }

    /// Words still consistent with every observed feedback
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Feedback patterns observed so far, in attempt order
    #[must_use]
    pub fn history(&self) -> &[Pattern] {
        &self.history
    }

    /// Attempts consumed so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// The attempt budget this solver was built with
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Current position in the game state machine
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Accumulated letter constraints
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }
}
