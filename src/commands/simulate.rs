//! Batch simulation over randomly drawn secrets
//!
//! Games are independent, so they run in parallel; the secrets are drawn
//! up front from a single RNG so a fixed seed reproduces the same batch
//! regardless of thread scheduling.

use crate::core::{SolverError, Word};
use crate::game::GameSession;
use crate::solver::WordleSolver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Aggregate results of a simulation batch
pub struct SimulationStats {
    pub games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean attempts per game; failures count as one over the budget
    pub average_attempts: f64,
    /// `distribution[n - 1]` games were solved in exactly `n` attempts
    pub distribution: Vec<usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationStats {
    #[must_use]
    pub fn solve_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.solved as f64 / self.games as f64 * 100.0
    }
}

/// Play `games` solver-vs-session games against random secrets from `words`
///
/// A `seed` makes the batch reproducible; without one the secrets come from
/// OS entropy.
///
/// # Errors
/// [`SolverError::EmptyWordList`] if `words` is empty.
pub fn run_simulation(
    words: &[Word],
    games: usize,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<SimulationStats, SolverError> {
    if words.is_empty() {
        return Err(SolverError::EmptyWordList);
    }

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let secrets: Vec<Word> = (0..games)
        .filter_map(|_| words.choose(&mut rng).cloned())
        .collect();

    let bar = ProgressBar::new(games as u64);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-"),
    );

    let start = Instant::now();
    let outcomes: Vec<Option<usize>> = secrets
        .par_iter()
        .map(|secret| {
            let attempts = play_game(words, secret, max_attempts);
            bar.inc(1);
            attempts
        })
        .collect();
    let duration = start.elapsed();
    bar.finish_and_clear();

    let mut distribution = vec![0usize; max_attempts];
    let mut solved = 0;
    let mut failed = 0;
    let mut total_attempts = 0;
    for outcome in outcomes {
        match outcome {
            Some(n) => {
                solved += 1;
                total_attempts += n;
                distribution[n - 1] += 1;
            }
            None => {
                failed += 1;
                total_attempts += max_attempts + 1;
            }
        }
    }

    let games_per_second = if duration.as_secs_f64() > 0.0 {
        games as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(SimulationStats {
        games,
        solved,
        failed,
        average_attempts: if games == 0 {
            0.0
        } else {
            total_attempts as f64 / games as f64
        },
        distribution,
        duration,
        games_per_second,
    })
}

/// Attempts taken to solve, or `None` if the game was lost
fn play_game(words: &[Word], secret: &Word, max_attempts: usize) -> Option<usize> {
    let mut solver = WordleSolver::new(words, max_attempts).ok()?;
    let mut session = GameSession::new(secret.clone(), max_attempts);

    while !session.is_over() {
        let guess = solver.next_guess().ok()?;
        let feedback = session.guess(&guess);
        if feedback.is_all_correct() {
            return Some(session.attempts());
        }
        solver.observe(&guess, feedback).ok()?;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{WORD_BANK, loader::words_from_slice};

    #[test]
    fn empty_word_list_is_rejected() {
        assert!(matches!(
            run_simulation(&[], 10, 6, Some(1)),
            Err(SolverError::EmptyWordList)
        ));
    }

    #[test]
    fn stats_account_for_every_game() {
        let words = words_from_slice(&WORD_BANK[..80]);
        let stats = run_simulation(&words, 20, 6, Some(42)).unwrap();

        assert_eq!(stats.games, 20);
        assert_eq!(stats.solved + stats.failed, 20);
        assert_eq!(stats.distribution.iter().sum::<usize>(), stats.solved);
        assert_eq!(stats.distribution.len(), 6);
        assert!(stats.average_attempts >= 1.0);
        assert!(stats.average_attempts <= 7.0);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let words = words_from_slice(&WORD_BANK[..80]);
        let a = run_simulation(&words, 15, 6, Some(7)).unwrap();
        let b = run_simulation(&words, 15, 6, Some(7)).unwrap();

        assert_eq!(a.solved, b.solved);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn zero_games_yields_empty_stats() {
        let words = words_from_slice(&WORD_BANK[..10]);
        let stats = run_simulation(&words, 0, 6, Some(1)).unwrap();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.solved, 0);
        assert!((stats.average_attempts - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lost_game_returns_none() {
        // With only two attempts and a deep bank most games are lost
        let words = words_from_slice(&["apple", "apply", "ample", "amble", "angle"]);
        let secret = Word::new("apple").unwrap();
        // The opener spends one attempt and cannot separate five words with
        // one more guess in every case; a loss must come back as None
        let outcome = play_game(&words, &secret, 1);
        assert_eq!(outcome, None);
    }
}
