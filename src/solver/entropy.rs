//! Shannon entropy ranking
//!
//! Scores a hypothetical guess by the entropy of the feedback-pattern
//! distribution it induces over the remaining candidates. The argmax scan is
//! deliberately sequential: ties resolve to whichever candidate is
//! enumerated first, so the candidate set's insertion order is part of the
//! solver's observable behavior.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Group `candidates` by the pattern each would produce against `guess`
#[must_use]
pub fn pattern_distribution(guess: &Word, candidates: &[Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();
    for candidate in candidates {
        let pattern = Pattern::of(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }
    counts
}

/// Shannon entropy of a pattern distribution, in bits
///
/// H = -Σ p·log₂(p) over p = count / total. Zero for an empty or
/// single-pattern distribution, maximized when patterns are uniform.
#[must_use]
pub fn shannon_entropy(pattern_counts: &FxHashMap<Pattern, usize>) -> f64 {
    let total = pattern_counts.values().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of guessing `guess` against `candidates`
///
/// # Examples
/// ```
/// use wordle_probe::core::Word;
/// use wordle_probe::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let bits = calculate_entropy(&guess, &candidates);
/// assert!((bits - 1.0).abs() < 1e-9); // a clean two-way split
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&pattern_distribution(guess, candidates))
}

/// Rank every candidate as a hypothetical guess and return the argmax
///
/// Returns the winning word and its entropy, or `None` for an empty
/// candidate set. Strictly-greater comparison keeps the first of any tied
/// group, preserving enumeration order for reproducibility.
#[must_use]
pub fn rank_candidates(candidates: &[Word]) -> Option<(&Word, f64)> {
    let mut best: Option<(&Word, f64)> = None;
    for candidate in candidates {
        let bits = calculate_entropy(candidate, candidates);
        match best {
            Some((_, top)) if bits <= top => {}
            _ => best = Some((candidate, bits)),
        }
    }
    best
}
