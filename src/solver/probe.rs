//! Probe-word fallback for late-game plateaus
//!
//! When the board is nearly solved (3-4 correct positions) but several
//! candidates still disagree on the open slots, entropy ranking over the
//! shrunken candidate set tends to shave off one candidate per turn. A probe
//! word breaks the plateau: it is drawn from the *full* word list, because an
//! effective probe need not be a possible solution, and is scored by how many
//! still-ambiguous letters it resolves at once.

use crate::core::{Feedback, Pattern, Word, letter_frequency};
use rustc_hash::FxHashSet;

/// A probe candidate and its coverage score
#[derive(Debug, Clone)]
pub struct ProbeInfo {
    /// The auxiliary word to guess
    pub word: Word,
    /// How many ambiguous letters (or distinct patterns) it resolves
    pub coverage: usize,
}

/// Coverage a probe can never exceed: one resolved letter per position
const MAX_COVERAGE: usize = 5;

/// Per-letter budget of still-ambiguous letters
///
/// Sums, across the remaining candidates, each candidate's letters at the
/// positions the latest feedback marked `Absent`. Letters tallied more than
/// once are shared across candidates and dropped from the budget; a probe
/// earns credit only for the genuinely distinguishing ones.
#[must_use]
pub fn ambiguity_budget(candidates: &[Word], last_feedback: &Pattern) -> [usize; 26] {
    let mut budget = [0usize; 26];
    for candidate in candidates {
        let open = letter_frequency(candidate, last_feedback, Feedback::Absent);
        for (slot, &count) in budget.iter_mut().zip(open.iter()) {
            *slot += count as usize;
        }
    }

    for slot in &mut budget {
        if *slot > 1 {
            *slot = 0;
        }
    }
    budget
}

/// Scan the full word list for the best probe
///
/// With 3 correct positions the score is the number of distinct feedback
/// patterns the probe induces over the candidates; with 4 it is the cheaper
/// budget-overlap proxy. The scan keeps the first strictly-better scorer and
/// stops early once a probe reaches the maximum coverage.
#[must_use]
pub fn find_probe_word(
    all_words: &[Word],
    candidates: &[Word],
    budget: &[usize; 26],
    correct_count: usize,
) -> Option<ProbeInfo> {
    let mut best: Option<ProbeInfo> = None;

    for word in all_words {
        let coverage = if correct_count == 3 {
            score_probe_distinct_patterns(word, candidates)
        } else {
            score_probe_budget_overlap(word, budget)
        };

        if coverage > best.as_ref().map_or(0, |b| b.coverage) {
            let done = coverage == MAX_COVERAGE;
            best = Some(ProbeInfo {
                word: word.clone(),
                coverage,
            });
            if done {
                break;
            }
        }
    }

    best
}

/// Distinct feedback patterns `probe` induces over the candidates
///
/// More distinct patterns means the real feedback will discriminate between
/// more of the remaining candidates.
fn score_probe_distinct_patterns(probe: &Word, candidates: &[Word]) -> usize {
    let mut patterns: FxHashSet<Pattern> = FxHashSet::default();
    for candidate in candidates {
        patterns.insert(Pattern::of(probe, candidate));
    }
    patterns.len()
}

/// Overlap between the probe's letters and the ambiguity budget
///
/// Credits `min(occurrences in probe, budget)` per letter. Once only a single
/// slot is truly unknown this proxy is as good as pattern counting and far
/// cheaper.
fn score_probe_budget_overlap(probe: &Word, budget: &[usize; 26]) -> usize {
    let mut used = [0usize; 26];
    for &letter in probe.letters() {
        used[(letter - b'a') as usize] += 1;
    }

    used.iter()
        .zip(budget.iter())
        .map(|(&have, &want)| have.min(want))
        .sum()
}
