//! Greedy frontier scoring.

use crate::node::FrontierEntry;

/// Trait for the greedy strategy's selection rule.
///
/// The scorer sees the *entire* current frontier, in insertion order, and
/// returns the index of the entry to remove next. Each call is a full linear
/// scan; there is no priority structure behind it, so tie-breaking is exactly
/// whatever the implementation's comparison order produces.
///
/// Implementations must return `Some(i)` with `i < frontier.len()` for a
/// non-empty frontier. Anything else stops the search with
/// [`crate::graph::TerminationReason::ScorerContractViolation`].
pub trait FrontierScorer<S> {
    /// Pick the most promising entry of a non-empty frontier.
    fn best_candidate(&self, frontier: &[FrontierEntry<S>]) -> Option<usize>;
}

/// Index of the first entry with the strictly largest key.
///
/// Running maximum with strict `>`: on ties the earliest entry wins.
#[must_use]
pub fn first_max_by_key<S, K, F>(frontier: &[FrontierEntry<S>], mut key: F) -> Option<usize>
where
    K: PartialOrd,
    F: FnMut(&S) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (i, entry) in frontier.iter().enumerate() {
        let k = key(&entry.state);
        let better = match &best {
            None => true,
            Some((_, best_k)) => k > *best_k,
        };
        if better {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first entry with the strictly smallest key.
///
/// Running minimum with strict `<`: on ties the earliest entry wins.
#[must_use]
pub fn first_min_by_key<S, K, F>(frontier: &[FrontierEntry<S>], mut key: F) -> Option<usize>
where
    K: PartialOrd,
    F: FnMut(&S) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (i, entry) in frontier.iter().enumerate() {
        let k = key(&entry.state);
        let better = match &best {
            None => true,
            Some((_, best_k)) => k < *best_k,
        };
        if better {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}
