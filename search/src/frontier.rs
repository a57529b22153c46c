//! Frontier disciplines: stack, queue and greedy linear scan.
//!
//! All three share one `VecDeque` of entries in insertion order. The removal
//! policy is the only thing that differs between depth-first, breadth-first
//! and greedy search.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::node::FrontierEntry;
use crate::scorer::FrontierScorer;

/// Traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Remove the most recently added entry (stack discipline).
    DepthFirst,
    /// Remove the earliest added entry (queue discipline).
    BreadthFirst,
    /// Remove the entry the world's scorer picks from the whole frontier.
    Greedy,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 3] = [Self::DepthFirst, Self::BreadthFirst, Self::Greedy];

    /// Stable snake-case name, as used in reports.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The greedy scorer broke its contract on a non-empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorerViolation {
    /// Frontier size at the time of the call.
    pub frontier_len: usize,
    /// What the scorer returned.
    pub returned: Option<usize>,
}

enum Discipline<'a, S> {
    Lifo,
    Fifo,
    Scan(&'a dyn FrontierScorer<S>),
}

/// Frontier of `(parent, state)` entries awaiting exploration.
pub struct Frontier<'a, S> {
    entries: VecDeque<FrontierEntry<S>>,
    discipline: Discipline<'a, S>,
    high_water: u64,
}

impl<'a, S> Frontier<'a, S> {
    fn with_discipline(discipline: Discipline<'a, S>) -> Self {
        Self {
            entries: VecDeque::new(),
            discipline,
            high_water: 0,
        }
    }

    /// Stack frontier for depth-first search.
    #[must_use]
    pub fn depth_first() -> Self {
        Self::with_discipline(Discipline::Lifo)
    }

    /// Queue frontier for breadth-first search.
    #[must_use]
    pub fn breadth_first() -> Self {
        Self::with_discipline(Discipline::Fifo)
    }

    /// Linear-scan frontier driven by `scorer`.
    #[must_use]
    pub fn greedy(scorer: &'a dyn FrontierScorer<S>) -> Self {
        Self::with_discipline(Discipline::Scan(scorer))
    }

    /// Build the frontier for `strategy`. `scorer` is only consulted by
    /// [`Strategy::Greedy`].
    #[must_use]
    pub fn for_strategy(strategy: Strategy, scorer: &'a dyn FrontierScorer<S>) -> Self {
        match strategy {
            Strategy::DepthFirst => Self::depth_first(),
            Strategy::BreadthFirst => Self::breadth_first(),
            Strategy::Greedy => Self::greedy(scorer),
        }
    }

    /// The strategy this frontier implements.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match self.discipline {
            Discipline::Lifo => Strategy::DepthFirst,
            Discipline::Fifo => Strategy::BreadthFirst,
            Discipline::Scan(_) => Strategy::Greedy,
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: FrontierEntry<S>) {
        self.entries.push_back(entry);
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next entry according to the discipline.
    ///
    /// Returns `Ok(None)` on an empty frontier. The greedy discipline removes
    /// the scorer's pick and keeps the remaining entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerViolation`] if the scorer returns `None` or an
    /// out-of-range index for a non-empty frontier. The frontier is left
    /// untouched in that case.
    pub fn pop(&mut self) -> Result<Option<FrontierEntry<S>>, ScorerViolation> {
        match self.discipline {
            Discipline::Lifo => Ok(self.entries.pop_back()),
            Discipline::Fifo => Ok(self.entries.pop_front()),
            Discipline::Scan(scorer) => {
                if self.entries.is_empty() {
                    return Ok(None);
                }
                let frontier_len = self.entries.len();
                let pick = scorer.best_candidate(self.entries.make_contiguous());
                match pick {
                    Some(index) if index < frontier_len => Ok(self.entries.remove(index)),
                    returned => Err(ScorerViolation {
                        frontier_len,
                        returned,
                    }),
                }
            }
        }
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry<S>> {
        self.entries.iter()
    }
}
