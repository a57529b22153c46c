//! `SearchReport`: how a search invocation went.
//!
//! Every search produces a report, whatever the outcome. Callers branch on
//! [`SearchReport::termination_reason`]; the counters are diagnostic.

use serde::{Deserialize, Serialize};

use crate::frontier::{ScorerViolation, Strategy};

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    /// A goal state was popped.
    GoalReached,
    /// Frontier emptied. For enumeration this is the normal outcome.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// `max_frontier_size` budget was hit.
    FrontierBudgetExceeded,
    /// The greedy scorer returned no pick or an out-of-range pick.
    ScorerContractViolation {
        frontier_len: u64,
        returned: Option<u64>,
    },
}

impl TerminationReason {
    /// Whether the search stopped on a budget rather than on the graph.
    #[must_use]
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded | Self::FrontierBudgetExceeded
        )
    }
}

impl From<ScorerViolation> for TerminationReason {
    fn from(v: ScorerViolation) -> Self {
        Self::ScorerContractViolation {
            frontier_len: v.frontier_len as u64,
            returned: v.returned.map(|i| i as u64),
        }
    }
}

/// Aggregate counters for one search invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub world_id: String,
    pub strategy: Strategy,
    /// Frontier pops that were not duplicates.
    pub expansions: u64,
    /// Popped entries whose state had already been visited.
    pub duplicates_suppressed: u64,
    /// States the world produced across all expansions.
    pub successors_generated: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

impl SearchReport {
    /// Serialize to compact JSON with keys in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
