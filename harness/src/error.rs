//! Typed failures surfaced to the driving caller.
//!
//! Nothing here is fatal: every variant is a structured result the caller
//! can display before letting the operator retry with other parameters.

use statecraft_search::{SearchError, Strategy};
use thiserror::Error;

/// Error from constructing a world or running it through the runner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The search ran to completion without reaching the goal.
    #[error("no solution found in {world_id} using {strategy}")]
    NoSolution { world_id: String, strategy: Strategy },

    /// A search budget ran out before the graph was exhausted.
    #[error("search exhausted in {world_id} using {strategy} after {expansions} expansions")]
    SearchExhausted {
        world_id: String,
        strategy: Strategy,
        expansions: u64,
    },

    /// The world's greedy scorer returned an unusable pick.
    #[error("greedy scorer for {world_id} returned an invalid frontier index")]
    ScorerContractViolation { world_id: String },

    /// World construction parameters were rejected.
    #[error("invalid parameters: {detail}")]
    InvalidParameters { detail: String },

    /// A map label does not name any known location.
    #[error("unknown location: {label:?}")]
    UnknownLocation { label: String },

    /// Pre-flight search failure (e.g. invalid policy).
    #[error(transparent)]
    Search(#[from] SearchError),

    /// Canonical serialization of a solution failed.
    #[error("solution digest failed: {detail}")]
    Digest { detail: String },
}
