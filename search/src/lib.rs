//! Statecraft Search: one traversal engine over implicit state-space graphs.
//!
//! This crate knows nothing about any particular puzzle. Worlds plug in
//! through [`SearchWorld`] (start state, goal test, expansion rule) and, for
//! the greedy strategy, [`FrontierScorer`].
//!
//! # Crate dependency graph
//!
//! ```text
//! statecraft_search  ←  statecraft_harness
//! (engine, frontier)    (worlds, runner, digests)
//! ```
//!
//! # Key types
//!
//! - [`Frontier`]: stack, queue or greedy linear-scan discipline
//! - [`VisitedMap`]: closed set and backpointer store
//! - [`SearchPolicy`]: search budgets
//! - [`SearchReport`]: counters and [`TerminationReason`] for one invocation
//! - [`search()`] / [`enumerate_goals()`]: the two traversal entry points

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod scorer;
pub mod search;
pub mod visited;

pub use contract::SearchWorld;
pub use error::SearchError;
pub use frontier::{Frontier, Strategy};
pub use graph::{SearchReport, TerminationReason};
pub use node::FrontierEntry;
pub use policy::SearchPolicy;
pub use scorer::FrontierScorer;
pub use search::{enumerate_goals, search, Enumeration, SearchResult};
pub use visited::VisitedMap;
