//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhaustion, scorer contract
//! violations) are expressed via [`crate::graph::TerminationReason`] and
//! always come back inside a [`crate::graph::SearchReport`].

use thiserror::Error;

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before the first frontier pop. No report is
/// produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The search policy carries a value the engine cannot run with.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
