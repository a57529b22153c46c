//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Search budgets.
///
/// The puzzle worlds are finite, so the defaults are never reached in
/// practice; they turn a pathological world (or a map with many cycles)
/// into an explicit `ExpansionBudgetExceeded` instead of a hang.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPolicy {
    /// Hard cap on frontier pops that reach the visited check.
    pub max_expansions: u64,
    /// Hard cap on the number of entries waiting in the frontier.
    pub max_frontier_size: u64,
}

impl SearchPolicy {
    /// Validate that every budget is usable.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_frontier_size == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_frontier_size must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Parse a policy from JSON. Missing fields take their default value.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the text is not a JSON
    /// policy object or the parsed policy fails [`SearchPolicy::validate`].
    pub fn from_json(text: &str) -> Result<Self, SearchError> {
        let policy: Self =
            serde_json::from_str(text).map_err(|e| SearchError::InvalidPolicy {
                detail: format!("malformed policy JSON: {e}"),
            })?;
        policy.validate()?;
        Ok(policy)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: 100_000,
            max_frontier_size: 100_000,
        }
    }
}
