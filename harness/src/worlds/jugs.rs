//! `WaterJugs`: measure a target volume into a tub using two jugs.
//!
//! Actions: fill a jug from the tap, pour one jug into the other, pour a jug
//! into the tub (never past the target), or empty a jug onto the ground.
//! Goal: the tub holds exactly the target and both jugs are empty.

use std::fmt;

use serde::{Deserialize, Serialize};
use statecraft_search::{FrontierEntry, FrontierScorer, SearchWorld};

use crate::contract::GoalStateWorld;
use crate::error::SolveError;

/// World identifier for [`WaterJugs`].
pub const WATER_JUGS_ID: &str = "water_jugs";

/// Container capacities. All must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JugCapacities {
    pub jug_a: u32,
    pub jug_b: u32,
    pub tub: u32,
}

/// Water levels. `total()` is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JugState {
    pub jug_a: u32,
    pub jug_b: u32,
    pub tub: u32,
}

impl JugState {
    #[must_use]
    pub const fn new(jug_a: u32, jug_b: u32, tub: u32) -> Self {
        Self { jug_a, jug_b, tub }
    }

    /// Water poured so far, across all three containers.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.jug_a) + u64::from(self.jug_b) + u64::from(self.tub)
    }
}

impl fmt::Display for JugState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.jug_a, self.jug_b, self.tub)
    }
}

/// The water-jug world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterJugs {
    capacities: JugCapacities,
    target: u32,
}

impl WaterJugs {
    /// Build a jug world.
    ///
    /// A target that is arithmetically unreachable (e.g. an odd target with
    /// two even jugs) is accepted; the search reports it as no solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidParameters`] if any capacity is zero or
    /// the target does not fit in the tub.
    pub fn new(capacities: JugCapacities, target: u32) -> Result<Self, SolveError> {
        for (name, capacity) in [
            ("jug A", capacities.jug_a),
            ("jug B", capacities.jug_b),
            ("tub", capacities.tub),
        ] {
            if capacity == 0 {
                return Err(SolveError::InvalidParameters {
                    detail: format!("{name} capacity must be positive"),
                });
            }
        }
        if target > capacities.tub {
            return Err(SolveError::InvalidParameters {
                detail: format!(
                    "target {target} exceeds tub capacity {}",
                    capacities.tub
                ),
            });
        }
        Ok(Self { capacities, target })
    }

    #[must_use]
    pub fn capacities(&self) -> JugCapacities {
        self.capacities
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Tub level after pouring `amount` in, if it does not pass the target.
    fn tub_after_pour(&self, tub: u32, amount: u32) -> Option<u32> {
        tub.checked_add(amount).filter(|&level| level <= self.target)
    }

    /// Whether pouring either jug into the tub lands exactly on the target.
    fn one_pour_from_target(&self, state: &JugState) -> bool {
        let target = Some(self.target);
        state.tub.checked_add(state.jug_a) == target
            || state.tub.checked_add(state.jug_b) == target
    }
}

impl SearchWorld for WaterJugs {
    type State = JugState;

    fn world_id(&self) -> &str {
        WATER_JUGS_ID
    }

    fn start_state(&self) -> JugState {
        JugState::new(0, 0, 0)
    }

    fn is_goal(&self, state: &JugState) -> bool {
        *state == self.goal_state()
    }

    /// Fill A (or pour B into A), fill B (or pour A into B), pour A into the
    /// tub, pour B into the tub, empty A, empty B.
    fn expand(&self, state: &JugState) -> Vec<JugState> {
        let JugCapacities {
            jug_a: cap_a,
            jug_b: cap_b,
            ..
        } = self.capacities;
        let JugState { jug_a, jug_b, tub } = *state;
        let mut next = Vec::with_capacity(6);

        if jug_a < cap_a {
            next.push(JugState::new(cap_a, jug_b, tub));
            if jug_b != 0 {
                let poured = jug_b.min(cap_a - jug_a);
                next.push(JugState::new(jug_a + poured, jug_b - poured, tub));
            }
        }
        if jug_b < cap_b {
            next.push(JugState::new(jug_a, cap_b, tub));
            if jug_a != 0 {
                let poured = jug_a.min(cap_b - jug_b);
                next.push(JugState::new(jug_a - poured, jug_b + poured, tub));
            }
        }
        if jug_a != 0 {
            if let Some(level) = self.tub_after_pour(tub, jug_a) {
                next.push(JugState::new(0, jug_b, level));
            }
        }
        if jug_b != 0 {
            if let Some(level) = self.tub_after_pour(tub, jug_b) {
                next.push(JugState::new(jug_a, 0, level));
            }
        }
        if jug_a != 0 {
            next.push(JugState::new(0, jug_b, tub));
        }
        if jug_b != 0 {
            next.push(JugState::new(jug_a, 0, tub));
        }

        next
    }
}

impl GoalStateWorld for WaterJugs {
    fn goal_state(&self) -> JugState {
        JugState::new(0, 0, self.target)
    }
}

/// Two passes over the frontier. First the earliest entry with the strictly
/// highest tub level (index 0 when every tub is empty); then the last entry
/// one pour away from the target, if any, overrides it.
impl FrontierScorer<JugState> for WaterJugs {
    fn best_candidate(&self, frontier: &[FrontierEntry<JugState>]) -> Option<usize> {
        if frontier.is_empty() {
            return None;
        }

        let mut pick = 0;
        let mut highest_tub = 0;
        for (i, entry) in frontier.iter().enumerate() {
            if entry.state.tub > highest_tub {
                highest_tub = entry.state.tub;
                pick = i;
            }
        }

        if let Some(i) = frontier
            .iter()
            .rposition(|entry| self.one_pour_from_target(&entry.state))
        {
            pick = i;
        }

        Some(pick)
    }
}
