//! Search entry points and the traversal loop.
//!
//! # Loop
//!
//! ```text
//! frontier ← { (sentinel, start) }     visited ← {}
//! loop:
//!   frontier empty            → FrontierExhausted
//!   expansions == budget      → ExpansionBudgetExceeded
//!   (parent, current) ← pop   (strategy-specific)
//!   current visited           → skip (duplicate)
//!   visited[current] ← parent
//!   is_goal(current)          → GoalReached
//!   push (current, s) for every unvisited successor s
//! ```
//!
//! [`enumerate_goals`] is the visited-free variant used when every goal
//! path is wanted rather than the first one.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::contract::SearchWorld;
use crate::error::SearchError;
use crate::frontier::{Frontier, Strategy};
use crate::graph::{SearchReport, TerminationReason};
use crate::node::FrontierEntry;
use crate::policy::SearchPolicy;
use crate::visited::VisitedMap;

/// Result of a goal-directed search.
///
/// The visited map is always returned, whatever the termination reason, so
/// callers can reconstruct a path to any state they care about.
#[derive(Debug)]
pub struct SearchResult<S: Eq + Hash> {
    /// Every visited state with its first-discovery parent.
    pub visited: VisitedMap<S>,
    /// The goal state that stopped the search (if any).
    pub goal: Option<S>,
    pub report: SearchReport,
}

impl<S: Clone + Eq + Hash> SearchResult<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.report.termination_reason == TerminationReason::GoalReached
    }

    /// Path from the start state to `target`, if `target` was visited.
    #[must_use]
    pub fn path_to(&self, target: &S) -> Option<Vec<S>> {
        self.visited.reconstruct_path(target)
    }
}

/// Result of an exhaustive goal enumeration.
#[derive(Debug)]
pub struct Enumeration<S> {
    /// Goal states in the order they were popped.
    pub goals: Vec<S>,
    pub report: SearchReport,
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    duplicates_suppressed: u64,
    successors_generated: u64,
}

impl Counters {
    fn into_report(
        self,
        world_id: &str,
        strategy: Strategy,
        frontier_high_water: u64,
        termination_reason: TerminationReason,
    ) -> SearchReport {
        debug!(
            world = world_id,
            %strategy,
            expansions = self.expansions,
            duplicates = self.duplicates_suppressed,
            frontier_high_water,
            reason = ?termination_reason,
            "search finished"
        );
        SearchReport {
            world_id: world_id.to_string(),
            strategy,
            expansions: self.expansions,
            duplicates_suppressed: self.duplicates_suppressed,
            successors_generated: self.successors_generated,
            frontier_high_water,
            termination_reason,
        }
    }
}

/// Run a goal-directed search from the world's start state.
///
/// The frontier decides the strategy. The search stops on the first popped
/// goal; all other terminations (frontier exhausted, budgets, scorer contract
/// violation) return `Ok` with the reason in the report.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
pub fn search<W>(
    world: &W,
    mut frontier: Frontier<'_, W::State>,
    policy: &SearchPolicy,
) -> Result<SearchResult<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
{
    policy.validate()?;

    let strategy = frontier.strategy();
    let mut visited = VisitedMap::new();
    let mut counters = Counters::default();

    frontier.push(FrontierEntry::root(world.start_state()));

    let (termination_reason, goal) = loop {
        if frontier.is_empty() {
            break (TerminationReason::FrontierExhausted, None);
        }
        if counters.expansions >= policy.max_expansions {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }

        let entry = match frontier.pop() {
            Ok(Some(entry)) => entry,
            Ok(None) => break (TerminationReason::FrontierExhausted, None),
            Err(violation) => break (violation.into(), None),
        };

        let FrontierEntry { parent, state } = entry;
        if !visited.record(state.clone(), parent) {
            counters.duplicates_suppressed += 1;
            continue;
        }
        counters.expansions += 1;

        if world.is_goal(&state) {
            break (TerminationReason::GoalReached, Some(state));
        }

        let successors = world.expand(&state);
        counters.successors_generated += successors.len() as u64;
        trace!(state = ?state, successors = successors.len(), "expanded");

        for successor in successors {
            if !visited.contains(&successor) {
                frontier.push(FrontierEntry::child(state.clone(), successor));
            }
        }

        if frontier.len() as u64 > policy.max_frontier_size {
            break (TerminationReason::FrontierBudgetExceeded, None);
        }
    };

    let report = counters.into_report(
        world.world_id(),
        strategy,
        frontier.high_water(),
        termination_reason,
    );
    Ok(SearchResult {
        visited,
        goal,
        report,
    })
}

/// Enumerate every goal state reachable from the start state.
///
/// No visited map: each popped entry is processed. Goal states are collected
/// and *not* expanded; every other state is expanded. This terminates only
/// when the world's expansion is acyclic (e.g. simple-path states that never
/// revisit a vertex); otherwise the policy budgets stop it.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
pub fn enumerate_goals<W>(
    world: &W,
    mut frontier: Frontier<'_, W::State>,
    policy: &SearchPolicy,
) -> Result<Enumeration<W::State>, SearchError>
where
    W: SearchWorld + ?Sized,
{
    policy.validate()?;

    let strategy = frontier.strategy();
    let mut goals = Vec::new();
    let mut counters = Counters::default();

    frontier.push(FrontierEntry::root(world.start_state()));

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        if counters.expansions >= policy.max_expansions {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let state = match frontier.pop() {
            Ok(Some(entry)) => entry.state,
            Ok(None) => break TerminationReason::FrontierExhausted,
            Err(violation) => break violation.into(),
        };
        counters.expansions += 1;

        if world.is_goal(&state) {
            goals.push(state);
            continue;
        }

        let successors = world.expand(&state);
        counters.successors_generated += successors.len() as u64;
        for successor in successors {
            frontier.push(FrontierEntry::child(state.clone(), successor));
        }

        if frontier.len() as u64 > policy.max_frontier_size {
            break TerminationReason::FrontierBudgetExceeded;
        }
    };

    let report = counters.into_report(
        world.world_id(),
        strategy,
        frontier.high_water(),
        termination_reason,
    );
    Ok(Enumeration { goals, report })
}
