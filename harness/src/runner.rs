//! Harness runner: drives a world through the search engine and packages
//! the answer.
//!
//! # Operations
//!
//! ```text
//! solve(world, strategy, policy)        → Solution<S>  (goal-state worlds)
//! enumerate_routes(map, strategy, policy) → RouteSet    (every simple route)
//! greedy_route(map, policy)             → Route        (first greedy hit)
//! ```
//!
//! Every result carries the engine's [`SearchReport`] and a
//! [`ContentHash`] over the canonical JSON of the answer, so repeated runs
//! can be compared byte for byte.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use statecraft_search::{
    enumerate_goals, search, Frontier, FrontierScorer, SearchPolicy, SearchReport, Strategy,
    TerminationReason,
};

use crate::contract::GoalStateWorld;
use crate::digest::{
    canonical_hash, canonical_json_bytes, ContentHash, DOMAIN_ROUTE_SET, DOMAIN_SOLUTION_PATH,
};
use crate::error::SolveError;
use crate::worlds::crossing::{CrossingState, RiverCrossing};
use crate::worlds::jugs::{JugCapacities, JugState, WaterJugs};
use crate::worlds::road_map::{cheapest_path, MapPath, MapWorld};

/// A start-to-goal path found by one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    /// States from the start state to the goal state, inclusive.
    pub path: Vec<S>,
    pub report: SearchReport,
    pub digest: ContentHash,
}

impl<S> Solution<S> {
    /// Number of moves (one less than the number of states).
    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Every simple route between two map locations, with the cheapest one.
#[derive(Debug, Clone)]
pub struct RouteSet {
    /// Routes in the order the strategy popped them.
    pub routes: Vec<MapPath>,
    /// Index into `routes` of the cheapest route.
    pub cheapest: usize,
    pub cheapest_cost: f64,
    pub report: SearchReport,
    pub digest: ContentHash,
}

impl RouteSet {
    /// The cheapest route.
    #[must_use]
    pub fn cheapest_route(&self) -> &MapPath {
        &self.routes[self.cheapest]
    }
}

/// The first route the greedy strategy reached.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: MapPath,
    pub cost: f64,
    pub report: SearchReport,
    pub digest: ContentHash,
}

/// Search `world` with `strategy` and reconstruct the path to its goal state.
///
/// # Errors
///
/// - [`SolveError::Search`] if the policy is invalid.
/// - [`SolveError::NoSolution`] if the reachable graph holds no goal.
/// - [`SolveError::SearchExhausted`] if a budget ran out first.
/// - [`SolveError::ScorerContractViolation`] if the greedy scorer misbehaved.
/// - [`SolveError::Digest`] if the path cannot be canonicalized.
pub fn solve<W>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<Solution<W::State>, SolveError>
where
    W: GoalStateWorld,
    W: FrontierScorer<W::State>,
    W::State: Serialize,
{
    let frontier = Frontier::for_strategy(strategy, world);
    let result = search(world, frontier, policy)?;
    check_termination(&result.report)?;

    let goal = world.goal_state();
    let path = result
        .path_to(&goal)
        .ok_or_else(|| no_solution(&result.report))?;

    let path_json = serde_json::to_value(&path).map_err(digest_error)?;
    let digest = digest_of(
        DOMAIN_SOLUTION_PATH,
        &json!({
            "world_id": result.report.world_id,
            "strategy": strategy.as_str(),
            "path": path_json,
            "report": serde_json::to_value(&result.report).map_err(digest_error)?,
        }),
    )?;

    info!(
        world = %result.report.world_id,
        %strategy,
        moves = path.len().saturating_sub(1),
        expansions = result.report.expansions,
        %digest,
        "solved"
    );

    Ok(Solution {
        path,
        report: result.report,
        digest,
    })
}

/// Solve the river crossing.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_crossing(
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<Solution<CrossingState>, SolveError> {
    solve(&RiverCrossing, strategy, policy)
}

/// Build a jug world and solve it.
///
/// # Errors
///
/// [`SolveError::InvalidParameters`] for rejected capacities or target;
/// otherwise see [`solve`].
pub fn solve_jugs(
    capacities: JugCapacities,
    target: u32,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<Solution<JugState>, SolveError> {
    let world = WaterJugs::new(capacities, target)?;
    solve(&world, strategy, policy)
}

/// Enumerate every simple route from the world's start to its target.
///
/// No visited map is kept: each route is its own state, so every distinct
/// route that reaches the target is collected. Any strategy works; the
/// strategy only changes the order of `routes`.
///
/// # Errors
///
/// - [`SolveError::NoSolution`] if no route reaches the target.
/// - [`SolveError::SearchExhausted`] if a budget ran out first.
/// - [`SolveError::ScorerContractViolation`], [`SolveError::Search`],
///   [`SolveError::Digest`] as for [`solve`].
pub fn enumerate_routes(
    world: &MapWorld,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<RouteSet, SolveError> {
    let frontier = Frontier::for_strategy(strategy, world);
    let enumeration = enumerate_goals(world, frontier, policy)?;
    check_termination(&enumeration.report)?;

    let routes = enumeration.goals;
    let Some((best, cheapest_cost)) = cheapest_path(&routes) else {
        return Err(no_solution(&enumeration.report));
    };
    // Routes are distinct simple walks, so the first equal one is `best`.
    let cheapest = routes
        .iter()
        .position(|route| route == best)
        .unwrap_or_default();

    let rendered: Vec<Value> = routes.iter().map(route_json).collect();
    let digest = digest_of(
        DOMAIN_ROUTE_SET,
        &json!({
            "world_id": enumeration.report.world_id,
            "strategy": strategy.as_str(),
            "start": world.start().label(),
            "target": world.target().label(),
            "routes": rendered,
            "cheapest": cheapest,
        }),
    )?;

    info!(
        world = %enumeration.report.world_id,
        %strategy,
        routes = routes.len(),
        cheapest = %routes[cheapest],
        cost = cheapest_cost,
        %digest,
        "routes enumerated"
    );

    Ok(RouteSet {
        routes,
        cheapest,
        cheapest_cost,
        report: enumeration.report,
        digest,
    })
}

/// Greedy best-first route: the first route to the target popped when the
/// cheapest-so-far route is always expanded next. Not guaranteed optimal.
///
/// # Errors
///
/// As for [`solve`].
pub fn greedy_route(world: &MapWorld, policy: &SearchPolicy) -> Result<Route, SolveError> {
    let result = search(world, Frontier::greedy(world), policy)?;
    check_termination(&result.report)?;

    let path = result.goal.ok_or_else(|| no_solution(&result.report))?;
    let cost = path.cost();
    let digest = digest_of(
        DOMAIN_SOLUTION_PATH,
        &json!({
            "world_id": result.report.world_id,
            "strategy": Strategy::Greedy.as_str(),
            "path": route_json(&path),
        }),
    )?;

    info!(
        world = %result.report.world_id,
        route = %path,
        cost,
        %digest,
        "greedy route"
    );

    Ok(Route {
        path,
        cost,
        report: result.report,
        digest,
    })
}

/// Map non-goal terminations other than a drained frontier to errors.
fn check_termination(report: &SearchReport) -> Result<(), SolveError> {
    match report.termination_reason {
        TerminationReason::GoalReached | TerminationReason::FrontierExhausted => Ok(()),
        TerminationReason::ExpansionBudgetExceeded | TerminationReason::FrontierBudgetExceeded => {
            warn!(
                world = %report.world_id,
                strategy = %report.strategy,
                expansions = report.expansions,
                reason = ?report.termination_reason,
                "search budget exhausted"
            );
            Err(SolveError::SearchExhausted {
                world_id: report.world_id.clone(),
                strategy: report.strategy,
                expansions: report.expansions,
            })
        }
        TerminationReason::ScorerContractViolation { .. } => {
            Err(SolveError::ScorerContractViolation {
                world_id: report.world_id.clone(),
            })
        }
    }
}

fn no_solution(report: &SearchReport) -> SolveError {
    info!(
        world = %report.world_id,
        strategy = %report.strategy,
        expansions = report.expansions,
        "no solution"
    );
    SolveError::NoSolution {
        world_id: report.world_id.clone(),
        strategy: report.strategy,
    }
}

/// Labels plus the cost as a fixed-precision string; canonical JSON has no
/// floats.
fn route_json(route: &MapPath) -> Value {
    json!({
        "labels": route.labels(),
        "cost": format!("{:.6}", route.cost()),
    })
}

fn digest_of(domain: &[u8], value: &Value) -> Result<ContentHash, SolveError> {
    let bytes = canonical_json_bytes(value).map_err(digest_error)?;
    Ok(canonical_hash(domain, &bytes))
}

fn digest_error(e: impl std::fmt::Display) -> SolveError {
    SolveError::Digest {
        detail: e.to_string(),
    }
}
