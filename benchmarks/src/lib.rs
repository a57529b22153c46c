//! Shared helpers for statecraft benchmark suites.

use statecraft_harness::worlds::jugs::{JugCapacities, WaterJugs};
use statecraft_harness::worlds::road_map::{reference_map, MapWorld};
use statecraft_harness::SolveError;
use statecraft_search::{
    enumerate_goals, search, Frontier, FrontierScorer, SearchError, SearchPolicy, SearchReport,
    SearchWorld, Strategy,
};

/// Jug puzzles of increasing state-space size: `(name, world)`.
///
/// # Errors
///
/// Returns the construction error if a configuration is rejected.
pub fn jug_regimes() -> Result<Vec<(&'static str, WaterJugs)>, SolveError> {
    let regime = |a, b, tub, target| {
        WaterJugs::new(
            JugCapacities {
                jug_a: a,
                jug_b: b,
                tub,
            },
            target,
        )
    };
    Ok(vec![
        ("3_5_to_4", regime(3, 5, 10, 4)?),
        ("7_11_to_6", regime(7, 11, 20, 6)?),
        ("2_2_to_3_dead_end", regime(2, 2, 10, 3)?),
        ("13_17_to_29", regime(13, 17, 40, 29)?),
    ])
}

/// Map queries from short to long: `(name, world)`.
///
/// # Errors
///
/// Returns [`SolveError::UnknownLocation`] if a label is not on the
/// reference map.
pub fn map_queries() -> Result<Vec<(&'static str, MapWorld)>, SolveError> {
    Ok(vec![
        ("m_to_s", MapWorld::new(reference_map(), "M", "S")?),
        ("n_to_j", MapWorld::new(reference_map(), "N", "J")?),
        ("n_to_s", MapWorld::new(reference_map(), "N", "S")?),
    ])
}

/// Run the engine alone (no path reconstruction, no digest).
///
/// # Errors
///
/// Returns the engine's pre-flight error.
pub fn search_only<W>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SearchReport, SearchError>
where
    W: SearchWorld,
    W: FrontierScorer<W::State>,
{
    let frontier = Frontier::for_strategy(strategy, world);
    Ok(search(world, frontier, policy)?.report)
}

/// Run the visited-free enumeration alone.
///
/// # Errors
///
/// Returns the engine's pre-flight error.
pub fn enumerate_only<W>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<usize, SearchError>
where
    W: SearchWorld,
    W: FrontierScorer<W::State>,
{
    let frontier = Frontier::for_strategy(strategy, world);
    Ok(enumerate_goals(world, frontier, policy)?.goals.len())
}
