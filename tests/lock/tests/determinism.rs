//! In-process determinism: the same input gives the same answer, report and
//! digest on every invocation.

use statecraft_harness::worlds::jugs::JugCapacities;
use statecraft_harness::worlds::road_map::{reference_map, MapWorld};
use statecraft_harness::{enumerate_routes, greedy_route, solve_crossing, solve_jugs};
use statecraft_search::{SearchPolicy, Strategy};

const RUNS: usize = 5;

fn jugs() -> JugCapacities {
    JugCapacities {
        jug_a: 3,
        jug_b: 5,
        tub: 10,
    }
}

#[test]
fn crossing_is_idempotent() {
    let policy = SearchPolicy::default();
    for strategy in Strategy::ALL {
        let first = solve_crossing(strategy, &policy).unwrap();
        for _ in 1..RUNS {
            assert_eq!(solve_crossing(strategy, &policy).unwrap(), first);
        }
    }
}

#[test]
fn jugs_are_idempotent() {
    let policy = SearchPolicy::default();
    for strategy in Strategy::ALL {
        let first = solve_jugs(jugs(), 4, strategy, &policy).unwrap();
        for _ in 1..RUNS {
            assert_eq!(solve_jugs(jugs(), 4, strategy, &policy).unwrap(), first);
        }
    }
}

#[test]
fn routes_are_idempotent() {
    let policy = SearchPolicy::default();
    let world = MapWorld::new(reference_map(), "N", "S").unwrap();
    for strategy in Strategy::ALL {
        let first = enumerate_routes(&world, strategy, &policy).unwrap();
        for _ in 1..RUNS {
            let again = enumerate_routes(&world, strategy, &policy).unwrap();
            assert_eq!(again.routes, first.routes);
            assert_eq!(again.digest, first.digest);
            assert_eq!(again.report, first.report);
        }
    }
    let first = greedy_route(&world, &policy).unwrap();
    for _ in 1..RUNS {
        let again = greedy_route(&world, &policy).unwrap();
        assert_eq!(again.path, first.path);
        assert_eq!(again.digest, first.digest);
    }
}

#[test]
fn digests_distinguish_strategies_and_inputs() {
    let policy = SearchPolicy::default();
    let dfs = solve_jugs(jugs(), 4, Strategy::DepthFirst, &policy).unwrap();
    let bfs = solve_jugs(jugs(), 4, Strategy::BreadthFirst, &policy).unwrap();
    let other_target = solve_jugs(jugs(), 2, Strategy::DepthFirst, &policy).unwrap();
    assert_ne!(dfs.digest, bfs.digest);
    assert_ne!(dfs.digest, other_target.digest);

    let world = MapWorld::new(reference_map(), "N", "S").unwrap();
    let reversed = MapWorld::new(reference_map(), "S", "N").unwrap();
    let forward = enumerate_routes(&world, Strategy::DepthFirst, &policy).unwrap();
    let backward = enumerate_routes(&reversed, Strategy::DepthFirst, &policy).unwrap();
    assert_ne!(forward.digest, backward.digest);
    assert_eq!(forward.routes.len(), backward.routes.len());
}

#[test]
fn policy_loaded_from_json_behaves_like_the_default() {
    let loaded = SearchPolicy::from_json(r#"{"max_expansions": 100000}"#).unwrap();
    assert_eq!(loaded, SearchPolicy::default());
    let a = solve_crossing(Strategy::Greedy, &loaded).unwrap();
    let b = solve_crossing(Strategy::Greedy, &SearchPolicy::default()).unwrap();
    assert_eq!(a.digest, b.digest);
}

#[test]
fn reports_serialize_with_a_tagged_termination_reason() {
    let solution = solve_crossing(Strategy::BreadthFirst, &SearchPolicy::default()).unwrap();
    let bytes = solution.report.to_json_bytes().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["world_id"], "river_crossing");
    assert_eq!(json["strategy"], "breadth_first");
    assert_eq!(json["termination_reason"]["type"], "goal_reached");
    assert_eq!(json["expansions"], solution.report.expansions);
}
