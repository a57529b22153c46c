//! Road map: depth-first and breadth-first enumerate the same simple routes
//! between every pair of locations, and the greedy route is one of them.

use std::collections::HashSet;

use statecraft_harness::worlds::road_map::{
    path_cost, reference_map, MapNode, MapPath, MapWorld, RoadMap,
};
use statecraft_harness::{enumerate_routes, greedy_route, SolveError};
use statecraft_search::{SearchPolicy, Strategy};

fn labels() -> Vec<String> {
    reference_map()
        .nodes()
        .iter()
        .map(|n| n.label().to_string())
        .collect()
}

fn world(start: &str, target: &str) -> MapWorld {
    MapWorld::new(reference_map(), start, target).unwrap()
}

#[test]
fn dfs_and_bfs_enumerate_the_same_routes_for_every_pair() {
    let policy = SearchPolicy::default();
    for start in labels() {
        for target in labels() {
            let w = world(&start, &target);
            let dfs = enumerate_routes(&w, Strategy::DepthFirst, &policy).unwrap();
            let bfs = enumerate_routes(&w, Strategy::BreadthFirst, &policy).unwrap();

            let dfs_set: HashSet<&MapPath> = dfs.routes.iter().collect();
            let bfs_set: HashSet<&MapPath> = bfs.routes.iter().collect();
            assert_eq!(dfs_set.len(), dfs.routes.len(), "{start}->{target}: duplicate");
            assert_eq!(dfs_set, bfs_set, "{start}->{target}");
            assert!(
                (dfs.cheapest_cost - bfs.cheapest_cost).abs() < 1e-9,
                "{start}->{target}"
            );
        }
    }
}

#[test]
fn routes_are_simple_and_end_at_the_target() {
    let w = world("N", "S");
    let set = enumerate_routes(&w, Strategy::DepthFirst, &SearchPolicy::default()).unwrap();
    assert!(!set.routes.is_empty());
    for route in &set.routes {
        let labels = route.labels();
        assert_eq!(labels.first(), Some(&"N"));
        assert_eq!(labels.last(), Some(&"S"));
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len(), "{route} revisits a location");
    }
}

#[test]
fn cheapest_route_has_the_minimum_cost() {
    let w = world("N", "M");
    let set = enumerate_routes(&w, Strategy::BreadthFirst, &SearchPolicy::default()).unwrap();
    let min = set
        .routes
        .iter()
        .map(MapPath::cost)
        .fold(f64::INFINITY, f64::min);
    assert!((set.cheapest_cost - min).abs() < 1e-12);
    assert!((set.cheapest_route().cost() - path_cost(set.cheapest_route().nodes())).abs() < 1e-12);
}

#[test]
fn greedy_route_is_a_member_of_the_enumerated_set() {
    let policy = SearchPolicy::default();
    for start in labels() {
        for target in labels() {
            let w = world(&start, &target);
            let route = greedy_route(&w, &policy).unwrap();
            let set = enumerate_routes(&w, Strategy::DepthFirst, &policy).unwrap();
            assert!(
                set.routes.contains(&route.path),
                "{start}->{target}: greedy route {} not enumerated",
                route.path
            );
            assert!(route.cost + 1e-9 >= set.cheapest_cost);
        }
    }
}

#[test]
fn same_start_and_target_is_the_trivial_route() {
    let w = world("E", "e");
    let set = enumerate_routes(&w, Strategy::DepthFirst, &SearchPolicy::default()).unwrap();
    assert_eq!(set.routes.len(), 1);
    assert_eq!(set.routes[0].labels(), vec!["E"]);
    assert!(set.cheapest_cost.abs() < f64::EPSILON);
}

#[test]
fn unknown_labels_are_rejected() {
    let err = MapWorld::new(reference_map(), "N", "Rome").unwrap_err();
    assert_eq!(
        err,
        SolveError::UnknownLocation {
            label: "Rome".to_string()
        }
    );
}

#[test]
fn tiny_budget_exhausts_enumeration() {
    let policy = SearchPolicy {
        max_expansions: 3,
        ..SearchPolicy::default()
    };
    let err = enumerate_routes(&world("N", "S"), Strategy::BreadthFirst, &policy).unwrap_err();
    assert!(matches!(err, SolveError::SearchExhausted { .. }), "{err}");
}

#[test]
fn isolated_target_has_no_route() {
    let map = RoadMap::new(
        vec![
            MapNode::new("A", 0.0, 0.0),
            MapNode::new("B", 1.0, 0.0),
            MapNode::new("C", 5.0, 5.0),
        ],
        &[("A", "B")],
    )
    .unwrap();
    let w = MapWorld::new(map, "A", "C").unwrap();
    let policy = SearchPolicy::default();

    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let err = enumerate_routes(&w, strategy, &policy).unwrap_err();
        assert_eq!(
            err,
            SolveError::NoSolution {
                world_id: "road_map".to_string(),
                strategy,
            }
        );
    }

    let err = greedy_route(&w, &policy).unwrap_err();
    assert_eq!(
        err,
        SolveError::NoSolution {
            world_id: "road_map".to_string(),
            strategy: Strategy::Greedy,
        }
    );
}
