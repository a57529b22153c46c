//! River crossing: every strategy returns a legal, safe start-to-goal path.

use statecraft_harness::solve_crossing;
use statecraft_harness::worlds::crossing::{Bank, CrossingState, RiverCrossing};
use statecraft_search::{SearchPolicy, SearchWorld, Strategy, TerminationReason};

/// Farmer crosses, carrying at most one passenger from their own bank.
fn is_legal_move(from: &CrossingState, to: &CrossingState) -> bool {
    if to.farmer == from.farmer {
        return false;
    }
    let moved: Vec<Bank> = [
        (from.cat, to.cat),
        (from.duck, to.duck),
        (from.grain, to.grain),
    ]
    .into_iter()
    .filter(|(before, after)| before != after)
    .map(|(before, _)| before)
    .collect();
    match moved.as_slice() {
        [] => true,
        [bank] => *bank == from.farmer,
        _ => false,
    }
}

#[test]
fn every_strategy_reaches_the_far_bank() {
    for strategy in Strategy::ALL {
        let solution = solve_crossing(strategy, &SearchPolicy::default()).unwrap();
        assert_eq!(
            solution.path.first(),
            Some(&CrossingState::all_on(Bank::Near)),
            "{strategy}"
        );
        assert_eq!(
            solution.path.last(),
            Some(&CrossingState::all_on(Bank::Far)),
            "{strategy}"
        );
        assert_eq!(
            solution.report.termination_reason,
            TerminationReason::GoalReached
        );
    }
}

#[test]
fn every_step_is_a_legal_safe_move() {
    for strategy in Strategy::ALL {
        let solution = solve_crossing(strategy, &SearchPolicy::default()).unwrap();
        for pair in solution.path.windows(2) {
            assert!(
                is_legal_move(&pair[0], &pair[1]),
                "{strategy}: illegal move {} -> {}",
                pair[0],
                pair[1]
            );
            assert!(RiverCrossing.expand(&pair[0]).contains(&pair[1]));
        }
        assert!(solution.path.iter().all(CrossingState::is_safe), "{strategy}");
    }
}

#[test]
fn paths_do_not_revisit_states() {
    for strategy in Strategy::ALL {
        let solution = solve_crossing(strategy, &SearchPolicy::default()).unwrap();
        let mut seen = std::collections::HashSet::new();
        assert!(solution.path.iter().all(|s| seen.insert(*s)), "{strategy}");
    }
}

#[test]
fn breadth_first_finds_the_shortest_crossing() {
    let bfs = solve_crossing(Strategy::BreadthFirst, &SearchPolicy::default()).unwrap();
    assert_eq!(bfs.moves(), 7);
    for strategy in [Strategy::DepthFirst, Strategy::Greedy] {
        let other = solve_crossing(strategy, &SearchPolicy::default()).unwrap();
        assert!(other.moves() >= bfs.moves(), "{strategy}");
    }
}
