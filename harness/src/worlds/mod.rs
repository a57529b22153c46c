//! Puzzle worlds for the search engine.
//!
//! Each world supplies a start state, a goal test, a deterministic expansion
//! rule and a greedy scorer. The crossing and jug worlds have a single goal
//! state and go through [`crate::runner::solve`]; the road map searches over
//! whole routes and goes through the route operations.

pub mod crossing;
pub mod jugs;
pub mod road_map;
