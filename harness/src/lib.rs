//! Statecraft Harness: puzzle worlds and the runner that solves them.
//!
//! The harness does NOT implement traversal; it delegates to
//! `statecraft_search`. Worlds provide states, rules and scorers only; the
//! runner owns strategy selection, path reconstruction, error mapping and
//! solution digests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod runner;
pub mod worlds;

pub use error::SolveError;
pub use runner::{
    enumerate_routes, greedy_route, solve, solve_crossing, solve_jugs, Route, RouteSet, Solution,
};
