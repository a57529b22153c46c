//! Harness contract: what a world must add on top of `SearchWorld` to be
//! solved by the runner.

use statecraft_search::SearchWorld;

/// A world with a single, fixed goal state.
///
/// The runner searches, then reconstructs the backpointer path to
/// [`GoalStateWorld::goal_state`]. Worlds whose goal is a condition over a
/// sequence (the road map) do not implement this trait; they go through
/// the route operations in [`crate::runner`] instead.
pub trait GoalStateWorld: SearchWorld {
    /// The configuration that solves the puzzle.
    fn goal_state(&self) -> Self::State;
}
