//! Search world contract trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for worlds that support search.
///
/// A world supplies an implicit graph: a start state, a goal test and an
/// expansion rule. The engine never materializes the graph; it calls
/// [`SearchWorld::expand`] on demand.
///
/// # Contract
///
/// - `State` equality and hashing are value-based. The visited map folds
///   the graph with them, so two states that compare equal are the same
///   vertex.
/// - `expand` must be deterministic: same state, same successors in the
///   same order. Successors must never include the state itself.
/// - `expand` only produces legal states; the engine does not re-validate.
pub trait SearchWorld {
    /// One configuration of the world.
    type State: Clone + Eq + Hash + Debug;

    /// Unique world identifier (e.g., `"river_crossing"`).
    fn world_id(&self) -> &str;

    /// The state every search starts from.
    fn start_state(&self) -> Self::State;

    /// Test whether the given state satisfies the world's goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produce every legal successor of `state`, in a fixed order.
    fn expand(&self, state: &Self::State) -> Vec<Self::State>;
}
