//! Visited map: closed set and backpointer store in one structure.

use std::collections::HashMap;
use std::hash::Hash;

/// Maps every discovered state to the state that first discovered it.
///
/// `None` as a value is the start sentinel. Insertion is first-discovery
/// wins; a later rediscovery of a visited state is discarded, which is what
/// keeps search finite on graphs with cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedMap<S: Eq + Hash> {
    parents: HashMap<S, Option<S>>,
}

impl<S: Clone + Eq + Hash> VisitedMap<S> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Record `state` as discovered by `parent`.
    ///
    /// Returns `false` (and leaves the map unchanged) if `state` was already
    /// visited.
    pub fn record(&mut self, state: S, parent: Option<S>) -> bool {
        if self.parents.contains_key(&state) {
            return false;
        }
        self.parents.insert(state, parent);
        true
    }

    /// Whether `state` has been visited.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.parents.contains_key(state)
    }

    /// The recorded parent of `state`: `None` if unvisited, `Some(None)` for
    /// the root.
    #[must_use]
    pub fn parent_of(&self, state: &S) -> Option<Option<&S>> {
        self.parents.get(state).map(Option::as_ref)
    }

    /// Number of visited states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Whether nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Walk backpointers from `goal` to the start sentinel.
    ///
    /// Returns the path in start-to-goal order, or `None` if `goal` was never
    /// visited. A broken chain (a parent that was never recorded itself)
    /// also yields `None` rather than a truncated path.
    #[must_use]
    pub fn reconstruct_path(&self, goal: &S) -> Option<Vec<S>> {
        let mut path = Vec::new();
        let mut current = Some(goal);

        while let Some(state) = current {
            let parent = self.parents.get(state)?;
            path.push(state.clone());
            // A chain longer than the map means the backpointers loop.
            if path.len() > self.parents.len() {
                return None;
            }
            current = parent.as_ref();
        }

        path.reverse();
        Some(path)
    }
}

impl<S: Clone + Eq + Hash> Default for VisitedMap<S> {
    fn default() -> Self {
        Self::new()
    }
}
