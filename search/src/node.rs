//! Frontier entry type.

/// A discovered-but-not-yet-processed state, paired with the state that
/// discovered it.
///
/// `parent == None` is the start sentinel: it marks the root and terminates
/// backward path reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<S> {
    /// The discovering state (`None` for the root).
    pub parent: Option<S>,
    /// The state awaiting exploration.
    pub state: S,
}

impl<S> FrontierEntry<S> {
    /// The root entry: the start state behind the sentinel.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            parent: None,
            state,
        }
    }

    /// An entry discovered by expanding `parent`.
    #[must_use]
    pub fn child(parent: S, state: S) -> Self {
        Self {
            parent: Some(parent),
            state,
        }
    }

    /// Whether this entry carries the start sentinel.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
