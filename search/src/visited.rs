//! Monotonic set of expanded states.
//!
//! Hash-based: the set is only ever queried for membership, never iterated,
//! so `HashSet` ordering cannot leak into search results.

use std::collections::HashSet;
use std::hash::Hash;

/// States already expanded in the current search. Grows only.
#[derive(Debug, Clone)]
pub struct VisitedSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Check if a state has been expanded.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Mark a state as expanded.
    ///
    /// Returns `false` if it was already present.
    pub fn add(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    /// Number of distinct states expanded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
