//! Frontier records, persistent action paths, and the priority key.

use std::rc::Rc;

use crate::contract::Cost;

/// An immutable sequence of actions from the start state.
///
/// Extending a path allocates one link that points at the shared prefix, so
/// sibling records pushed from the same expansion never alias each other's
/// tails and never copy the prefix.
pub struct Path<A> {
    head: Option<Rc<PathLink<A>>>,
    len: usize,
}

struct PathLink<A> {
    action: A,
    prev: Option<Rc<PathLink<A>>>,
}

impl<A> Path<A> {
    /// The empty path (the start state's path).
    #[must_use]
    pub fn empty() -> Self {
        Self { head: None, len: 0 }
    }

    /// A new path equal to `self` followed by `action`. `self` is unchanged.
    #[must_use]
    pub fn extend(&self, action: A) -> Self {
        Self {
            head: Some(Rc::new(PathLink {
                action,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Actions from the end of the path back to the start.
    fn iter_rev(&self) -> impl Iterator<Item = &A> {
        std::iter::successors(self.head.as_deref(), |link| link.prev.as_deref())
            .map(|link| &link.action)
    }
}

impl<A: Clone> Path<A> {
    /// Materialize the actions in start-to-end order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A> {
        let mut actions: Vec<A> = self.iter_rev().cloned().collect();
        actions.reverse();
        actions
    }
}

// Manual impls: cloning a path only bumps the head refcount, so `A` need not
// be `Clone`.
impl<A> Clone for Path<A> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<A> Default for Path<A> {
    fn default() -> Self {
        Self::empty()
    }
}

// Unlinks uniquely owned links one at a time; drop depth stays constant
// however long the path is.
impl<A> Drop for Path<A> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Rc::try_unwrap(link) {
                Ok(mut owned) => next = owned.prev.take(),
                // The rest of the chain is still shared by another path.
                Err(_) => break,
            }
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Path<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut actions: Vec<&A> = self.iter_rev().collect();
        actions.reverse();
        f.debug_list().entries(actions).finish()
    }
}

/// A pending frontier entry: a state, the path that reached it, and the
/// accumulated step cost along that path.
#[derive(Debug, Clone)]
pub struct FrontierRecord<S, A> {
    pub state: S,
    pub path: Path<A>,
    /// Cumulative step cost (`g`). Saturates at `Cost::MAX`.
    pub g_cost: Cost,
}

impl<S, A> FrontierRecord<S, A> {
    /// The seed record for the start state.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            state,
            path: Path::empty(),
            g_cost: 0,
        }
    }

    /// A child record reached from `self` by `action` at `step_cost`.
    #[must_use]
    pub fn child(&self, state: S, action: A, step_cost: Cost) -> Self {
        Self {
            state,
            path: self.path.extend(action),
            g_cost: self.g_cost.saturating_add(step_cost),
        }
    }

    /// Tree depth (root = 0). Always equals the path length.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// The priority-frontier ordering key: `(priority, creation_order)`.
///
/// Lower `priority` first; ties broken by older `creation_order`, which makes
/// equal-priority records pop in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
