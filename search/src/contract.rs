//! Search problem contract trait.

use std::hash::Hash;

/// Incremental or accumulated path cost.
///
/// Integer-only so frontier ordering is a total order with no platform drift.
/// Non-negativity is carried by the type.
pub type Cost = u64;

/// One edge out of a state: the state it leads to, the action that takes it
/// there, and the step cost of that action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    #[must_use]
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A> From<(S, A, Cost)> for Successor<S, A> {
    fn from((state, action, cost): (S, A, Cost)) -> Self {
        Self::new(state, action, cost)
    }
}

/// Trait for problems that support search.
///
/// The engine treats states and actions as opaque: states are only compared,
/// hashed and cloned, actions are only cloned into the returned path.
///
/// # Contract
///
/// - `start_state` is pure: repeated calls return equal states.
/// - `successors` must be deterministic: same state → same successors in the
///   same order, for the duration of one search call.
/// - Implementations must not rely on being called a particular number of
///   times. The engine calls `successors` exactly once per expanded state.
/// - A panic in any method propagates out of the search unchanged.
pub trait SearchProblem {
    /// A point in the state space.
    type State: Clone + Eq + Hash;
    /// A single transition between states.
    type Action: Clone;

    /// The initial state.
    fn start_state(&self) -> Self::State;

    /// Test whether `state` satisfies the goal condition.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Enumerate every legal transition out of `state`.
    ///
    /// An empty result marks a dead end.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of executing `actions` from the start state.
    ///
    /// The sequence must be composed of legal moves. Not called by the engine;
    /// exposed for callers that score or replay returned paths.
    fn actions_cost(&self, actions: &[Self::Action]) -> Cost;
}
