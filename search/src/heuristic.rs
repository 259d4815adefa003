//! Remaining-cost estimates for A*.

use crate::contract::{Cost, SearchProblem};

/// Trait for remaining-cost estimates.
///
/// Only consulted by A*: once for the start state and once per successor
/// pushed. The estimate must be admissible (never above the true remaining
/// cost) for A* to return a minimal-cost path; the engine does not check.
///
/// Any `Fn(&P::State, &P) -> Cost` is a heuristic.
pub trait Heuristic<P: SearchProblem + ?Sized> {
    /// Estimate the cost from `state` to the nearest goal of `problem`.
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem + ?Sized,
    F: Fn(&P::State, &P) -> Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> Cost {
        self(state, problem)
    }
}

/// Default heuristic: estimates 0 for every state.
///
/// Trivially admissible. A* under this heuristic orders its frontier exactly
/// like uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<P: SearchProblem + ?Sized> Heuristic<P> for ZeroHeuristic {
    fn estimate(&self, _state: &P::State, _problem: &P) -> Cost {
        0
    }
}

/// Function form of [`ZeroHeuristic`], usable wherever a closure heuristic is.
#[must_use]
pub fn null_heuristic<P: SearchProblem + ?Sized>(_state: &P::State, _problem: &P) -> Cost {
    0
}
