//! Waypoint Search: generic state-space search over opaque states.
//!
//! A caller describes a problem through [`SearchProblem`] (start state, goal
//! test, successor function, action costs) and gets back the actions leading
//! from the start to a goal. The engine never inspects states beyond
//! equality and hashing.
//!
//! # Entry points
//!
//! | Function | Frontier | Ordering key |
//! |---|---|---|
//! | [`depth_first_search`] (`dfs`) | stack | insertion order |
//! | [`breadth_first_search`] (`bfs`) | queue | insertion order |
//! | [`uniform_cost_search`] (`ucs`) | priority | `g` |
//! | [`a_star_search`] (`astar`) | priority | `g + h` |
//!
//! Each returns an empty `Vec` when the start is already a goal or no goal
//! is reachable. [`search::search`] runs the same loop under a
//! [`SearchPolicy`] and reports a [`TerminationReason`] that tells the two
//! apart, plus statistics and an optional expansion trace.
//!
//! # Module dependency direction
//!
//! ```text
//! contract, node, frontier, visited, heuristic  ←  search  →  trace → digest
//! ```

#![forbid(unsafe_code)]

pub mod contract;
pub mod digest;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod search;
pub mod strategy;
pub mod trace;
pub mod visited;

pub use contract::{Cost, SearchProblem, Successor};
pub use error::SearchError;
pub use heuristic::{null_heuristic, Heuristic, ZeroHeuristic};
pub use policy::SearchPolicy;
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, replay, uniform_cost_search,
    SearchResult, SearchStats, TerminationReason,
};
pub use strategy::Strategy;

// Abbreviations.
pub use search::a_star_search as astar;
pub use search::breadth_first_search as bfs;
pub use search::depth_first_search as dfs;
pub use search::uniform_cost_search as ucs;
