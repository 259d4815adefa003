//! The four search strategies and their frontier disciplines.

use std::str::FromStr;

use crate::frontier::FrontierKind;

/// Which ordering drives the shared search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Depth-first: stack frontier, no cost ordering.
    DepthFirst,
    /// Breadth-first: queue frontier, no cost ordering.
    BreadthFirst,
    /// Uniform-cost: priority frontier keyed by accumulated cost `g`.
    UniformCost,
    /// A*: priority frontier keyed by `g + h`.
    AStar,
}

impl Strategy {
    /// All strategies, in entry-point order.
    pub const ALL: [Self; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Stable short name, used in traces and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    #[must_use]
    pub fn frontier_kind(self) -> FrontierKind {
        match self {
            Self::DepthFirst => FrontierKind::Stack,
            Self::BreadthFirst => FrontierKind::Queue,
            Self::UniformCost | Self::AStar => FrontierKind::Priority,
        }
    }

    /// Whether the heuristic contributes to the frontier key.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        self == Self::AStar
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy: {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" | "depth_first" | "depthFirstSearch" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadthFirstSearch" => Ok(Self::BreadthFirst),
            "ucs" | "uniform_cost" | "uniformCostSearch" => Ok(Self::UniformCost),
            "astar" | "a_star" | "aStarSearch" => Ok(Self::AStar),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}
