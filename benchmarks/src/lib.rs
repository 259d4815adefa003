//! Shared helpers for waypoint benchmark suites.

use lock_tests::fixtures::{random_graph, GraphProblem, GridMaze};

/// Random graph sizes swept by the search benchmarks: `(nodes, edges)`.
pub const GRAPH_SIZES: [(u64, u64); 3] = [(100, 400), (1_000, 4_000), (5_000, 20_000)];

/// Fixed seed so every benchmark run searches the same graphs.
pub const GRAPH_SEED: u64 = 0x5EED;

/// Build the benchmark graph for `(nodes, edges)`.
#[must_use]
pub fn bench_graph(nodes: u64, edges: u64) -> GraphProblem {
    random_graph(GRAPH_SEED, nodes, edges, 20)
}

/// Open rooms swept by the maze benchmarks (side length).
pub const ROOM_SIDES: [usize; 3] = [16, 64, 128];

/// Build a square benchmark room.
#[must_use]
pub fn bench_room(side: usize) -> GridMaze {
    GridMaze::open_room(side, side)
}
