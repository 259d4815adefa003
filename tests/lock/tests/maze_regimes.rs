//! Grid-maze regimes: the tiny maze under every strategy, mud cells that
//! split BFS from UCS, and Manhattan-guided A* pruning an open room.

use lock_tests::fixtures::{
    tiny_maze_solution, Direction, GridMaze, Instrumented, ManhattanDistance, MUD_COST, TINY_MAZE,
};
use waypoint_search::search::search;
use waypoint_search::{
    a_star_search, breadth_first_search, depth_first_search, null_heuristic, replay,
    uniform_cost_search, SearchPolicy, SearchProblem, Strategy, ZeroHeuristic,
};

#[test]
fn tiny_maze_optimal_strategies_match_reference_length() {
    let maze = GridMaze::parse(TINY_MAZE);
    let reference = maze.actions_cost(&tiny_maze_solution());

    for actions in [
        breadth_first_search(&maze),
        uniform_cost_search(&maze),
        a_star_search(&maze, &ManhattanDistance),
    ] {
        assert_eq!(actions.len(), tiny_maze_solution().len());
        assert_eq!(maze.actions_cost(&actions), reference);
    }
}

#[test]
fn tiny_maze_dfs_reaches_goal() {
    let maze = GridMaze::parse(TINY_MAZE);
    let actions = depth_first_search(&maze);
    let (end, _) = replay(&maze, &actions).expect("legal path");
    assert_eq!(end, maze.goal());
}

#[test]
fn mud_splits_bfs_from_ucs() {
    // Straight through the mud: 3 steps costing 11. Around it: 7 steps
    // costing 7.
    let maze = GridMaze::parse(
        "\
%%%%%%
%P~~.%
% %% %
%    %
%%%%%%",
    );

    let shortest = breadth_first_search(&maze);
    let cheapest = uniform_cost_search(&maze);

    assert_eq!(shortest.len(), 3);
    assert_eq!(maze.actions_cost(&shortest), 1 + 2 * MUD_COST);
    assert_eq!(cheapest.len(), 7);
    assert_eq!(maze.actions_cost(&cheapest), 7);
    assert_eq!(cheapest.first(), Some(&Direction::South));
}

#[test]
fn manhattan_astar_matches_ucs_cost_with_fewer_expansions() {
    // Only the middle row has f = g + h equal to the optimal cost.
    let room = GridMaze::open_room(9, 12);
    let policy = SearchPolicy::default();

    let ucs = search(&room, Strategy::UniformCost, &ZeroHeuristic, &policy).unwrap();
    let guided = search(&room, Strategy::AStar, &ManhattanDistance, &policy).unwrap();

    assert_eq!(ucs.cost(), Some(11));
    assert_eq!(guided.stats.expansions, 11);
    assert_eq!(guided.cost(), ucs.cost());
    assert!(
        guided.stats.expansions < ucs.stats.expansions,
        "A* expanded {} vs UCS {}",
        guided.stats.expansions,
        ucs.stats.expansions
    );
}

#[test]
fn heuristic_not_consulted_outside_astar() {
    let calls = std::cell::Cell::new(0u64);
    let counting = |state: &(usize, usize), maze: &GridMaze| {
        calls.set(calls.get() + 1);
        null_heuristic(state, maze)
    };
    let maze = GridMaze::parse(TINY_MAZE);
    let policy = SearchPolicy::default();

    for strategy in [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
    ] {
        let _ = search(&maze, strategy, &counting, &policy).unwrap();
    }
    assert_eq!(calls.get(), 0);

    let result = search(&maze, Strategy::AStar, &counting, &policy).unwrap();
    // Once for the start, once per pushed successor.
    assert_eq!(calls.get(), result.stats.total_pushed);
}

#[test]
fn instrumented_maze_expands_each_cell_once() {
    let maze = Instrumented::new(GridMaze::open_room(5, 6));
    let _ = breadth_first_search(&maze);
    let expanded = maze.expanded();
    let distinct: std::collections::BTreeSet<_> = expanded.iter().collect();
    assert_eq!(distinct.len(), expanded.len());
    // Goal tests: one per pop that was not stale.
    assert_eq!(maze.goal_tests(), expanded.len() as u64 + 1);
}
