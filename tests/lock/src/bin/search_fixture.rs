//! Binary that runs every strategy over the fixture problems and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [strategy]`
//!
//! With no argument every strategy runs; otherwise only the named one
//! (`dfs`, `bfs`, `ucs`, `astar`, or a long name).
//!
//! Output: one `key=value` line per (problem, strategy) pair:
//! `<problem>.<strategy>.actions`, `.cost`, `.expansions`, `.trace_digest`.

use lock_tests::fixtures::{random_graph, GraphProblem, GridMaze, ManhattanDistance, TINY_MAZE};
use waypoint_search::search::search;
use waypoint_search::strategy::UnknownStrategy;
use waypoint_search::{Heuristic, SearchPolicy, SearchProblem, Strategy, ZeroHeuristic};

fn emit<P, H>(name: &str, problem: &P, heuristic: &H, strategies: &[Strategy])
where
    P: SearchProblem,
    P::Action: std::fmt::Debug,
    H: Heuristic<P>,
{
    let policy = SearchPolicy {
        record_trace: true,
        ..SearchPolicy::default()
    };
    for &strategy in strategies {
        let result = search(problem, strategy, heuristic, &policy).expect("default policy is valid");
        let digest = result
            .trace
            .as_ref()
            .expect("trace requested")
            .digest()
            .expect("trace serializes");
        let cost = result
            .cost()
            .map_or_else(|| "none".to_string(), |c| c.to_string());
        println!("{name}.{strategy}.actions={:?}", result.actions);
        println!("{name}.{strategy}.cost={cost}");
        println!("{name}.{strategy}.expansions={}", result.stats.expansions);
        println!("{name}.{strategy}.trace_digest={digest}");
    }
}

fn main() -> Result<(), UnknownStrategy> {
    let strategies = match std::env::args().nth(1) {
        Some(name) => vec![name.parse::<Strategy>()?],
        None => Strategy::ALL.to_vec(),
    };

    emit("diamond", &GraphProblem::diamond(), &ZeroHeuristic, &strategies);
    emit(
        "random_graph",
        &random_graph(42, 40, 160, 9),
        &ZeroHeuristic,
        &strategies,
    );
    emit(
        "tiny_maze",
        &GridMaze::parse(TINY_MAZE),
        &ManhattanDistance,
        &strategies,
    );
    Ok(())
}
