//! Search entry points and the shared expansion loop.
//!
//! All four strategies run the same loop: pop, skip if already expanded,
//! stop if goal, otherwise mark expanded and push every unexpanded
//! successor. They differ only in frontier discipline and in the priority a
//! pushed record gets.

use tracing::{debug, trace};

use crate::contract::{Cost, SearchProblem};
use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierKind};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::node::{FrontierRecord, Path};
use crate::policy::SearchPolicy;
use crate::strategy::Strategy;
use crate::trace::{ExpandEvent, SearchTrace};
use crate::visited::VisitedSet;

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped. `cost` is the accumulated step cost of the
    /// returned path and `depth` its length.
    GoalReached { cost: Cost, depth: u64 },
    /// Frontier emptied without reaching a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit before a goal was popped.
    ExpansionBudgetExceeded,
}

/// Aggregate counters for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// States expanded. Equals the number of `successors` calls and the
    /// final size of the visited set.
    pub expansions: u64,
    /// Successor records returned by the problem, across all expansions.
    pub successors_generated: u64,
    /// Successors dropped because their state was already expanded.
    pub duplicates_suppressed: u64,
    /// Records popped whose state had been expanded through another path.
    pub stale_pops: u64,
    /// Records pushed, including the start record.
    pub total_pushed: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
}

/// Result of a search execution.
///
/// Check [`SearchResult::is_goal_reached`] or `termination` to tell a
/// trivial empty path (start is a goal) from a failed search.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Actions from the start state to the goal; empty if none was reached.
    pub actions: Vec<A>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Per-expansion log, present when the policy asked for one.
    pub trace: Option<SearchTrace>,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Accumulated cost of the returned path, if a goal was reached.
    #[must_use]
    pub fn cost(&self) -> Option<Cost> {
        match self.termination {
            TerminationReason::GoalReached { cost, .. } => Some(cost),
            _ => None,
        }
    }
}

/// Run `strategy` against `problem` under `policy`.
///
/// `heuristic` is only consulted by [`Strategy::AStar`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures; no problem method is called in that case. Failing to
/// reach a goal is `Ok` with an empty path.
pub fn search<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    policy.validate()?;
    Ok(run(problem, strategy, heuristic, policy))
}

/// Search the deepest nodes in the search tree first.
///
/// Returns an empty sequence if the start state is a goal or no goal is
/// reachable.
pub fn depth_first_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
{
    run(
        problem,
        Strategy::DepthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .actions
}

/// Search the shallowest nodes in the search tree first.
///
/// On problems with equal step costs the returned path has the fewest
/// actions among all paths to a goal.
pub fn breadth_first_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
{
    run(
        problem,
        Strategy::BreadthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .actions
}

/// Search the node of least total cost first.
///
/// The returned path has minimal total step cost among all paths to a goal.
pub fn uniform_cost_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
{
    run(
        problem,
        Strategy::UniformCost,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .actions
}

/// Search the node with the lowest combined cost and heuristic first.
///
/// With an admissible heuristic the returned path costs the same as the
/// uniform-cost path. Pass `&ZeroHeuristic` for plain uniform-cost ordering.
pub fn a_star_search<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    run(problem, Strategy::AStar, heuristic, &SearchPolicy::default()).actions
}

/// Follow `actions` from the start state through `successors`.
///
/// Each action is matched against the first successor carrying an equal
/// action. Returns the reached state and the accumulated step cost, or
/// `None` if some action is not available where it is applied.
pub fn replay<P>(problem: &P, actions: &[P::Action]) -> Option<(P::State, Cost)>
where
    P: SearchProblem + ?Sized,
    P::Action: PartialEq,
{
    let mut state = problem.start_state();
    let mut cost: Cost = 0;
    for action in actions {
        let next = problem
            .successors(&state)
            .into_iter()
            .find(|s| s.action == *action)?;
        cost = cost.saturating_add(next.cost);
        state = next.state;
    }
    Some((state, cost))
}

/// Frontier priority for a record reaching `state` at accumulated cost `g`.
fn priority_of<P, H>(
    strategy: Strategy,
    heuristic: &H,
    problem: &P,
    state: &P::State,
    g_cost: Cost,
) -> Cost
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    if strategy.frontier_kind() != FrontierKind::Priority {
        return 0;
    }
    if strategy.uses_heuristic() {
        g_cost.saturating_add(heuristic.estimate(state, problem))
    } else {
        g_cost
    }
}

fn run<P, H>(
    problem: &P,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> SearchResult<P::Action>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P> + ?Sized,
{
    let mut frontier: Frontier<FrontierRecord<P::State, P::Action>> =
        Frontier::new(strategy.frontier_kind());
    debug!(
        %strategy,
        frontier = ?frontier.kind(),
        max_expansions = ?policy.max_expansions,
        "search started"
    );
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats::default();
    let mut events: Option<Vec<ExpandEvent>> = policy.record_trace.then(Vec::new);

    let start = problem.start_state();
    let start_priority = priority_of(strategy, heuristic, problem, &start, 0);
    frontier.push(FrontierRecord::root(start), start_priority);

    let (termination, goal_path): (TerminationReason, Option<Path<P::Action>>) = loop {
        let Some((current, popped_priority)) = frontier.pop_keyed() else {
            break (TerminationReason::FrontierExhausted, None);
        };

        // Stale copy of a state already expanded through another path.
        if visited.contains(&current.state) {
            stats.stale_pops += 1;
            continue;
        }

        if problem.is_goal(&current.state) {
            let reason = TerminationReason::GoalReached {
                cost: current.g_cost,
                depth: current.depth() as u64,
            };
            break (reason, Some(current.path));
        }

        if policy.budget_exhausted(stats.expansions) {
            break (TerminationReason::ExpansionBudgetExceeded, None);
        }

        visited.add(current.state.clone());
        let successors = problem.successors(&current.state);

        let generated = successors.len() as u64;
        let mut pushed = 0u64;
        let mut suppressed = 0u64;
        for successor in successors {
            if visited.contains(&successor.state) {
                suppressed += 1;
                continue;
            }
            let child = current.child(successor.state, successor.action, successor.cost);
            let priority = priority_of(strategy, heuristic, problem, &child.state, child.g_cost);
            frontier.push(child, priority);
            pushed += 1;
        }

        trace!(
            expansion = stats.expansions,
            depth = current.depth(),
            g_cost = current.g_cost,
            generated,
            pushed,
            suppressed,
            "expanded state"
        );

        if let Some(events) = events.as_mut() {
            events.push(ExpandEvent {
                expansion_order: stats.expansions,
                priority: popped_priority,
                depth: current.depth() as u64,
                g_cost: current.g_cost,
                successors_generated: generated,
                successors_pushed: pushed,
                successors_suppressed: suppressed,
            });
        }

        stats.expansions += 1;
        stats.successors_generated += generated;
        stats.duplicates_suppressed += suppressed;
    };

    stats.total_pushed = frontier.total_pushed();
    stats.frontier_high_water = frontier.high_water();

    debug!(
        %strategy,
        termination = ?termination,
        expansions = stats.expansions,
        frontier_high_water = stats.frontier_high_water,
        "search finished"
    );

    let actions = goal_path.map(|path| path.to_vec()).unwrap_or_default();
    let trace = events.map(|expansions| SearchTrace {
        strategy,
        expansions,
        termination,
        stats,
    });

    SearchResult {
        actions,
        termination,
        stats,
        trace,
    }
}
