//! `SearchTrace`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries. States and actions are opaque to the engine, so events record
//! only what the engine decided: pop keys, depths, costs and successor
//! counts. Two runs of the same strategy on the same deterministic problem
//! produce byte-identical canonical JSON and therefore the same digest.

use crate::contract::Cost;
use crate::digest::{canonical_hash, ContentHash, DOMAIN_SEARCH_TRACE};
use crate::error::SearchError;
use crate::search::{SearchStats, TerminationReason};
use crate::strategy::Strategy;

/// The complete expansion log of one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTrace {
    pub strategy: Strategy,
    /// Ordered expansion events. Stale pops and the goal pop are not
    /// expansions and do not appear here.
    pub expansions: Vec<ExpandEvent>,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

/// A single frontier-pop + successor-expansion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions (0-based).
    pub expansion_order: u64,
    /// The frontier key at time of pop (`None` for stack/queue frontiers).
    pub priority: Option<Cost>,
    pub depth: u64,
    pub g_cost: Cost,
    pub successors_generated: u64,
    pub successors_pushed: u64,
    /// Successors dropped because their state was already expanded.
    pub successors_suppressed: u64,
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchTrace {
    /// Serialize the trace to canonical JSON bytes.
    ///
    /// Object keys are sorted (the `serde_json` map is ordered) and output
    /// is compact. All numbers are integers.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TraceSerialization`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, SearchError> {
        serde_json::to_vec(&self.to_json_value()).map_err(|e| SearchError::TraceSerialization {
            detail: e.to_string(),
        })
    }

    /// Content digest of the canonical JSON bytes under
    /// [`DOMAIN_SEARCH_TRACE`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TraceSerialization`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, SearchError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &bytes))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy.as_str(),
            "termination_reason": termination_reason_to_json(&self.termination),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "g_cost": e.g_cost,
        "priority": e.priority,
        "successors_generated": e.successors_generated,
        "successors_pushed": e.successors_pushed,
        "successors_suppressed": e.successors_suppressed,
    })
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "duplicates_suppressed": s.duplicates_suppressed,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "stale_pops": s.stale_pops,
        "successors_generated": s.successors_generated,
        "total_pushed": s.total_pushed,
    })
}

fn termination_reason_to_json(r: &TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { cost, depth } => {
            serde_json::json!({"cost": cost, "depth": depth, "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
    }
}
