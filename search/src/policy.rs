//! Search policy types.

use crate::error::SearchError;

/// Search budget and audit configuration.
///
/// The default policy imposes no budget and records no trace, which is the
/// plain behavior of the four entry points.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// Record a per-expansion [`crate::trace::SearchTrace`].
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is `Some(0)`.
    /// A zero budget could not even expand the start state; use `None` for
    /// an unbounded search.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1 (use None for unbounded)".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` has used up the budget.
    #[must_use]
    pub fn budget_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
