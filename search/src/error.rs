//! Typed search errors.
//!
//! `SearchError` represents pre-flight and artifact failures only. Failing to
//! reach a goal is a normal outcome, expressed through
//! [`crate::search::TerminationReason`] and an empty action sequence.

/// Typed failure for policy validation and trace serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot drive a search. No search steps were taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The expansion trace could not be rendered to canonical bytes.
    #[error("trace serialization failed: {detail}")]
    TraceSerialization { detail: String },
}
