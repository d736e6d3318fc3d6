//! Error types for the doctrine model

/// Errors raised while interpreting caller-supplied vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Drafting mode label is not one of the three known modes
    #[error("unknown drafting mode: '{0}' (expected board-memo, investment-eval or pr-fallout)")]
    UnknownDraftMode(String),

    /// Decision type label is not one of the known decision types
    #[error("unknown decision type: '{0}'")]
    UnknownDecisionType(String),

    /// A `NAME=VALUE` pair could not be split
    #[error("malformed pair '{0}': expected NAME=VALUE")]
    MalformedPair(String),
}
