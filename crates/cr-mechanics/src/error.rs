//! Error types for the mechanics engine.

/// Errors that can occur while setting up or resolving a check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A numeric input was out of range or otherwise unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule variant id outside 1-4 was supplied directly.
    #[error("invalid rule variant: {0}")]
    InvalidRuleVariant(i64),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
