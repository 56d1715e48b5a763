//! Error types for check orchestration.

use thiserror::Error;

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors surfaced by a check or an administrative command.
#[derive(Debug, Error)]
pub enum CheckError {
    /// An argument could not be coerced (e.g. a non-integer difficulty).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The classifier rejected its inputs.
    #[error(transparent)]
    Mechanics(#[from] cr_mechanics::MechError),

    /// A rule change could not be stored.
    #[error("rule storage failed: {0}")]
    Storage(#[from] cr_store::StoreError),

    /// The outcome template is missing or malformed.
    #[error(transparent)]
    Template(#[from] cr_output::OutputError),
}
