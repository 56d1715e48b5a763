//! Error types for rule persistence.

use thiserror::Error;

/// Result type for rule store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a rule backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite database rejected an operation.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database location could not be prepared.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value is not an integer.
    #[error("corrupt rule for scope '{scope}': {value}")]
    Corrupt {
        /// The scope whose entry is unreadable.
        scope: String,
        /// What was found instead.
        value: String,
    },

    /// Another thread panicked while holding a store lock.
    #[error("rule store lock poisoned")]
    Poisoned,
}
