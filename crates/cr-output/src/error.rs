//! Error types for template loading and lookup.

use thiserror::Error;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Errors raised while loading or resolving templates.
#[derive(Debug, Error)]
pub enum OutputError {
    /// No template exists at the key.
    #[error("template '{0}' not found")]
    TemplateMissing(String),

    /// The key resolves to something other than a string or a non-empty
    /// list of strings.
    #[error("template '{key}' is malformed: {reason}")]
    TemplateMalformed {
        /// The offending key.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The template file could not be read.
    #[error("failed to read templates: {0}")]
    Io(#[from] std::io::Error),

    /// The template file is not valid TOML.
    #[error("failed to parse templates: {0}")]
    Parse(#[from] toml::de::Error),
}
