//! The storage seam behind the rule store.

use crate::error::StoreResult;

/// An opaque, stable scope identifier such as a group id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(String);

impl ScopeId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScopeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ScopeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A durable scope → integer mapping.
///
/// Backends store raw integers and know nothing about rule variants;
/// validation and defaulting live in [`RuleStore`](crate::RuleStore).
/// Implementations must let distinct scopes proceed independently and must
/// serialize writes to the same scope.
pub trait RuleBackend: Send + Sync {
    /// Create the underlying structure if it does not exist. Idempotent.
    fn init(&self) -> StoreResult<()>;

    /// Read the stored value for `scope`, or `None` if there is no entry.
    fn load(&self, scope: &ScopeId) -> StoreResult<Option<i64>>;

    /// Insert or overwrite the value for `scope`.
    fn save(&self, scope: &ScopeId, rule: i64) -> StoreResult<()>;
}
