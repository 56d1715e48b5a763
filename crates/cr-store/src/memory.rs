//! In-memory backend.

use dashmap::DashMap;

use crate::backend::{RuleBackend, ScopeId};
use crate::error::StoreResult;

/// A process-local rule backend.
///
/// Entries live in a sharded concurrent map, so work on one scope never
/// waits on an unrelated one.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: DashMap<ScopeId, i64>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scopes with an entry.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no scope has an entry.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl RuleBackend for MemoryBackend {
    fn init(&self) -> StoreResult<()> {
        Ok(())
    }

    fn load(&self, scope: &ScopeId) -> StoreResult<Option<i64>> {
        Ok(self.slots.get(scope).map(|rule| *rule))
    }

    fn save(&self, scope: &ScopeId, rule: i64) -> StoreResult<()> {
        self.slots.insert(scope.clone(), rule);
        Ok(())
    }
}
