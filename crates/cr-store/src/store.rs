//! The rule store front: validated writes, degrading reads.

use cr_mechanics::RuleVariant;

use crate::backend::{RuleBackend, ScopeId};
use crate::error::StoreResult;

/// Per-scope critical-rule selection.
///
/// Reads never fail: a missing, unreadable, or out-of-range entry yields
/// [`RuleVariant::default`]. Writes clamp out-of-range ids to the default
/// and surface backend failures.
pub struct RuleStore {
    backend: Box<dyn RuleBackend>,
}

impl RuleStore {
    /// Wrap a backend and initialize its storage.
    ///
    /// Initialization failure is returned; the store is unusable without it.
    pub fn new(backend: impl RuleBackend + 'static) -> StoreResult<Self> {
        let store = Self {
            backend: Box::new(backend),
        };
        store.init()?;
        Ok(store)
    }

    /// Ensure the backing structure exists. Safe to call repeatedly.
    pub fn init(&self) -> StoreResult<()> {
        self.backend.init()
    }

    /// The variant selected for `scope`, or the default.
    pub fn get(&self, scope: &ScopeId) -> RuleVariant {
        match self.backend.load(scope) {
            Ok(Some(id)) => RuleVariant::from_id(id).unwrap_or_else(|_| {
                tracing::warn!(%scope, id, "stored rule out of range, using default");
                RuleVariant::default()
            }),
            Ok(None) => RuleVariant::default(),
            Err(e) => {
                tracing::warn!(%scope, error = %e, "rule lookup failed, using default");
                RuleVariant::default()
            }
        }
    }

    /// Select a variant for `scope` by raw id.
    ///
    /// Ids outside 1-4 store the default. Returns the variant actually stored.
    pub fn set(&self, scope: &ScopeId, requested: i64) -> StoreResult<RuleVariant> {
        let variant = RuleVariant::from_id(requested).unwrap_or_default();
        self.backend.save(scope, i64::from(variant.id()))?;
        tracing::info!(%scope, requested, rule = %variant, "rule updated");
        Ok(variant)
    }

    /// Select a variant for `scope`.
    pub fn set_variant(&self, scope: &ScopeId, variant: RuleVariant) -> StoreResult<RuleVariant> {
        self.set(scope, i64::from(variant.id()))
    }

    /// Restore the default variant for `scope`.
    pub fn reset(&self, scope: &ScopeId) -> StoreResult<RuleVariant> {
        self.set_variant(scope, RuleVariant::default())
    }
}

impl std::fmt::Debug for RuleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleStore").finish_non_exhaustive()
    }
}
