//! The shared check coordinator.

use std::sync::Arc;

use cr_output::{Params, TemplateTable};
use cr_store::RuleStore;

use crate::character::CharacterStore;
use crate::error::CheckResult;

/// The rendered text of a check together with what produced it.
#[derive(Debug, Clone)]
pub struct CheckReport<T> {
    /// The template key the outcome rendered through.
    pub key: &'static str,
    /// User-facing text.
    pub text: String,
    /// The structured outcome.
    pub outcome: T,
}

/// Runs checks against shared, read-mostly state.
///
/// The template table is immutable for the process lifetime; the rule store
/// is the only mutable collaborator and handles its own locking, so a
/// `Checker` can be shared freely across threads.
#[derive(Clone)]
pub struct Checker {
    pub(crate) templates: Arc<TemplateTable>,
    pub(crate) rules: Arc<RuleStore>,
    pub(crate) characters: Arc<dyn CharacterStore>,
}

impl Checker {
    /// Assemble a checker from its collaborators.
    pub fn new(
        templates: Arc<TemplateTable>,
        rules: Arc<RuleStore>,
        characters: Arc<dyn CharacterStore>,
    ) -> Self {
        Self {
            templates,
            rules,
            characters,
        }
    }

    /// The rule store backing percentile checks.
    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    /// The template table.
    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }

    pub(crate) fn render<T>(
        &self,
        key: &'static str,
        params: &Params,
        outcome: T,
    ) -> CheckResult<CheckReport<T>> {
        let text = self.templates.render(key, params)?;
        Ok(CheckReport { key, text, outcome })
    }
}

impl std::fmt::Debug for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checker")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}
