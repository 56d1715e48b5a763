//! The template table and rendering.

use std::path::Path;

use rand::Rng;
use toml::{Table, Value};

use crate::error::{OutputError, OutputResult};
use crate::format;
use crate::params::Params;

/// The template document shipped with the crate.
pub const BUNDLED_TEMPLATES: &str = include_str!("../templates/default.toml");

/// A resolved template leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry<'a> {
    /// A single fixed template.
    Single(&'a str),
    /// Equally weighted variants (never empty when produced by a table).
    Variants(Vec<&'a str>),
}

impl<'a> TemplateEntry<'a> {
    /// Pick the template to use; variants are chosen uniformly.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        match self {
            Self::Single(text) => *text,
            Self::Variants(variants) if variants.is_empty() => "",
            Self::Variants(variants) => variants[rng.random_range(0..variants.len())],
        }
    }

    /// How many variants this entry offers.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Variants(variants) => variants.len(),
        }
    }

    /// True if there is nothing to choose from.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable dot-path → template mapping, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    root: Table,
}

impl TemplateTable {
    /// Parse a TOML template document.
    pub fn from_toml_str(text: &str) -> OutputResult<Self> {
        let root: Table = toml::from_str(text)?;
        Ok(Self { root })
    }

    /// Read and parse a template file.
    pub fn load(path: impl AsRef<Path>) -> OutputResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// The bundled default templates.
    pub fn bundled() -> OutputResult<Self> {
        Self::from_toml_str(BUNDLED_TEMPLATES)
    }

    /// Walk a dot-separated key to its template leaf.
    pub fn resolve(&self, key: &str) -> OutputResult<TemplateEntry<'_>> {
        let missing = || OutputError::TemplateMissing(key.to_string());
        let malformed = |reason: &str| OutputError::TemplateMalformed {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let mut scope = Some(&self.root);
        let mut found = None;
        for segment in key.split('.') {
            let next = scope.and_then(|t| t.get(segment)).ok_or_else(missing)?;
            scope = next.as_table();
            found = Some(next);
        }

        match found.ok_or_else(missing)? {
            Value::String(text) => Ok(TemplateEntry::Single(text.as_str())),
            Value::Array(items) if items.is_empty() => Err(malformed("empty variant list")),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().ok_or_else(|| malformed("variant is not a string")))
                .collect::<OutputResult<Vec<_>>>()
                .map(TemplateEntry::Variants),
            Value::Table(group) if group.is_empty() => Err(missing()),
            Value::Table(_) => Err(malformed("key names a group, not a template")),
            other => Err(malformed(&format!("unsupported {} value", other.type_str()))),
        }
    }

    /// True if `key` resolves to a usable template.
    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_ok()
    }

    /// Render `key` with the thread-local RNG.
    pub fn render(&self, key: &str, params: &Params) -> OutputResult<String> {
        self.render_with(&mut rand::rng(), key, params)
    }

    /// Render `key`, choosing among variants with `rng`.
    ///
    /// Lookup failures are returned. Substitution failures are not: the
    /// chosen template is returned verbatim instead.
    pub fn render_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        key: &str,
        params: &Params,
    ) -> OutputResult<String> {
        let template = self.resolve(key)?.choose(rng);
        match format::substitute(template, params) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!(key, error = %e, "template substitution failed, using raw text");
                Ok(template.to_string())
            }
        }
    }
}
