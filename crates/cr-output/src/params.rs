//! Named substitution parameters.

use std::collections::BTreeMap;

/// Label → value pairs substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// An empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl std::fmt::Display) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let p = Params::new().with("name", "Ayla").with("total", 9);
        assert_eq!(p.get("name"), Some("Ayla"));
        assert_eq!(p.get("total"), Some("9"));
        assert_eq!(p.get("missing"), None);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn insert_replaces() {
        let mut p = Params::new().with("d1", 3);
        p.insert("d1", 4);
        assert_eq!(p.get("d1"), Some("4"));
        assert!(!p.is_empty());
    }
}
