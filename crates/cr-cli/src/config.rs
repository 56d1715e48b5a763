use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_PATH: &str = "critroll.toml";
const DEFAULT_DATABASE: &str = "data/rules.db";

/// Settings read from `critroll.toml`.
///
/// Relative paths in the file are resolved against the file's directory.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct CritrollConfig {
    /// SQLite rule database; `data/rules.db` when absent.
    pub database: Option<PathBuf>,
    /// Template table replacing the bundled one.
    pub templates: Option<PathBuf>,
    /// Character sheets in JSON.
    pub sheet: Option<PathBuf>,
}

impl CritrollConfig {
    /// Load `explicit`, or `./critroll.toml` when none is given.
    pub fn discover(explicit: Option<&Path>) -> Self {
        let path = explicit.unwrap_or(Path::new(DEFAULT_PATH));
        if explicit.is_none() && !path.exists() {
            return Self::default();
        }
        Self::load(path)
    }

    /// Read a config file. Any failure is logged and yields defaults.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read config");
                return Self::default();
            }
        };

        match toml::from_str::<Self>(&content) {
            Ok(config) => match path.parent() {
                Some(base) => config.relative_to(base),
                None => config,
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to parse config");
                Self::default()
            }
        }
    }

    /// The rule database to open.
    pub fn database(&self) -> &Path {
        self.database
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_DATABASE))
    }

    /// Command-line values win over file values.
    pub fn with_overrides(
        self,
        database: Option<PathBuf>,
        templates: Option<PathBuf>,
        sheet: Option<PathBuf>,
    ) -> Self {
        Self {
            database: database.or(self.database),
            templates: templates.or(self.templates),
            sheet: sheet.or(self.sheet),
        }
    }

    fn relative_to(self, base: &Path) -> Self {
        let resolve = |p: Option<PathBuf>| p.map(|p| if p.is_relative() { base.join(p) } else { p });
        Self {
            database: resolve(self.database),
            templates: resolve(self.templates),
            sheet: resolve(self.sheet),
        }
    }
}
