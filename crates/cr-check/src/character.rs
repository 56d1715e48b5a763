//! The character-sheet lookup consumed by the orchestrators.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a skill lookup failed.
#[derive(Debug, Error)]
pub enum CharacterError {
    /// No sheet exists for the identity.
    #[error("no character for '{0}'")]
    NoCharacter(String),

    /// The sheet has no such skill.
    #[error("'{identity}' has no skill '{skill}'")]
    NoSkill {
        /// Whose sheet was searched.
        identity: String,
        /// The skill that was asked for.
        skill: String,
    },

    /// The sheet file could not be read.
    #[error("failed to read character sheets: {0}")]
    Io(#[from] std::io::Error),

    /// The sheet file is not valid JSON.
    #[error("failed to parse character sheets: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Supplies skill values by name for a player identity.
pub trait CharacterStore: Send + Sync {
    /// The value of `skill` on the active sheet of `identity`.
    fn skill_value(&self, identity: &str, skill: &str) -> Result<i64, CharacterError>;
}

/// Character sheets held in memory, keyed by identity then skill name.
///
/// Serialized as `{"<identity>": {"<skill>": <value>}}`. Skill names match
/// exactly first, then case-insensitively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetCharacters {
    sheets: HashMap<String, HashMap<String, i64>>,
}

impl SheetCharacters {
    /// No sheets at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill value, builder style.
    pub fn with_skill(mut self, identity: &str, skill: &str, value: i64) -> Self {
        self.sheets
            .entry(identity.to_string())
            .or_default()
            .insert(skill.to_string(), value);
        self
    }

    /// Parse sheets from JSON.
    pub fn from_json(json: &str) -> Result<Self, CharacterError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read sheets from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CharacterError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }
}

impl CharacterStore for SheetCharacters {
    fn skill_value(&self, identity: &str, skill: &str) -> Result<i64, CharacterError> {
        let sheet = self
            .sheets
            .get(identity)
            .ok_or_else(|| CharacterError::NoCharacter(identity.to_string()))?;
        if let Some(value) = sheet.get(skill) {
            return Ok(*value);
        }
        let wanted = skill.to_lowercase();
        sheet
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, value)| *value)
            .ok_or_else(|| CharacterError::NoSkill {
                identity: identity.to_string(),
                skill: skill.to_string(),
            })
    }
}
