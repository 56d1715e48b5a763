pub mod pair;
pub mod percentile;
pub mod ranges;
pub mod rule;

use std::sync::Arc;

use cr_check::{CharacterStore, Checker, SheetCharacters};
use cr_output::TemplateTable;
use cr_store::{RuleStore, SqliteBackend};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::CritrollConfig;

/// Assemble a checker from the configured files.
pub fn checker(config: &CritrollConfig) -> Result<Checker, String> {
    let templates = match &config.templates {
        Some(path) => TemplateTable::load(path)
            .map_err(|e| format!("templates {}: {e}", path.display()))?,
        None => TemplateTable::bundled().map_err(|e| e.to_string())?,
    };

    let database = config.database();
    let rules = SqliteBackend::open(database)
        .and_then(RuleStore::new)
        .map_err(|e| format!("rule database {}: {e}", database.display()))?;

    let characters: Arc<dyn CharacterStore> = match &config.sheet {
        Some(path) => Arc::new(
            SheetCharacters::load(path)
                .map_err(|e| format!("character sheet {}: {e}", path.display()))?,
        ),
        None => Arc::new(SheetCharacters::new()),
    };

    Ok(Checker::new(Arc::new(templates), Arc::new(rules), characters))
}

/// A seeded RNG when a seed is given, otherwise one seeded from the OS.
fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
