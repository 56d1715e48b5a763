//! SQLite-backed rule persistence.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dashmap::DashMap;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params};

use crate::backend::{RuleBackend, ScopeId};
use crate::error::{StoreError, StoreResult};

const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS scope_rule (
        scope_id TEXT PRIMARY KEY,
        rule INTEGER
    );
";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Idle file connections kept around for reuse.
const MAX_IDLE: usize = 4;

enum Connections {
    /// A private in-memory database, reachable only through its one connection.
    Single(Mutex<Connection>),
    /// A database file; every operation borrows a connection of its own.
    Pooled {
        path: PathBuf,
        idle: Mutex<Vec<Connection>>,
    },
}

/// A rule backend stored in a single SQLite table.
///
/// File databases run in WAL mode and hand each operation its own
/// connection, so a read never queues behind a write to another scope.
/// Writes to the same scope take turns on a per-scope lock; each write is a
/// single upsert.
pub struct SqliteBackend {
    connections: Connections,
    writers: DashMap<ScopeId, Arc<Mutex<()>>>,
}

impl SqliteBackend {
    /// Open or create the database file at `path`, creating parent
    /// directories as needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let db = connect(path)?;
        tracing::debug!(path = %path.display(), "opened rule database");
        Ok(Self {
            connections: Connections::Pooled {
                path: path.to_path_buf(),
                idle: Mutex::new(vec![db]),
            },
            writers: DashMap::new(),
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Connection::open_in_memory()?;
        Ok(Self {
            connections: Connections::Single(Mutex::new(db)),
            writers: DashMap::new(),
        })
    }

    fn with_db<T>(&self, f: impl FnOnce(&Connection) -> StoreResult<T>) -> StoreResult<T> {
        match &self.connections {
            Connections::Single(db) => {
                let db = db.lock().map_err(|_| StoreError::Poisoned)?;
                f(&db)
            }
            Connections::Pooled { path, idle } => {
                let pooled = idle.lock().map_err(|_| StoreError::Poisoned)?.pop();
                let db = match pooled {
                    Some(db) => db,
                    None => connect(path)?,
                };
                let result = f(&db);
                let mut idle = idle.lock().map_err(|_| StoreError::Poisoned)?;
                if idle.len() < MAX_IDLE {
                    idle.push(db);
                }
                result
            }
        }
    }
}

fn connect(path: &Path) -> StoreResult<Connection> {
    let db = Connection::open(path)?;
    db.busy_timeout(BUSY_TIMEOUT)?;
    db.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(db)
}

impl RuleBackend for SqliteBackend {
    fn init(&self) -> StoreResult<()> {
        self.with_db(|db| Ok(db.execute_batch(SCHEMA)?))
    }

    fn load(&self, scope: &ScopeId) -> StoreResult<Option<i64>> {
        self.with_db(|db| {
            let stored: Option<Value> = db
                .query_row(
                    "SELECT rule FROM scope_rule WHERE scope_id = ?1",
                    params![scope.as_str()],
                    |row| row.get(0),
                )
                .optional()?;
            match stored {
                None => Ok(None),
                Some(Value::Integer(rule)) => Ok(Some(rule)),
                Some(Value::Text(text)) => {
                    text.trim()
                        .parse()
                        .map(Some)
                        .map_err(|_| StoreError::Corrupt {
                            scope: scope.to_string(),
                            value: text.clone(),
                        })
                }
                Some(other) => Err(StoreError::Corrupt {
                    scope: scope.to_string(),
                    value: format!("{other:?}"),
                }),
            }
        })
    }

    fn save(&self, scope: &ScopeId, rule: i64) -> StoreResult<()> {
        let turn = Arc::clone(&self.writers.entry(scope.clone()).or_default());
        let _turn = turn.lock().map_err(|_| StoreError::Poisoned)?;
        self.with_db(|db| {
            db.execute(
                "INSERT INTO scope_rule (scope_id, rule) VALUES (?1, ?2)
                 ON CONFLICT(scope_id) DO UPDATE SET rule = excluded.rule",
                params![scope.as_str(), rule],
            )?;
            Ok(())
        })
    }
}

impl std::fmt::Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend").finish_non_exhaustive()
    }
}
