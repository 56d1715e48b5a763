//! Rule-variant persistence for Critroll.
//!
//! Each scope (a chat group, a table, a campaign) stores one integer: the id
//! of its selected [`RuleVariant`](cr_mechanics::RuleVariant). Storage sits
//! behind the narrow [`RuleBackend`] trait; the [`RuleStore`] front enforces
//! the policy that reads degrade to the default variant while writes surface
//! failures.

pub mod backend;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod store;

pub use backend::{RuleBackend, ScopeId};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;
pub use store::RuleStore;
