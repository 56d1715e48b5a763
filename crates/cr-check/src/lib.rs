//! Check orchestration for Critroll.
//!
//! A [`Checker`] ties the pieces together: it coerces textual attribute
//! arguments into magnitudes (literal numbers, or a [`CharacterStore`]
//! lookup), runs the paired or percentile classifier, and renders the
//! outcome through the shared template table. It also handles the
//! rule-administration command that changes a scope's critical rule.

pub mod admin;
pub mod character;
pub mod checker;
pub mod error;
pub mod input;
pub mod pair;
pub mod percentile;

pub use admin::RuleCommand;
pub use character::{CharacterError, CharacterStore, SheetCharacters};
pub use checker::{CheckReport, Checker};
pub use error::{CheckError, CheckResult};
pub use pair::PairRequest;
pub use percentile::PercentileRequest;
