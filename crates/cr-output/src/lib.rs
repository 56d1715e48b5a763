//! Output rendering for Critroll.
//!
//! A [`TemplateTable`] is loaded once from a TOML document of nested tables
//! whose leaves are either a string or a list of string variants. Rendering
//! picks one variant uniformly at random and fills `{name}` placeholders
//! from a [`Params`] map.

pub mod error;
pub mod format;
pub mod params;
pub mod table;

pub use error::{OutputError, OutputResult};
pub use params::Params;
pub use table::{TemplateEntry, TemplateTable};
