//! Check-resolution mechanics for Critroll.
//!
//! Provides randomness sources and dice, the four critical-range rule
//! variants used by percentile checks, and two outcome classifiers: the
//! paired-roll (hope/fear) model and the percentile critical-range model.
//! Everything here is pure arithmetic over injected randomness.

pub mod dice;
pub mod error;
pub mod resolution;
pub mod rules;

pub use dice::{Die, DieResult, RandomSource, ScriptedRolls};
pub use error::{MechError, MechResult};
pub use resolution::paired::{PairedAttribute, PairedCheck, PairedOutcome, PairedRoll};
pub use resolution::percentile::{
    DiceModifier, PercentileCheck, PercentileKind, PercentileOutcome, PercentileRoll,
};
pub use resolution::SuccessPredicate;
pub use rules::{CriticalRanges, RuleVariant, critical_ranges};
