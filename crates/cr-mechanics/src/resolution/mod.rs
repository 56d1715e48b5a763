//! Outcome classifiers.
//!
//! Two families of checks are supported:
//! - **Paired roll** (hope/fear): two attribute-sized dice, summed against a
//!   difficulty, with doubles triggering criticals or a tie
//! - **Percentile**: a d100 roll-under against a skill, with critical bands
//!   chosen by a [`RuleVariant`](crate::rules::RuleVariant)

pub mod paired;
pub mod percentile;

use serde::{Deserialize, Serialize};

/// How a percentile roll is compared against its target number when no
/// critical band applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SuccessPredicate {
    /// Success if roll ≤ target.
    #[default]
    AtOrBelow,
    /// Success if roll < target.
    Below,
}

impl SuccessPredicate {
    /// Apply the predicate.
    pub fn test(self, roll: u32, target: u32) -> bool {
        match self {
            Self::AtOrBelow => roll <= target,
            Self::Below => roll < target,
        }
    }
}
