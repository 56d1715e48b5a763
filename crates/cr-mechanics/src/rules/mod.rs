//! Critical success/failure rule variants for percentile checks.
//!
//! A [`RuleVariant`] decides which d100 faces count as a critical success
//! and which as a critical failure. Four variants exist; the thresholds of
//! the official and phased variants depend on whether the tested skill is
//! below 50.
//!
//! | variant | critical success | critical failure |
//! |---|---|---|
//! | strict | 1 | 100 |
//! | official | 1 | 96-100 below 50, else 100 |
//! | phased | 1 below 50, else 1-5 | as official |
//! | loose | 1 to min(5, skill) | 96-100 |

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Skill magnitude at which the official and phased variants switch bands.
pub const SKILL_THRESHOLD: u32 = 50;

/// The policy deciding which percentile rolls are critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleVariant {
    /// 1 is a critical success, 100 a critical failure.
    Strict,
    /// 1 is a critical success; 96-100 fumbles below skill 50, only 100 at or above.
    #[default]
    Official,
    /// As official, but skills of 50 or more crit on 1-5.
    Phased,
    /// 1 to min(5, skill) crits, 96-100 always fumbles.
    Loose,
}

impl RuleVariant {
    /// All variants in id order.
    pub const ALL: [Self; 4] = [Self::Strict, Self::Official, Self::Phased, Self::Loose];

    /// Look up a variant by its numeric id (1-4).
    pub fn from_id(id: i64) -> MechResult<Self> {
        match id {
            1 => Ok(Self::Strict),
            2 => Ok(Self::Official),
            3 => Ok(Self::Phased),
            4 => Ok(Self::Loose),
            other => Err(MechError::InvalidRuleVariant(other)),
        }
    }

    /// The numeric id of this variant.
    pub fn id(self) -> u8 {
        match self {
            Self::Strict => 1,
            Self::Official => 2,
            Self::Phased => 3,
            Self::Loose => 4,
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Official => "official",
            Self::Phased => "phased",
            Self::Loose => "loose",
        }
    }

    /// One-line summary of the thresholds, for help output.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Strict => "critical 1, fumble 100",
            Self::Official => "critical 1, fumble 96-100 below skill 50 else 100",
            Self::Phased => "critical 1 (1-5 at skill 50+), fumble as official",
            Self::Loose => "critical 1-5 (capped by skill), fumble 96-100",
        }
    }

    /// The critical ranges this variant yields for a skill magnitude.
    pub fn ranges(self, skill: u32) -> CriticalRanges {
        let high_skill = skill >= SKILL_THRESHOLD;
        let success = match self {
            Self::Strict | Self::Official => 1..=1,
            Self::Phased if high_skill => 1..=5,
            Self::Phased => 1..=1,
            Self::Loose => 1..=skill.min(5),
        };
        let failure = match self {
            Self::Strict => 100..=100,
            Self::Official | Self::Phased if high_skill => 100..=100,
            Self::Official | Self::Phased => 96..=100,
            Self::Loose => 96..=100,
        };
        CriticalRanges { success, failure }
    }
}

impl TryFrom<i64> for RuleVariant {
    type Error = MechError;

    fn try_from(id: i64) -> MechResult<Self> {
        Self::from_id(id)
    }
}

impl std::fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive d100 bands that override the normal pass/fail comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalRanges {
    /// Rolls counted as a critical success. May be empty (loose, skill 0).
    pub success: RangeInclusive<u32>,
    /// Rolls counted as a critical failure.
    pub failure: RangeInclusive<u32>,
}

impl CriticalRanges {
    /// True if `roll` is a critical success.
    pub fn is_critical_success(&self, roll: u32) -> bool {
        self.success.contains(&roll)
    }

    /// True if `roll` is a critical failure.
    pub fn is_critical_failure(&self, roll: u32) -> bool {
        self.failure.contains(&roll)
    }

    fn describe(range: &RangeInclusive<u32>) -> String {
        if range.is_empty() {
            "none".to_string()
        } else if range.start() == range.end() {
            range.start().to_string()
        } else {
            format!("{}-{}", range.start(), range.end())
        }
    }
}

impl std::fmt::Display for CriticalRanges {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "critical {}, fumble {}",
            Self::describe(&self.success),
            Self::describe(&self.failure)
        )
    }
}

/// Compute the critical ranges for a skill under a raw variant id.
///
/// Ids outside 1-4 are rejected with [`MechError::InvalidRuleVariant`].
pub fn critical_ranges(skill: u32, variant_id: i64) -> MechResult<CriticalRanges> {
    Ok(RuleVariant::from_id(variant_id)?.ranges(skill))
}
