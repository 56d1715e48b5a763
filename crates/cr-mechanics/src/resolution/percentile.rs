//! Percentile resolution with rule-variant critical bands.
//!
//! A d100 is rolled as a units digit plus one or more tens digits (`00` with
//! `0` reads as 100). Bonus dice add extra tens digits and keep the lowest
//! total; penalty dice keep the highest. The roll is then checked against
//! the critical bands of the active [`RuleVariant`] before falling back to
//! the [`SuccessPredicate`] against the target number.

use serde::{Deserialize, Serialize};

use crate::dice::{Die, RandomSource};
use crate::error::{MechError, MechResult};
use crate::resolution::SuccessPredicate;
use crate::rules::{CriticalRanges, RuleVariant};

/// Maximum number of extra tens dice a modifier may add.
pub const MAX_EXTRA_DICE: u8 = 2;

/// Bonus or penalty dice applied to a percentile roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiceModifier {
    /// A plain d100.
    #[default]
    None,
    /// Extra tens dice, keep the lowest result.
    Bonus(u8),
    /// Extra tens dice, keep the highest result.
    Penalty(u8),
}

impl DiceModifier {
    /// Bonus dice, clamped to [`MAX_EXTRA_DICE`].
    pub fn bonus(count: u8) -> Self {
        match count.min(MAX_EXTRA_DICE) {
            0 => Self::None,
            n => Self::Bonus(n),
        }
    }

    /// Penalty dice, clamped to [`MAX_EXTRA_DICE`].
    pub fn penalty(count: u8) -> Self {
        match count.min(MAX_EXTRA_DICE) {
            0 => Self::None,
            n => Self::Penalty(n),
        }
    }

    /// Number of extra tens dice rolled.
    pub fn extra_dice(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bonus(n) | Self::Penalty(n) => n.min(MAX_EXTRA_DICE),
        }
    }
}

/// The raw dice behind a percentile result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileRoll {
    /// Units digit (0-9).
    pub units: u32,
    /// Every tens digit rolled (0-9), in draw order.
    pub tens: Vec<u32>,
    /// The kept result (1-100).
    pub value: u32,
}

impl PercentileRoll {
    /// Roll a d100 with the given modifier.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R, modifier: DiceModifier) -> Self {
        let units = digit(Die::D10.roll(rng).value);
        let tens: Vec<u32> = (0..=modifier.extra_dice())
            .map(|_| digit(Die::D10.roll(rng).value))
            .collect();
        let mut candidates = tens.iter().map(|&t| combine(t, units));
        let value = match modifier {
            DiceModifier::Bonus(_) => candidates.min(),
            DiceModifier::Penalty(_) => candidates.max(),
            DiceModifier::None => candidates.next(),
        }
        .unwrap_or(100);
        tracing::debug!(units, ?tens, value, "percentile rolled");
        Self { units, tens, value }
    }

    /// Describe a single known d100 value.
    pub fn from_value(value: u32) -> Self {
        let value = value.clamp(1, 100);
        let units = value % 10;
        let tens = (value / 10) % 10;
        Self {
            units,
            tens: vec![tens],
            value,
        }
    }

    /// Every candidate total this roll could have kept.
    pub fn candidates(&self) -> Vec<u32> {
        self.tens.iter().map(|&t| combine(t, self.units)).collect()
    }
}

/// Map a d10 face (1-10) onto a digit (0-9, with 10 reading as 0).
fn digit(face: u32) -> u32 {
    face % 10
}

fn combine(tens: u32, units: u32) -> u32 {
    match tens * 10 + units {
        0 => 100,
        v => v,
    }
}

/// The classified result of a percentile check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentileKind {
    /// Roll fell in the critical-success band.
    CriticalSuccess,
    /// Roll fell in the critical-failure band.
    CriticalFailure,
    /// No critical; pass/fail by the success predicate.
    Normal {
        /// Whether the roll met the target.
        success: bool,
    },
}

impl PercentileKind {
    /// Classify a roll. The success band is checked first.
    pub fn classify(
        roll: u32,
        ranges: &CriticalRanges,
        target: u32,
        predicate: SuccessPredicate,
    ) -> Self {
        if ranges.is_critical_success(roll) {
            Self::CriticalSuccess
        } else if ranges.is_critical_failure(roll) {
            Self::CriticalFailure
        } else {
            Self::Normal {
                success: predicate.test(roll, target),
            }
        }
    }
}

impl std::fmt::Display for PercentileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
            Self::Normal { success: true } => write!(f, "Success"),
            Self::Normal { success: false } => write!(f, "Failure"),
        }
    }
}

/// A validated percentile check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileCheck {
    /// Skill magnitude, which selects the critical bands.
    pub skill: u32,
    /// Number the roll is compared against (defaults to the skill).
    pub target: u32,
    /// Critical rule in effect.
    pub variant: RuleVariant,
    /// Bonus or penalty dice.
    pub modifier: DiceModifier,
    /// Comparison used when no critical applies.
    pub predicate: SuccessPredicate,
}

impl PercentileCheck {
    /// Create a check against `skill`; zero or negative skills are invalid.
    pub fn new(skill: i64, variant: RuleVariant) -> MechResult<Self> {
        if skill <= 0 {
            return Err(MechError::InvalidInput(format!(
                "skill value must be positive, got {skill}"
            )));
        }
        let skill = u32::try_from(skill).map_err(|_| {
            MechError::InvalidInput(format!("skill value {skill} is too large"))
        })?;
        Ok(Self {
            skill,
            target: skill,
            variant,
            modifier: DiceModifier::None,
            predicate: SuccessPredicate::default(),
        })
    }

    /// Apply bonus or penalty dice.
    pub fn with_modifier(mut self, modifier: DiceModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Use a different success comparison.
    pub fn with_predicate(mut self, predicate: SuccessPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Critical bands for this check.
    pub fn ranges(&self) -> CriticalRanges {
        self.variant.ranges(self.skill)
    }

    /// Classify an already-rolled d100.
    pub fn evaluate(&self, roll: PercentileRoll) -> PercentileOutcome {
        let ranges = self.ranges();
        let kind = PercentileKind::classify(roll.value, &ranges, self.target, self.predicate);
        PercentileOutcome {
            roll,
            ranges,
            target: self.target,
            kind,
        }
    }

    /// Roll and classify.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> PercentileOutcome {
        self.evaluate(PercentileRoll::roll(rng, self.modifier))
    }
}

/// Everything needed to describe a rolled percentile check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentileOutcome {
    /// The dice.
    pub roll: PercentileRoll,
    /// The critical bands that were applied.
    pub ranges: CriticalRanges,
    /// The target number.
    pub target: u32,
    /// The classification.
    pub kind: PercentileKind,
}
