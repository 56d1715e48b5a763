//! Paired-roll resolution (hope/fear).
//!
//! Two attributes are each turned into a die sized by their magnitude. The
//! larger attribute supplies the higher-potential die (the first-named wins
//! ties). Both dice are rolled and classified, in order:
//! - both 1: critical failure
//! - equal and 6 or more: critical success, difficulty ignored
//! - equal otherwise: tie
//! - else the total is compared against the difficulty (≥ succeeds) and the
//!   larger face decides whether the higher or lower side flavors the result

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieResult, RandomSource};
use crate::error::{MechError, MechResult};

/// Doubles at or above this face are a critical success.
pub const CRITICAL_DOUBLES_MIN: u32 = 6;

/// An attribute with a positive magnitude, ready to be rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedAttribute {
    /// Display label (attribute name or the literal the user typed).
    pub label: String,
    /// Die size for this attribute.
    pub magnitude: u32,
}

impl PairedAttribute {
    /// Validate a resolved magnitude; zero, negative, or beyond `u32` is
    /// invalid input.
    pub fn new(label: impl Into<String>, magnitude: i64) -> MechResult<Self> {
        let label = label.into();
        if magnitude <= 0 {
            return Err(MechError::InvalidInput(format!(
                "attribute '{label}' has non-positive value {magnitude}"
            )));
        }
        let magnitude = u32::try_from(magnitude).map_err(|_| {
            MechError::InvalidInput(format!("attribute '{label}' value {magnitude} is too large"))
        })?;
        Ok(Self { label, magnitude })
    }

    fn die(&self) -> Die {
        Die::with_sides(self.magnitude)
    }
}

/// The classified result of a paired roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairedOutcome {
    /// Both dice show 1.
    CriticalFailure,
    /// Doubles of 6 or more.
    CriticalSuccess,
    /// Doubles below 6; no pass/fail is computed.
    Tie,
    /// Higher die shows more and the total meets the difficulty.
    HigherSuccess,
    /// Higher die shows more but the total falls short.
    HigherFailure,
    /// Lower die shows more and the total meets the difficulty.
    LowerSuccess,
    /// Lower die shows more and the total falls short.
    LowerFailure,
}

impl PairedOutcome {
    /// Classify two faces against a difficulty.
    ///
    /// `higher` is the face of the higher-potential die, `lower` the face of
    /// the lower-potential die.
    pub fn classify(higher: u32, lower: u32, difficulty: i64) -> Self {
        if higher == 1 && lower == 1 {
            return Self::CriticalFailure;
        }
        if higher == lower {
            return if higher >= CRITICAL_DOUBLES_MIN {
                Self::CriticalSuccess
            } else {
                Self::Tie
            };
        }

        let total = i64::from(higher) + i64::from(lower);
        let success = total >= difficulty;
        match (higher > lower, success) {
            (true, true) => Self::HigherSuccess,
            (true, false) => Self::HigherFailure,
            (false, true) => Self::LowerSuccess,
            (false, false) => Self::LowerFailure,
        }
    }

    /// Pass/fail for the non-critical, non-tie outcomes.
    pub fn success(self) -> Option<bool> {
        match self {
            Self::HigherSuccess | Self::LowerSuccess => Some(true),
            Self::HigherFailure | Self::LowerFailure => Some(false),
            Self::CriticalFailure | Self::CriticalSuccess | Self::Tie => None,
        }
    }

    /// True for either critical.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::CriticalFailure | Self::CriticalSuccess)
    }
}

impl std::fmt::Display for PairedOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalFailure => write!(f, "Critical Failure"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::Tie => write!(f, "Tie"),
            Self::HigherSuccess => write!(f, "Success with Hope"),
            Self::HigherFailure => write!(f, "Failure with Hope"),
            Self::LowerSuccess => write!(f, "Success with Fear"),
            Self::LowerFailure => write!(f, "Failure with Fear"),
        }
    }
}

/// A validated paired-roll check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedCheck {
    /// The first-named attribute.
    pub first: PairedAttribute,
    /// The second-named attribute.
    pub second: PairedAttribute,
    /// Total needed to succeed (inclusive).
    pub difficulty: i64,
}

impl PairedCheck {
    /// Create a check from two validated attributes.
    pub fn new(first: PairedAttribute, second: PairedAttribute, difficulty: i64) -> Self {
        Self {
            first,
            second,
            difficulty,
        }
    }

    /// The (higher-potential, lower-potential) attributes.
    ///
    /// Equal magnitudes favor the first-named attribute.
    pub fn assignment(&self) -> (&PairedAttribute, &PairedAttribute) {
        if self.first.magnitude >= self.second.magnitude {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }

    /// Roll both dice and classify the result.
    ///
    /// The higher-potential die is drawn first.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> PairedRoll {
        let (higher, lower) = self.assignment();
        let higher_die = higher.die().roll(rng);
        let lower_die = lower.die().roll(rng);
        self.resolve(higher_die, lower_die)
    }

    /// Classify already-rolled dice for this check.
    pub fn resolve(&self, higher_die: DieResult, lower_die: DieResult) -> PairedRoll {
        let (higher, lower) = self.assignment();
        PairedRoll {
            higher: higher.clone(),
            lower: lower.clone(),
            higher_die,
            lower_die,
            total: higher_die.value + lower_die.value,
            difficulty: self.difficulty,
            outcome: PairedOutcome::classify(higher_die.value, lower_die.value, self.difficulty),
        }
    }
}

/// Everything needed to describe a rolled paired check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedRoll {
    /// The higher-potential attribute.
    pub higher: PairedAttribute,
    /// The lower-potential attribute.
    pub lower: PairedAttribute,
    /// Face of the higher-potential die.
    pub higher_die: DieResult,
    /// Face of the lower-potential die.
    pub lower_die: DieResult,
    /// Sum of both faces.
    pub total: u32,
    /// The difficulty the total was compared against.
    pub difficulty: i64,
    /// The classification.
    pub outcome: PairedOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn attr(label: &str, magnitude: i64) -> PairedAttribute {
        PairedAttribute::new(label, magnitude).unwrap()
    }

    #[test]
    fn snake_eyes_is_critical_failure() {
        assert_eq!(PairedOutcome::classify(1, 1, 2), PairedOutcome::CriticalFailure);
        assert_eq!(PairedOutcome::classify(1, 1, -50), PairedOutcome::CriticalFailure);
    }

    #[test]
    fn high_doubles_ignore_difficulty() {
        assert_eq!(PairedOutcome::classify(7, 7, 999), PairedOutcome::CriticalSuccess);
        assert_eq!(PairedOutcome::classify(6, 6, 13), PairedOutcome::CriticalSuccess);
    }

    #[test]
    fn low_doubles_tie() {
        assert_eq!(PairedOutcome::classify(5, 5, 1), PairedOutcome::Tie);
        assert_eq!(PairedOutcome::classify(2, 2, 20), PairedOutcome::Tie);
        assert_eq!(PairedOutcome::Tie.success(), None);
    }

    #[test]
    fn difficulty_boundary_is_inclusive() {
        assert_eq!(PairedOutcome::classify(7, 2, 10), PairedOutcome::HigherFailure);
        assert_eq!(PairedOutcome::classify(7, 2, 9), PairedOutcome::HigherSuccess);
    }

    #[test]
    fn lower_side_wins_flavor() {
        assert_eq!(PairedOutcome::classify(2, 7, 9), PairedOutcome::LowerSuccess);
        assert_eq!(PairedOutcome::classify(2, 7, 10), PairedOutcome::LowerFailure);
        assert_eq!(PairedOutcome::LowerSuccess.success(), Some(true));
        assert_eq!(PairedOutcome::LowerFailure.success(), Some(false));
    }

    #[test]
    fn non_positive_magnitude_rejected() {
        assert!(matches!(
            PairedAttribute::new("might", 0),
            Err(MechError::InvalidInput(_))
        ));
        assert!(PairedAttribute::new("might", -3).is_err());
        assert!(PairedAttribute::new("might", 1).is_ok());
    }

    #[test]
    fn oversized_magnitude_is_too_large_not_non_positive() {
        let Err(MechError::InvalidInput(msg)) = PairedAttribute::new("might", 5_000_000_000) else {
            panic!("oversized magnitude accepted");
        };
        assert!(msg.contains("too large"), "{msg}");
        assert!(!msg.contains("non-positive"), "{msg}");
        assert_eq!(
            PairedAttribute::new("might", i64::from(u32::MAX)).unwrap().magnitude,
            u32::MAX
        );
    }

    #[test]
    fn larger_magnitude_is_higher_potential() {
        let check = PairedCheck::new(attr("dex", 6), attr("wil", 10), 10);
        let (higher, lower) = check.assignment();
        assert_eq!(higher.label, "wil");
        assert_eq!(lower.label, "dex");
    }

    #[test]
    fn equal_magnitude_favors_first_named() {
        let check = PairedCheck::new(attr("dex", 10), attr("wil", 10), 10);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = check.roll(&mut rng);
            assert_eq!(roll.higher.label, "dex");
            assert_eq!(roll.lower.label, "wil");
        }
    }

    #[test]
    fn dice_sized_by_magnitude() {
        let check = PairedCheck::new(attr("dex", 4), attr("wil", 12), 8);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let roll = check.roll(&mut rng);
            assert_eq!(roll.higher_die.die, Die::Custom(12));
            assert_eq!(roll.lower_die.die, Die::Custom(4));
            assert!((1..=12).contains(&roll.higher_die.value));
            assert!((1..=4).contains(&roll.lower_die.value));
            assert_eq!(roll.total, roll.higher_die.value + roll.lower_die.value);
        }
    }

    #[test]
    fn scripted_roll_is_classified() {
        let check = PairedCheck::new(attr("ins", 10), attr("mig", 8), 10);
        let mut rng = ScriptedRolls::new(vec![7, 2]);
        let roll = check.roll(&mut rng);
        assert_eq!(roll.higher_die.die, Die::D10);
        assert_eq!(roll.higher_die.value, 7);
        assert_eq!(roll.lower_die.value, 2);
        assert_eq!(roll.total, 9);
        assert_eq!(roll.outcome, PairedOutcome::HigherFailure);
    }

    #[test]
    fn outcome_display() {
        assert_eq!(PairedOutcome::HigherSuccess.to_string(), "Success with Hope");
        assert_eq!(PairedOutcome::LowerFailure.to_string(), "Failure with Fear");
        assert!(PairedOutcome::CriticalSuccess.is_critical());
        assert!(!PairedOutcome::Tie.is_critical());
    }
}
