//! Dice types and randomness sources.
//!
//! Checks never touch an RNG directly; they draw through a
//! [`RandomSource`], so a seeded [`StdRng`](rand::rngs::StdRng) and a
//! [`ScriptedRolls`] replay are interchangeable.

pub mod source;

pub use source::{RandomSource, ScriptedRolls};

use serde::{Deserialize, Serialize};

/// A die type, identified by its number of faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Ten-sided die, also used for each digit of a percentile roll.
    D10,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of faces, e.g. an attribute-sized die.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D10 => 10,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The die with the given number of faces.
    pub fn with_sides(sides: u32) -> Self {
        match sides {
            10 => Self::D10,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Roll this die once.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> DieResult {
        let value = rng.roll_die(self.sides());
        tracing::debug!(die = %self, value, "die rolled");
        DieResult { die: self, value }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

impl std::fmt::Display for DieResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.die, self.value)
    }
}
