//! Randomness sources for dice draws.

use rand::Rng;
use rand::rngs::StdRng;

/// Produces uniformly distributed integers for die faces.
pub trait RandomSource {
    /// Draw a value in `1..=sides`. A zero-sided request yields 1.
    fn roll_die(&mut self, sides: u32) -> u32;
}

impl RandomSource for StdRng {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A source that replays a fixed sequence of faces.
///
/// Values are clamped onto the requested die, and the sequence wraps around
/// once exhausted. An empty script always rolls 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// How many draws have been taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRolls {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let value = if self.values.is_empty() {
            1
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value.clamp(1, sides.max(1))
    }
}
