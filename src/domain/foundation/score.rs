//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Creates a score, clamping to 100.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a score, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "score",
                0.0,
                100.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Rounds and clamps an arbitrary number into range. NaN becomes zero.
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
