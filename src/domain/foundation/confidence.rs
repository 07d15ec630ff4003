//! Confidence value object (integer percentage, 0-100).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How sure the engine is about a match, as a whole percentage.
///
/// Serializes as a bare integer; deserializing anything above 100 fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Confidence(u8);

impl Confidence {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Converts a 0.0-1.0 ratio into a rounded percentage.
    ///
    /// Negative and non-finite ratios map to zero; ratios above 1.0 cap at 100.
    pub fn from_ratio(ratio: f64) -> Self {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Self::ZERO;
        }
        Self((ratio.min(1.0) * 100.0).round() as u8)
    }

    /// Scales this confidence by `factor`, staying within bounds.
    pub fn discounted(self, factor: f64) -> Self {
        Self::from_ratio(self.as_fraction() * factor)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u8> for Confidence {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "confidence",
                0.0,
                100.0,
                f64::from(value),
            ));
        }
        Ok(Self(value))
    }
}

impl From<Confidence> for u8 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
