//! Set point: a target temperature in degrees Fahrenheit.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A temperature set point, always within [`SetPoint::RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SetPoint(u8);

/// Returned when a candidate set point falls outside [`SetPoint::RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("set point {0} is outside 30..=100")]
pub struct OutOfRange(pub i64);

impl SetPoint {
    /// Accepted degrees, inclusive on both ends.
    pub const RANGE: RangeInclusive<i64> = 30..=100;

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SetPoint {
    type Error = OutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if !Self::RANGE.contains(&value) {
            return Err(OutOfRange(value));
        }
        u8::try_from(value).map(Self).map_err(|_| OutOfRange(value))
    }
}

impl From<SetPoint> for i64 {
    fn from(point: SetPoint) -> Self {
        Self::from(point.0)
    }
}

impl fmt::Display for SetPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
