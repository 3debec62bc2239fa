//! Typed identifier for thermostats.
//!
//! Identifiers are positive integers handed out by the registry. They are
//! never reused and never change once assigned.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Thermostat`](crate::thermostat::Thermostat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThermostatId(u64);

impl ThermostatId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the inner value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ThermostatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a string is not a valid [`ThermostatId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// Only ASCII digit sequences are identifiers (no sign, no whitespace).
    #[error("identifier must be a non-empty digit sequence")]
    NotDigits,

    #[error("identifier out of range")]
    OutOfRange(#[from] ParseIntError),
}

impl FromStr for ThermostatId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u64::from_str` accepts a leading `+`, which is not a digit.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError::NotDigits);
        }
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_digit_sequence() {
        let id: ThermostatId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn should_accept_leading_zeros() {
        let id: ThermostatId = "007".parse().unwrap();
        assert_eq!(id, ThermostatId::new(7));
    }

    #[test]
    fn should_reject_sign_and_letters() {
        assert_eq!("+1".parse::<ThermostatId>(), Err(ParseIdError::NotDigits));
        assert_eq!("-1".parse::<ThermostatId>(), Err(ParseIdError::NotDigits));
        assert_eq!("abc".parse::<ThermostatId>(), Err(ParseIdError::NotDigits));
        assert_eq!("".parse::<ThermostatId>(), Err(ParseIdError::NotDigits));
    }

    #[test]
    fn should_report_out_of_range_for_huge_number() {
        let result = "99999999999999999999999".parse::<ThermostatId>();
        assert!(matches!(result, Err(ParseIdError::OutOfRange(_))));
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&ThermostatId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
