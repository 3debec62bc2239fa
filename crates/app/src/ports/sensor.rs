//! Sensor port: where the current room temperature comes from.

use std::ops::RangeInclusive;
use std::sync::Arc;

/// Degrees Fahrenheit a sensor may report, inclusive on both ends.
pub const TEMPERATURE_RANGE: RangeInclusive<i64> = 60..=90;

/// Source of current temperature readings.
///
/// Called once per rendered thermostat, so two reads of the same thermostat
/// may differ. Implementations must stay within [`TEMPERATURE_RANGE`].
pub trait TemperatureSensor {
    /// Take a fresh reading.
    fn read_temperature(&self) -> i64;
}

impl<T: TemperatureSensor + ?Sized> TemperatureSensor for Arc<T> {
    fn read_temperature(&self) -> i64 {
        (**self).read_temperature()
    }
}
