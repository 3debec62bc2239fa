//! Virtual temperature sensor: a pseudo-random reading on every call.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use thermohub_app::ports::{TEMPERATURE_RANGE, TemperatureSensor};

/// A simulated temperature sensor.
///
/// Each reading is drawn uniformly from [`TEMPERATURE_RANGE`]. A seeded
/// sensor produces the same sequence of readings on every run.
pub struct RandomTemperatureSensor {
    rng: Mutex<StdRng>,
}

impl Default for RandomTemperatureSensor {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl RandomTemperatureSensor {
    /// A sensor with a deterministic reading sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl TemperatureSensor for RandomTemperatureSensor {
    fn read_temperature(&self) -> i64 {
        // the generator state is valid whatever a panicking holder left behind
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(TEMPERATURE_RANGE)
    }
}
