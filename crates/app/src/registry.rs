//! In-memory thermostat registry guarded by a single mutex.
//!
//! The registry owns every [`Thermostat`] and the id counter. Both sit behind
//! one lock, so id assignment never races and a patch is never observed
//! half-applied by a concurrent reader. All work under the lock is CPU-bound.

use std::sync::{Mutex, MutexGuard, PoisonError};

use thermohub_domain::error::ValidationError;
use thermohub_domain::id::ThermostatId;
use thermohub_domain::thermostat::{
    FanMode, NewThermostat, OperatingMode, Thermostat, ThermostatBuilder,
};

/// The thermostats every empty registry is seeded with on first read.
#[must_use]
pub fn default_thermostats() -> [ThermostatBuilder; 2] {
    [
        Thermostat::builder()
            .name("thermostat 1")
            .operating_mode(OperatingMode::Cool)
            .cool_point(76)
            .heat_point(62)
            .fan_mode(FanMode::Auto),
        Thermostat::builder()
            .name("thermostat 2")
            .operating_mode(OperatingMode::Heat)
            .cool_point(77)
            .heat_point(63)
            .fan_mode(FanMode::Auto),
    ]
}

#[derive(Debug, Default)]
struct Inner {
    thermostats: Vec<Thermostat>,
    last_id: u64,
}

impl Inner {
    fn insert(&mut self, new: NewThermostat) -> Thermostat {
        self.last_id += 1;
        let thermostat = new.with_id(ThermostatId::new(self.last_id));
        self.thermostats.push(thermostat.clone());
        thermostat
    }

    fn seed_if_empty(&mut self) {
        if !self.thermostats.is_empty() {
            return;
        }
        for builder in default_thermostats() {
            match builder.build() {
                Ok(new) => {
                    let thermostat = self.insert(new);
                    tracing::debug!(id = %thermostat.id(), name = thermostat.name(), "seeded thermostat");
                }
                Err(err) => tracing::error!(error = %err, "invalid seed thermostat"),
            }
        }
    }
}

/// Process-wide thermostat collection plus id counter.
///
/// Constructed once by the composition root and shared (behind an `Arc`)
/// with every request handler.
#[derive(Debug, Default)]
pub struct ThermostatRegistry {
    inner: Mutex<Inner>,
}

impl ThermostatRegistry {
    /// Create an empty registry. It is seeded lazily on first read.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation validates before it writes, so a panic while the lock
    // was held cannot have left an invalid thermostat behind.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate `builder` and append the thermostat with the next id.
    ///
    /// Does not seed the defaults.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] of the builder. Nothing is
    /// inserted and no id is consumed in that case.
    pub fn create(&self, builder: ThermostatBuilder) -> Result<Thermostat, ValidationError> {
        let new = builder.build()?;
        Ok(self.lock().insert(new))
    }

    /// Run `f` over every thermostat, in insertion order, while holding the lock.
    pub fn with_all<R>(&self, f: impl FnOnce(&[Thermostat]) -> R) -> R {
        let mut inner = self.lock();
        inner.seed_if_empty();
        f(&inner.thermostats)
    }

    /// Snapshot of every thermostat, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Thermostat> {
        self.with_all(<[Thermostat]>::to_vec)
    }

    /// Look up a thermostat by id. Absence is not an error here.
    #[must_use]
    pub fn find(&self, id: ThermostatId) -> Option<Thermostat> {
        self.with_all(|thermostats| thermostats.iter().find(|t| t.id() == id).cloned())
    }

    /// Whether a thermostat with `id` exists.
    #[must_use]
    pub fn contains(&self, id: ThermostatId) -> bool {
        self.with_all(|thermostats| thermostats.iter().any(|t| t.id() == id))
    }

    /// Run `f` on the thermostat with `id` while holding the lock.
    ///
    /// Returns `None` when no such thermostat exists.
    pub fn update<R>(&self, id: ThermostatId, f: impl FnOnce(&mut Thermostat) -> R) -> Option<R> {
        let mut inner = self.lock();
        inner.seed_if_empty();
        inner.thermostats.iter_mut().find(|t| t.id() == id).map(f)
    }
}
