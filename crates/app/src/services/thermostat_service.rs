//! Thermostat service: use-cases for reading and patching thermostats.

use serde_json::{Map, Value};

use thermohub_domain::error::{NotFoundError, ThermostatError};
use thermohub_domain::id::ThermostatId;
use thermohub_domain::patch::ThermostatPatch;
use thermohub_domain::projection::Projection;
use thermohub_domain::thermostat::{Thermostat, ThermostatBuilder};

use crate::ports::TemperatureSensor;
use crate::registry::ThermostatRegistry;

/// Application service for thermostat operations.
pub struct ThermostatService<S> {
    registry: ThermostatRegistry,
    sensor: S,
}

impl<S: TemperatureSensor> ThermostatService<S> {
    /// Create a new service over `registry`, reading temperatures from `sensor`.
    pub fn new(registry: ThermostatRegistry, sensor: S) -> Self {
        Self { registry, sensor }
    }

    /// Validate and register a new thermostat.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::Validation`] for the first invalid field.
    pub fn create(&self, builder: ThermostatBuilder) -> Result<Thermostat, ThermostatError> {
        let thermostat = self.registry.create(builder)?;
        tracing::info!(id = %thermostat.id(), name = thermostat.name(), "thermostat created");
        Ok(thermostat)
    }

    /// Render every thermostat with the requested `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::Validation`] when `fields` names an unknown
    /// attribute.
    pub fn list(&self, fields: Option<&str>) -> Result<Vec<Map<String, Value>>, ThermostatError> {
        let projection = Projection::parse(fields)?;
        let rendered = self.registry.with_all(|thermostats| {
            thermostats
                .iter()
                .map(|t| projection.render(t, self.sensor.read_temperature()))
                .collect::<Vec<_>>()
        });
        tracing::debug!(count = rendered.len(), "listed thermostats");
        Ok(rendered)
    }

    /// Look up a thermostat by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::NotFound`] when no thermostat with `id` exists.
    pub fn get_thermostat(&self, id: ThermostatId) -> Result<Thermostat, ThermostatError> {
        self.registry
            .find(id)
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Check that a thermostat with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::NotFound`] when no thermostat with `id` exists.
    pub fn ensure_exists(&self, id: ThermostatId) -> Result<(), ThermostatError> {
        if self.registry.contains(id) {
            Ok(())
        } else {
            Err(NotFoundError { id }.into())
        }
    }

    /// Render one thermostat with the requested `fields`.
    ///
    /// The id is resolved before `fields` is parsed, so a missing thermostat
    /// wins over an unknown field.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::NotFound`] when no thermostat with `id`
    /// exists, or [`ThermostatError::Validation`] when `fields` names an
    /// unknown attribute.
    pub fn get(
        &self,
        id: ThermostatId,
        fields: Option<&str>,
    ) -> Result<Map<String, Value>, ThermostatError> {
        let thermostat = self.get_thermostat(id)?;
        let projection = Projection::parse(fields)?;
        Ok(projection.render(&thermostat, self.sensor.read_temperature()))
    }

    /// Apply `patch` to the thermostat with `id`.
    ///
    /// The whole patch runs under the registry lock. When a value is rejected
    /// the changes applied before it are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ThermostatError::NotFound`] when no thermostat with `id`
    /// exists, or [`ThermostatError::Validation`] for the first rejected value.
    pub fn patch(
        &self,
        id: ThermostatId,
        patch: &ThermostatPatch,
    ) -> Result<Thermostat, ThermostatError> {
        let outcome = self
            .registry
            .update(id, |thermostat| {
                thermostat.apply(patch).map(|()| thermostat.clone())
            })
            .ok_or(NotFoundError { id })?;

        match outcome {
            Ok(thermostat) => {
                tracing::debug!(%id, changes = patch.len(), "thermostat patched");
                Ok(thermostat)
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "thermostat patch rejected");
                Err(err.into())
            }
        }
    }
}
