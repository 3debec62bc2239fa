//! Shared application state for axum handlers.

use std::sync::Arc;

use thermohub_app::ports::TemperatureSensor;
use thermohub_app::services::thermostat_service::ThermostatService;

/// Application state shared across all axum handlers.
///
/// Generic over the temperature sensor to avoid dynamic dispatch.
/// `Clone` is implemented manually so the sensor itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Thermostat read/patch service.
    pub thermostat_service: Arc<ThermostatService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            thermostat_service: Arc::clone(&self.thermostat_service),
        }
    }
}

impl<S> AppState<S>
where
    S: TemperatureSensor + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(thermostat_service: ThermostatService<S>) -> Self {
        Self {
            thermostat_service: Arc::new(thermostat_service),
        }
    }
}
