//! # thermohub-adapter-virtual
//!
//! Virtual/demo integration that stands in for real thermostat hardware.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | Random temperature sensor | `TemperatureSensor` | Uniform reading in 60–90 °F on every call |
//!
//! ## Dependency rule
//!
//! Depends on `thermohub-app` (port traits) only.

mod sensor;

pub use sensor::RandomTemperatureSensor;
