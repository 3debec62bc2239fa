//! # thermohub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TemperatureSensor`: current temperature reading for a thermostat
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `ThermostatRegistry`: the shared, lock-guarded thermostat collection
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ThermostatService`: create, list, get, patch
//! - Orchestrate domain objects without knowing *how* readings are produced
//!   or how requests arrive
//!
//! ## Dependency rule
//! Depends on `thermohub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod services;
