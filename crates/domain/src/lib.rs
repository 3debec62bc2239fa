//! # thermohub-domain
//!
//! Pure domain model for the thermohub thermostat service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define the **Thermostat** (the only resource) and its value objects
//!   (operating mode, fan mode, set points)
//! - Define **Fields** (the mutable attributes) and their validators
//! - Define **Patches** (partial updates checked before they are applied)
//! - Define **Projections** (field-filtered serializable views)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod field;
pub mod patch;
pub mod projection;
pub mod thermostat;
