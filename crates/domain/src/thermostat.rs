//! Thermostat: the single resource exposed by thermohub.
//!
//! A thermostat has an immutable [`ThermostatId`] and five writable settings.
//! Every setting is validated before it is stored, so a [`Thermostat`] never
//! holds an invalid value. The current `temperature` is not stored here; it is
//! read from a sensor each time a thermostat is projected.

mod mode;
mod set_point;

pub use mode::{FanMode, OperatingMode, UnknownMode};
pub use set_point::{OutOfRange, SetPoint};

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::field::{self, Field};
use crate::id::ThermostatId;
use crate::patch::ThermostatPatch;

/// A home thermostat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thermostat {
    pub(crate) id: ThermostatId,
    pub(crate) name: String,
    pub(crate) operating_mode: OperatingMode,
    pub(crate) cool_point: SetPoint,
    pub(crate) heat_point: SetPoint,
    pub(crate) fan_mode: FanMode,
}

impl Thermostat {
    /// Create a builder for constructing a [`Thermostat`].
    #[must_use]
    pub fn builder() -> ThermostatBuilder {
        ThermostatBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> ThermostatId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn operating_mode(&self) -> OperatingMode {
        self.operating_mode
    }

    #[must_use]
    pub fn cool_point(&self) -> SetPoint {
        self.cool_point
    }

    #[must_use]
    pub fn heat_point(&self) -> SetPoint {
        self.heat_point
    }

    #[must_use]
    pub fn fan_mode(&self) -> FanMode {
        self.fan_mode
    }

    /// Apply a pre-checked patch, one change at a time in patch order.
    ///
    /// Application is **not** atomic: when a change fails validation the
    /// method returns immediately and changes applied before it are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TypeMismatch`] or
    /// [`ValidationError::InvalidValue`] for the first rejected value.
    pub fn apply(&mut self, patch: &ThermostatPatch) -> Result<(), ValidationError> {
        for (field, value) in patch.changes() {
            field.apply(self, value)?;
        }
        Ok(())
    }

    /// Check every key of `changes` and then apply them.
    ///
    /// No mutation happens unless every key names a writable field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] for the first key that is not
    /// writable (`ID` and `temperature` included), otherwise the errors of
    /// [`Thermostat::apply`].
    pub fn apply_patch(&mut self, changes: Map<String, Value>) -> Result<(), ValidationError> {
        let patch = ThermostatPatch::try_from(changes)?;
        self.apply(&patch)
    }
}

/// A fully validated thermostat that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThermostat {
    name: String,
    operating_mode: OperatingMode,
    cool_point: SetPoint,
    heat_point: SetPoint,
    fan_mode: FanMode,
}

impl NewThermostat {
    /// Attach the identifier assigned by the registry.
    #[must_use]
    pub fn with_id(self, id: ThermostatId) -> Thermostat {
        Thermostat {
            id,
            name: self.name,
            operating_mode: self.operating_mode,
            cool_point: self.cool_point,
            heat_point: self.heat_point,
            fan_mode: self.fan_mode,
        }
    }
}

/// Step-by-step builder for [`Thermostat`].
///
/// Values are accepted as raw JSON so construction runs the exact validators
/// used by patches.
#[derive(Debug, Default, Clone)]
pub struct ThermostatBuilder {
    name: Option<Value>,
    operating_mode: Option<Value>,
    cool_point: Option<Value>,
    heat_point: Option<Value>,
    fan_mode: Option<Value>,
}

impl ThermostatBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn operating_mode(mut self, mode: impl Into<Value>) -> Self {
        self.operating_mode = Some(mode.into());
        self
    }

    #[must_use]
    pub fn cool_point(mut self, point: impl Into<Value>) -> Self {
        self.cool_point = Some(point.into());
        self
    }

    #[must_use]
    pub fn heat_point(mut self, point: impl Into<Value>) -> Self {
        self.heat_point = Some(point.into());
        self
    }

    #[must_use]
    pub fn fan_mode(mut self, mode: impl Into<Value>) -> Self {
        self.fan_mode = Some(mode.into());
        self
    }

    /// Consume the builder and validate every field in declaration order.
    ///
    /// A missing value counts as `null` and fails its type check.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, checking `name`,
    /// `operatingMode`, `coolPoint`, `heatPoint` and then `fanMode`.
    pub fn build(self) -> Result<NewThermostat, ValidationError> {
        let null = Value::Null;
        Ok(NewThermostat {
            name: field::validate_name(self.name.as_ref().unwrap_or(&null))?,
            operating_mode: field::validate_operating_mode(
                self.operating_mode.as_ref().unwrap_or(&null),
            )?,
            cool_point: field::validate_set_point(
                Field::CoolPoint,
                self.cool_point.as_ref().unwrap_or(&null),
            )?,
            heat_point: field::validate_set_point(
                Field::HeatPoint,
                self.heat_point.as_ref().unwrap_or(&null),
            )?,
            fan_mode: field::validate_fan_mode(self.fan_mode.as_ref().unwrap_or(&null))?,
        })
    }
}
