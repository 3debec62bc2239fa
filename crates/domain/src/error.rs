//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! Nothing here knows about HTTP status codes; the HTTP adapter is the only
//! place where these are turned into responses.

use crate::field::Field;
use crate::id::ThermostatId;

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum ThermostatError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A value or field name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value has the wrong JSON type for the field.
    #[error("invalid type for field {0}")]
    TypeMismatch(Field),

    /// The value has the right type but breaks the field's constraint.
    #[error("invalid value for field {field}: {reason}")]
    InvalidValue { field: Field, reason: &'static str },

    /// The name does not denote a known (or, for patches, a writable) field.
    #[error("invalid field {0}")]
    UnknownField(String),

    /// The patch document is not a key-value mapping.
    #[error("malformed patch document")]
    MalformedInput,
}

/// No thermostat with the requested id exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("thermostat {id} not found")]
pub struct NotFoundError {
    pub id: ThermostatId,
}
