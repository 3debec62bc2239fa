//! Field names and validators.
//!
//! [`Attribute`] lists every key a thermostat can be projected onto.
//! [`Field`] is the writable subset. `ID` and `temperature` are attributes but
//! not fields, so they can never be patched.
//!
//! | Field | Type | Constraint |
//! |-------|------|------------|
//! | `name` | string | non-empty |
//! | `operatingMode` | string | `cool`, `heat` or `off` |
//! | `coolPoint` | integer | 30 ≤ v ≤ 100 |
//! | `heatPoint` | integer | 30 ≤ v ≤ 100 |
//! | `fanMode` | string | `off` or `auto` |

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ValidationError;
use crate::thermostat::{FanMode, OperatingMode, SetPoint, Thermostat};

/// A writable thermostat setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    OperatingMode,
    CoolPoint,
    HeatPoint,
    FanMode,
}

impl Field {
    /// Every field, in validation order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::OperatingMode,
        Self::CoolPoint,
        Self::HeatPoint,
        Self::FanMode,
    ];

    /// The JSON key for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::OperatingMode => "operatingMode",
            Self::CoolPoint => "coolPoint",
            Self::HeatPoint => "heatPoint",
            Self::FanMode => "fanMode",
        }
    }

    /// Validate `value` and store it on `thermostat`.
    ///
    /// The thermostat is untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TypeMismatch`] when `value` has the wrong
    /// JSON type, or [`ValidationError::InvalidValue`] when it breaks the
    /// field's constraint.
    pub fn apply(self, thermostat: &mut Thermostat, value: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Name => thermostat.name = validate_name(value)?,
            Self::OperatingMode => thermostat.operating_mode = validate_operating_mode(value)?,
            Self::CoolPoint => thermostat.cool_point = validate_set_point(self, value)?,
            Self::HeatPoint => thermostat.heat_point = validate_set_point(self, value)?,
            Self::FanMode => thermostat.fan_mode = validate_fan_mode(value)?,
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Attribute>()?
            .field()
            .ok_or_else(|| ValidationError::UnknownField(s.to_owned()))
    }
}

/// Any key a thermostat can be projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Id,
    Name,
    OperatingMode,
    CoolPoint,
    HeatPoint,
    FanMode,
    Temperature,
}

impl Attribute {
    /// Every attribute, in the order of a full projection.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::OperatingMode,
        Self::CoolPoint,
        Self::HeatPoint,
        Self::FanMode,
        Self::Temperature,
    ];

    /// The JSON key for this attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Temperature => "temperature",
            Self::Name => Field::Name.as_str(),
            Self::OperatingMode => Field::OperatingMode.as_str(),
            Self::CoolPoint => Field::CoolPoint.as_str(),
            Self::HeatPoint => Field::HeatPoint.as_str(),
            Self::FanMode => Field::FanMode.as_str(),
        }
    }

    /// The writable field behind this attribute, if any.
    #[must_use]
    pub const fn field(self) -> Option<Field> {
        match self {
            Self::Id | Self::Temperature => None,
            Self::Name => Some(Field::Name),
            Self::OperatingMode => Some(Field::OperatingMode),
            Self::CoolPoint => Some(Field::CoolPoint),
            Self::HeatPoint => Some(Field::HeatPoint),
            Self::FanMode => Some(Field::FanMode),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_owned()))
    }
}

/// Validate a display name.
///
/// # Errors
///
/// Fails when `value` is not a string or is empty.
pub fn validate_name(value: &Value) -> Result<String, ValidationError> {
    let Value::String(name) = value else {
        return Err(ValidationError::TypeMismatch(Field::Name));
    };
    if name.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: Field::Name,
            reason: "empty name",
        });
    }
    Ok(name.clone())
}

/// Validate an operating mode.
///
/// # Errors
///
/// Fails when `value` is not a string or names no [`OperatingMode`].
pub fn validate_operating_mode(value: &Value) -> Result<OperatingMode, ValidationError> {
    let Value::String(mode) = value else {
        return Err(ValidationError::TypeMismatch(Field::OperatingMode));
    };
    mode.parse().map_err(|_| ValidationError::InvalidValue {
        field: Field::OperatingMode,
        reason: "invalid operating_mode state",
    })
}

/// Validate a fan mode.
///
/// # Errors
///
/// Fails when `value` is not a string or names no [`FanMode`].
pub fn validate_fan_mode(value: &Value) -> Result<FanMode, ValidationError> {
    let Value::String(mode) = value else {
        return Err(ValidationError::TypeMismatch(Field::FanMode));
    };
    mode.parse().map_err(|_| ValidationError::InvalidValue {
        field: Field::FanMode,
        reason: "invalid fan_mode state",
    })
}

/// Validate a cool or heat set point for `field`.
///
/// Only integral JSON numbers are integers: `80.0` is a type mismatch.
///
/// # Errors
///
/// Fails when `value` is not an integer or lies outside [`SetPoint::RANGE`].
pub fn validate_set_point(field: Field, value: &Value) -> Result<SetPoint, ValidationError> {
    let out_of_range = ValidationError::InvalidValue {
        field,
        reason: match field {
            Field::HeatPoint => "invalid heat_point",
            _ => "invalid cool_point",
        },
    };
    let Value::Number(number) = value else {
        return Err(ValidationError::TypeMismatch(field));
    };
    match number.as_i64() {
        Some(degrees) => SetPoint::try_from(degrees).map_err(|_| out_of_range),
        // an integer too large for i64 is still an integer
        None if number.is_u64() => Err(out_of_range),
        None => Err(ValidationError::TypeMismatch(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_roundtrip_every_attribute_name() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.as_str().parse::<Attribute>(), Ok(attribute));
        }
    }

    #[test]
    fn should_parse_writable_fields() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn should_refuse_id_and_temperature_as_fields() {
        assert_eq!(
            "ID".parse::<Field>(),
            Err(ValidationError::UnknownField("ID".to_string()))
        );
        assert_eq!(
            "temperature".parse::<Field>(),
            Err(ValidationError::UnknownField("temperature".to_string()))
        );
    }

    #[test]
    fn should_refuse_snake_case_names() {
        assert_eq!(
            "cool_point".parse::<Attribute>(),
            Err(ValidationError::UnknownField("cool_point".to_string()))
        );
    }

    #[test]
    fn should_reject_non_string_name() {
        assert_eq!(
            validate_name(&json!(5)),
            Err(ValidationError::TypeMismatch(Field::Name))
        );
    }

    #[test]
    fn should_reject_empty_name() {
        assert!(matches!(
            validate_name(&json!("")),
            Err(ValidationError::InvalidValue {
                field: Field::Name,
                ..
            })
        ));
    }

    #[test]
    fn should_reject_unknown_operating_mode() {
        assert_eq!(
            validate_operating_mode(&json!("auto")),
            Err(ValidationError::InvalidValue {
                field: Field::OperatingMode,
                reason: "invalid operating_mode state",
            })
        );
    }

    #[test]
    fn should_reject_non_string_fan_mode() {
        assert_eq!(
            validate_fan_mode(&json!(true)),
            Err(ValidationError::TypeMismatch(Field::FanMode))
        );
    }

    #[test]
    fn should_treat_float_set_point_as_type_mismatch() {
        assert_eq!(
            validate_set_point(Field::CoolPoint, &json!(80.0)),
            Err(ValidationError::TypeMismatch(Field::CoolPoint))
        );
    }

    #[test]
    fn should_treat_bool_and_null_set_point_as_type_mismatch() {
        assert_eq!(
            validate_set_point(Field::HeatPoint, &json!(true)),
            Err(ValidationError::TypeMismatch(Field::HeatPoint))
        );
        assert_eq!(
            validate_set_point(Field::HeatPoint, &Value::Null),
            Err(ValidationError::TypeMismatch(Field::HeatPoint))
        );
    }

    #[test]
    fn should_name_the_set_point_in_out_of_range_reason() {
        let cool = validate_set_point(Field::CoolPoint, &json!(29)).unwrap_err();
        assert_eq!(
            cool.to_string(),
            "invalid value for field coolPoint: invalid cool_point"
        );

        let heat = validate_set_point(Field::HeatPoint, &json!(101)).unwrap_err();
        assert_eq!(
            heat,
            ValidationError::InvalidValue {
                field: Field::HeatPoint,
                reason: "invalid heat_point",
            }
        );
    }

    #[test]
    fn should_treat_huge_integer_as_invalid_value() {
        assert!(matches!(
            validate_set_point(Field::CoolPoint, &json!(u64::MAX)),
            Err(ValidationError::InvalidValue {
                field: Field::CoolPoint,
                ..
            })
        ));
    }

    #[test]
    fn should_accept_set_point_bounds() {
        assert_eq!(
            validate_set_point(Field::CoolPoint, &json!(30)).map(SetPoint::get),
            Ok(30)
        );
        assert_eq!(
            validate_set_point(Field::CoolPoint, &json!(100)).map(SetPoint::get),
            Ok(100)
        );
    }
}
