//! Patch: a partial update to a thermostat.
//!
//! Building a [`ThermostatPatch`] checks the *keys* only: every key must be a
//! writable [`Field`]. The *values* are validated later, one at a time, by
//! [`Thermostat::apply`](crate::thermostat::Thermostat::apply).

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::field::Field;

/// An ordered list of field changes whose keys have all been checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermostatPatch {
    changes: Vec<(Field, Value)>,
}

impl ThermostatPatch {
    /// The changes in application order.
    pub fn changes(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.changes.iter().map(|(field, value)| (*field, value))
    }

    /// The patched fields in application order.
    pub fn fields(&self) -> impl Iterator<Item = Field> {
        self.changes.iter().map(|(field, _)| *field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }
}

impl TryFrom<Map<String, Value>> for ThermostatPatch {
    type Error = ValidationError;

    /// Keys are checked in document order; the first one that is not a
    /// writable field is reported.
    fn try_from(document: Map<String, Value>) -> Result<Self, Self::Error> {
        let changes = document
            .into_iter()
            .map(|(key, value)| key.parse::<Field>().map(|field| (field, value)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { changes })
    }
}

impl TryFrom<Value> for ThermostatPatch {
    type Error = ValidationError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        match document {
            Value::Object(map) => Self::try_from(map),
            _ => Err(ValidationError::MalformedInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_preserve_document_key_order() {
        let patch =
            ThermostatPatch::try_from(json!({"fanMode": "off", "name": "x", "coolPoint": 70}))
                .unwrap();
        let fields: Vec<Field> = patch.fields().collect();
        assert_eq!(fields, vec![Field::FanMode, Field::Name, Field::CoolPoint]);
    }

    #[test]
    fn should_reject_non_object_document() {
        for document in [json!([1, 2]), json!("name"), json!(3), Value::Null] {
            assert_eq!(
                ThermostatPatch::try_from(document),
                Err(ValidationError::MalformedInput)
            );
        }
    }

    #[test]
    fn should_report_first_unknown_key() {
        let result = ThermostatPatch::try_from(json!({"name": "x", "bogus": 1, "ID": 2}));
        assert_eq!(result, Err(ValidationError::UnknownField("bogus".to_string())));
    }

    #[test]
    fn should_accept_empty_object() {
        let patch = ThermostatPatch::try_from(json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn should_not_check_values_when_building() {
        let patch = ThermostatPatch::try_from(json!({"coolPoint": "warm"})).unwrap();
        assert_eq!(patch.len(), 1);
    }

    #[test]
    fn should_keep_values_alongside_fields() {
        let patch = ThermostatPatch::try_from(json!({"name": "a", "fanMode": "auto"})).unwrap();
        let changes: Vec<(Field, &Value)> = patch.changes().collect();
        assert_eq!(
            changes,
            vec![(Field::Name, &json!("a")), (Field::FanMode, &json!("auto"))]
        );
    }
}
