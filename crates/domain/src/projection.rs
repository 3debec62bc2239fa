//! Projection: a field-filtered, serializable view of a thermostat.
//!
//! A projection is parsed from the `fields` query string: absent means every
//! [`Attribute`], otherwise a comma-separated list of attribute names.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::field::Attribute;
use crate::thermostat::Thermostat;

/// Which attributes to include when rendering a thermostat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    attributes: Vec<Attribute>,
}

impl Default for Projection {
    fn default() -> Self {
        Self::all()
    }
}

impl Projection {
    /// Every attribute, in declaration order.
    #[must_use]
    pub fn all() -> Self {
        Self {
            attributes: Attribute::ALL.to_vec(),
        }
    }

    /// Parse an optional comma-separated field list.
    ///
    /// Repeated names are kept once, at their first position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownField`] carrying the first name that
    /// is not an attribute. An empty list item (as in `"name,"`) is an
    /// unknown field named `""`.
    pub fn parse(fields: Option<&str>) -> Result<Self, ValidationError> {
        let Some(fields) = fields else {
            return Ok(Self::all());
        };
        let mut attributes = Vec::new();
        for name in fields.split(',') {
            let attribute = name.parse::<Attribute>()?;
            if !attributes.contains(&attribute) {
                attributes.push(attribute);
            }
        }
        Ok(Self { attributes })
    }

    /// The attributes this projection renders.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Render `thermostat` with the given current `temperature`.
    #[must_use]
    pub fn render(&self, thermostat: &Thermostat, temperature: i64) -> Map<String, Value> {
        self.attributes
            .iter()
            .map(|attribute| {
                let value = match attribute {
                    Attribute::Id => Value::from(thermostat.id().get()),
                    Attribute::Name => Value::from(thermostat.name()),
                    Attribute::OperatingMode => Value::from(thermostat.operating_mode()),
                    Attribute::CoolPoint => Value::from(thermostat.cool_point().get()),
                    Attribute::HeatPoint => Value::from(thermostat.heat_point().get()),
                    Attribute::FanMode => Value::from(thermostat.fan_mode()),
                    Attribute::Temperature => Value::from(temperature),
                };
                (attribute.as_str().to_owned(), value)
            })
            .collect()
    }
}
