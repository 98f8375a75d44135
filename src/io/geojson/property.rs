//! Codec between JSON values and [`PropertyValue`].

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::{GeoJsonError, GeoJsonResult};
use crate::io::geojson::position::check_finite;
use crate::io::geojson::{DepthGuard, BBOX_MEMBER, TYPE_MEMBER};
use crate::property::{Properties, PropertyValue};

fn read_number(number: &Number) -> GeoJsonResult<PropertyValue> {
    if let Some(value) = number.as_i64() {
        Ok(PropertyValue::Integer(value))
    } else if let Some(value) = number.as_f64() {
        Ok(PropertyValue::Float(value))
    } else {
        Err(GeoJsonError::UnsupportedValueKind(format!("number {number}")))
    }
}

pub(crate) fn read_property_value(
    value: &Value,
    guard: DepthGuard,
) -> GeoJsonResult<PropertyValue> {
    let value = match value {
        Value::Null => PropertyValue::Null,
        Value::Bool(b) => PropertyValue::Bool(*b),
        Value::Number(n) => read_number(n)?,
        Value::String(s) => PropertyValue::String(s.clone()),
        Value::Array(values) => {
            let guard = guard.descend()?;
            PropertyValue::Array(
                values
                    .iter()
                    .map(|v| read_property_value(v, guard))
                    .collect::<GeoJsonResult<_>>()?,
            )
        }
        Value::Object(members) => {
            let guard = guard.descend()?;
            PropertyValue::Object(
                members
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), read_property_value(v, guard)?)))
                    .collect::<GeoJsonResult<_>>()?,
            )
        }
    };
    Ok(value)
}

/// Collects every member of a geometry object except `type`, `bbox` and the payload member.
pub(crate) fn read_additional_properties(
    object: &Map<String, Value>,
    payload_member: &str,
    guard: DepthGuard,
) -> GeoJsonResult<Properties> {
    object
        .iter()
        .filter(|(name, _)| !is_reserved_member(name, payload_member))
        .map(|(name, value)| Ok((name.clone(), read_property_value(value, guard)?)))
        .collect()
}

pub(crate) fn is_reserved_member(name: &str, payload_member: &str) -> bool {
    name == TYPE_MEMBER || name == BBOX_MEMBER || name == payload_member
}

/// A property value paired with the depth it is written at.
pub(crate) struct GuardedValue<'a> {
    pub(crate) value: &'a PropertyValue,
    pub(crate) guard: DepthGuard,
}

impl Serialize for GuardedValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            PropertyValue::Null => serializer.serialize_unit(),
            PropertyValue::Bool(b) => serializer.serialize_bool(*b),
            PropertyValue::Integer(i) => serializer.serialize_i64(*i),
            PropertyValue::Float(f) => serializer.serialize_f64(check_finite::<S::Error>(*f)?),
            PropertyValue::String(s) => serializer.serialize_str(s),
            PropertyValue::Array(values) => {
                let guard = self.guard.descend().map_err(S::Error::custom)?;
                serializer.collect_seq(values.iter().map(|value| GuardedValue { value, guard }))
            }
            PropertyValue::Object(members) => {
                let guard = self.guard.descend().map_err(S::Error::custom)?;
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for (name, value) in members {
                    map.serialize_entry(name, &GuardedValue { value, guard })?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GuardedValue {
            value: self,
            guard: DepthGuard::default(),
        }
        .serialize(serializer)
    }
}

impl TryFrom<&Value> for PropertyValue {
    type Error = GeoJsonError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        read_property_value(value, DepthGuard::default())
    }
}

impl TryFrom<&PropertyValue> for Value {
    type Error = GeoJsonError;

    fn try_from(value: &PropertyValue) -> Result<Self, Self::Error> {
        let value = match value {
            PropertyValue::Null => Value::Null,
            PropertyValue::Bool(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::Number((*i).into()),
            PropertyValue::Float(f) => {
                Value::Number(Number::from_f64(*f).ok_or(GeoJsonError::NonFiniteNumber(*f))?)
            }
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Array(values) => Value::Array(
                values
                    .iter()
                    .map(Value::try_from)
                    .collect::<GeoJsonResult<_>>()?,
            ),
            PropertyValue::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(name, value)| Ok((name.clone(), Value::try_from(value)?)))
                    .collect::<GeoJsonResult<_>>()?,
            ),
        };
        Ok(value)
    }
}
