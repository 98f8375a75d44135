//! Codecs for positions and `bbox` arrays.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::bbox::BoundingBox;
use crate::coord::Coordinate;
use crate::error::{GeoJsonError, GeoJsonResult, JsonKind};

pub(crate) fn expect_array(value: &Value) -> GeoJsonResult<&[Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| GeoJsonError::wrong_shape(JsonKind::Array, value))
}

fn read_number(value: &Value) -> GeoJsonResult<f64> {
    value
        .as_f64()
        .ok_or_else(|| GeoJsonError::wrong_shape(JsonKind::Number, value))
}

/// Decodes a `[lon, lat]` or `[lon, lat, alt]` position.
pub(crate) fn read_position(value: &Value) -> GeoJsonResult<Coordinate> {
    match expect_array(value)? {
        [lon, lat] => Ok(Coordinate::new(read_number(lon)?, read_number(lat)?)),
        [lon, lat, alt] => Ok(Coordinate::new_with_altitude(
            read_number(lon)?,
            read_number(lat)?,
            read_number(alt)?,
        )),
        other => Err(GeoJsonError::InvalidCoordinateArity(other.len())),
    }
}

/// Decodes an array of positions.
pub(crate) fn read_positions(value: &Value) -> GeoJsonResult<Vec<Coordinate>> {
    expect_array(value)?.iter().map(read_position).collect()
}

/// Decodes a 4 or 6 element `bbox` array.
///
/// The 6 element form interleaves altitude: `[west, south, min_alt, east, north, max_alt]`.
pub(crate) fn read_bounding_box(value: &Value) -> GeoJsonResult<BoundingBox> {
    match expect_array(value)? {
        [west, south, east, north] => Ok(BoundingBox::new(
            read_number(west)?,
            read_number(south)?,
            read_number(east)?,
            read_number(north)?,
        )),
        [west, south, min_alt, east, north, max_alt] => Ok(BoundingBox::new_with_altitude(
            read_number(west)?,
            read_number(south)?,
            read_number(min_alt)?,
            read_number(east)?,
            read_number(north)?,
            read_number(max_alt)?,
        )),
        other => Err(GeoJsonError::InvalidBoundingBoxArity(other.len())),
    }
}

/// JSON has no encoding for NaN or infinity, so those values are rejected instead of being
/// written as `null`.
pub(crate) fn check_finite<E: serde::ser::Error>(value: f64) -> Result<f64, E> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(E::custom(GeoJsonError::NonFiniteNumber(value)))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.dim()))?;
        seq.serialize_element(&check_finite::<S::Error>(self.longitude())?)?;
        seq.serialize_element(&check_finite::<S::Error>(self.latitude())?)?;
        if let Some(altitude) = self.altitude() {
            seq.serialize_element(&check_finite::<S::Error>(altitude)?)?;
        }
        seq.end()
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values = self.to_vec();
        for value in &values {
            check_finite::<S::Error>(*value)?;
        }
        serializer.collect_seq(values)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn position_arity() {
        assert_eq!(
            read_position(&json!([30.0, 10.0])).unwrap(),
            Coordinate::new(30., 10.)
        );
        assert_eq!(
            read_position(&json!([30, 10, -2.5])).unwrap(),
            Coordinate::new_with_altitude(30., 10., -2.5)
        );
        for bad in [json!([]), json!([1]), json!([1, 2, 3, 4]), json!([1, 2, 3, 4, 5])] {
            let len = bad.as_array().unwrap().len();
            assert!(matches!(
                read_position(&bad),
                Err(GeoJsonError::InvalidCoordinateArity(n)) if n == len
            ));
        }
    }

    #[test]
    fn position_members_must_be_numbers() {
        assert!(matches!(
            read_position(&json!([1, "2"])),
            Err(GeoJsonError::WrongShape {
                expected: JsonKind::Number,
                found: JsonKind::String
            })
        ));
        assert!(matches!(
            read_position(&json!({"x": 1})),
            Err(GeoJsonError::WrongShape {
                expected: JsonKind::Array,
                found: JsonKind::Object
            })
        ));
    }

    #[test]
    fn bbox_arity() {
        for bad in [
            json!([]),
            json!([1, 2]),
            json!([1, 2, 3]),
            json!([1, 2, 3, 4, 5]),
            json!([1, 2, 3, 4, 5, 6, 7]),
        ] {
            let len = bad.as_array().unwrap().len();
            assert!(matches!(
                read_bounding_box(&bad),
                Err(GeoJsonError::InvalidBoundingBoxArity(n)) if n == len
            ));
        }
    }

    #[test]
    fn bbox_symmetry() {
        for array in [
            json!([0.0, 0.0, 4.0, 4.0]),
            json!([-10.5, -20.0, 30.0, 40.25]),
            json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
            json!([-180.0, -90.0, -100.0, 180.0, 90.0, 8848.0]),
        ] {
            let bbox = read_bounding_box(&array).unwrap();
            assert_eq!(serde_json::to_value(bbox).unwrap(), array);
        }
    }

    #[test]
    fn bbox_altitude_is_interleaved() {
        let bbox = read_bounding_box(&json!([1, 2, 3, 4, 5, 6])).unwrap();
        assert_eq!(bbox.west(), 1.);
        assert_eq!(bbox.south(), 2.);
        assert_eq!(bbox.min_altitude(), Some(3.));
        assert_eq!(bbox.east(), 4.);
        assert_eq!(bbox.north(), 5.);
        assert_eq!(bbox.max_altitude(), Some(6.));
    }

    #[test]
    fn bbox_members_must_be_numbers() {
        assert!(matches!(
            read_bounding_box(&json!([0, 0, "4", 4])),
            Err(GeoJsonError::WrongShape {
                expected: JsonKind::Number,
                found: JsonKind::String
            })
        ));
    }

    #[test]
    fn non_finite_values_not_encoded() {
        let err = serde_json::to_string(&Coordinate::new(f64::INFINITY, 2.)).unwrap_err();
        assert!(err.to_string().contains("Non-finite number inf"));

        let err = serde_json::to_string(&Coordinate::new_with_altitude(1., 2., f64::NAN))
            .unwrap_err();
        assert!(err.to_string().contains("Non-finite number NaN"));

        let bbox = BoundingBox::new_with_altitude(0., 0., f64::NEG_INFINITY, 1., 1., 0.);
        let err = serde_json::to_string(&bbox).unwrap_err();
        assert!(err.to_string().contains("Non-finite number -inf"));
    }

    #[test]
    fn position_encoding_omits_missing_altitude() {
        assert_eq!(
            serde_json::to_string(&Coordinate::new(30., 10.)).unwrap(),
            "[30.0,10.0]"
        );
        assert_eq!(
            serde_json::to_string(&Coordinate::new_with_altitude(30., 10., 1.5)).unwrap(),
            "[30.0,10.0,1.5]"
        );
    }
}
