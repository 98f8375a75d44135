//! [`Deserialize`] implementations that route through the GeoJSON reader, so the geometry model
//! can be embedded in any serde-derived document.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::bbox::BoundingBox;
use crate::coord::Coordinate;
use crate::geometry::{
    Collection, Geometry, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::geojson::position::{read_bounding_box, read_position};
use crate::io::geojson::property::read_property_value;
use crate::io::geojson::{read_geometry, DepthGuard};
use crate::property::PropertyValue;

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        read_geometry(&value).map_err(D::Error::custom)
    }
}

macro_rules! impl_deserialize {
    ($geometry:ty) => {
        impl<'de> Deserialize<'de> for $geometry {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let geometry = Geometry::deserialize(deserializer)?;
                <$geometry>::try_from(geometry).map_err(D::Error::custom)
            }
        }
    };
}

impl_deserialize!(Point);
impl_deserialize!(Line);
impl_deserialize!(MultiPoint);
impl_deserialize!(Polygon);
impl_deserialize!(MultiLine);
impl_deserialize!(MultiPolygon);
impl_deserialize!(Collection);

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        read_position(&value).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        read_bounding_box(&value).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        read_property_value(&value, DepthGuard::default()).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use serde::Serialize;

    use super::*;
    use crate::test::geometry;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Site {
        name: String,
        location: Point,
        footprint: Option<Geometry>,
        extent: BoundingBox,
    }

    #[test]
    fn embedded_in_derived_struct() {
        let text = r#"{"name":"depot","location":{"type":"Point","coordinates":[30.0,10.0],"id":"p1"},"footprint":null,"extent":[0.0,0.0,4.0,4.0]}"#;
        let site: Site = serde_json::from_str(text).unwrap();
        assert_eq!(
            Geometry::from(site.location.clone()),
            geometry::point_with_id()
        );
        assert_eq!(site.footprint, None);
        assert_eq!(site.extent, BoundingBox::new(0., 0., 4., 4.));
        assert_eq!(serde_json::to_string(&site).unwrap(), text);
    }

    #[test]
    fn wrong_kind_is_an_error() {
        let err = serde_json::from_str::<Polygon>(r#"{"type":"Point","coordinates":[0,0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected Polygon, found Point"));
    }

    #[test]
    fn decode_errors_are_reported() {
        let err = serde_json::from_str::<Geometry>(r#"{"type":"Circle","coordinates":[0,0]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported geometry type 'Circle'"));

        let err = serde_json::from_str::<Coordinate>("[1,2,3,4]").unwrap_err();
        assert!(err.to_string().contains("found 4"));
    }

    #[test]
    fn property_value() {
        let value: PropertyValue = serde_json::from_str(r#"{"b":[1,2.5],"a":null}"#).unwrap();
        assert_eq!(
            value,
            [
                ("b", PropertyValue::from(vec![PropertyValue::Integer(1), PropertyValue::Float(2.5)])),
                ("a", PropertyValue::Null),
            ]
            .into_iter()
            .collect::<PropertyValue>()
        );
    }
}
