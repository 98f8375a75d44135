use std::io::Write;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::bbox::BoundingBox;
use crate::error::GeoJsonResult;
use crate::geometry::{
    Collection, Geometry, GeometryType, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::geojson::property::{is_reserved_member, GuardedValue};
use crate::io::geojson::{DepthGuard, BBOX_MEMBER, DEFAULT_MAX_DEPTH, TYPE_MEMBER};
use crate::property::Properties;

/// Options for the GeoJSON writer.
#[derive(Debug, Clone, Copy)]
pub struct GeoJsonWriterOptions {
    /// The maximum nesting of geometry collections and extension member values.
    pub max_depth: usize,
}

impl GeoJsonWriterOptions {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for GeoJsonWriterOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Encode a geometry as a GeoJSON object into any serde [`Serializer`].
///
/// Members are written in a fixed order: `type`, then `coordinates` or `geometries`, then `bbox`
/// if present, then the extension members in their stored order.
///
/// Some values the model can hold have no place in a GeoJSON geometry object and are not written:
/// - bounding boxes and extension members of the points in a [`MultiPoint`], of polygon rings,
///   and of the polygons in a [`MultiPolygon`];
/// - extension members named `type`, `bbox`, or the geometry's own `coordinates`/`geometries`
///   member, which are skipped with a warning.
///
/// Geometries decoded by the reader never carry either, so they always round trip. NaN and
/// infinite coordinates, `bbox` values, or extension floats fail the write with
/// [`GeoJsonError::NonFiniteNumber`](crate::GeoJsonError::NonFiniteNumber) as the error message,
/// as does nesting deeper than the configured limit.
pub fn write_geometry<S: Serializer>(
    serializer: S,
    geometry: &Geometry,
) -> Result<S::Ok, S::Error> {
    write_geometry_with_options(serializer, geometry, &Default::default())
}

/// Encode a geometry with custom options.
pub fn write_geometry_with_options<S: Serializer>(
    serializer: S,
    geometry: &Geometry,
    options: &GeoJsonWriterOptions,
) -> Result<S::Ok, S::Error> {
    GuardedGeometry {
        geometry,
        guard: DepthGuard::new(options.max_depth),
    }
    .serialize(serializer)
}

/// Encode a geometry as a compact GeoJSON string.
///
/// ```
/// use geojson_codec::io::geojson::to_string;
/// use geojson_codec::{Coordinate, Point};
///
/// let point = Point::new(Coordinate::new(30.0, 10.0)).into();
/// assert_eq!(
///     to_string(&point).unwrap(),
///     r#"{"type":"Point","coordinates":[30.0,10.0]}"#
/// );
/// ```
pub fn to_string(geometry: &Geometry) -> GeoJsonResult<String> {
    Ok(serde_json::to_string(geometry)?)
}

/// Encode a geometry as compact GeoJSON bytes.
pub fn to_vec(geometry: &Geometry) -> GeoJsonResult<Vec<u8>> {
    Ok(serde_json::to_vec(geometry)?)
}

/// Write a geometry as GeoJSON to a writer.
pub fn write_geojson<W: Write>(geometry: &Geometry, writer: W) -> GeoJsonResult<()> {
    serde_json::to_writer(writer, geometry)?;
    Ok(())
}

/// A geometry kind that can be written as a GeoJSON object.
trait GeoJsonObject {
    const TYPE: GeometryType;

    fn bbox(&self) -> Option<&BoundingBox>;

    fn properties(&self) -> &Properties;

    /// Writes the `coordinates` or `geometries` member.
    fn write_payload<M: SerializeMap>(
        &self,
        map: &mut M,
        guard: DepthGuard,
    ) -> Result<(), M::Error>;
}

fn write_object<G: GeoJsonObject, S: Serializer>(
    geom: &G,
    serializer: S,
    guard: DepthGuard,
) -> Result<S::Ok, S::Error> {
    let guard = guard.descend().map_err(S::Error::custom)?;
    let payload_member = G::TYPE.payload_member();

    let mut map = serializer.serialize_map(None)?;
    map.serialize_entry(TYPE_MEMBER, G::TYPE.name())?;
    geom.write_payload(&mut map, guard)?;
    if let Some(bbox) = geom.bbox() {
        map.serialize_entry(BBOX_MEMBER, bbox)?;
    }
    for (name, value) in geom.properties() {
        if is_reserved_member(name, payload_member) {
            log::warn!(
                "skipping extension member '{name}' on {}: name is reserved",
                G::TYPE
            );
            continue;
        }
        map.serialize_entry(name, &GuardedValue { value, guard })?;
    }
    map.end()
}

macro_rules! impl_geojson_object {
    ($geometry:ty, $typ:ident, |$geom:ident, $map:ident, $guard:pat_param| $payload:block) => {
        impl GeoJsonObject for $geometry {
            const TYPE: GeometryType = GeometryType::$typ;

            fn bbox(&self) -> Option<&BoundingBox> {
                self.bounding_box()
            }

            fn properties(&self) -> &Properties {
                self.additional_properties()
            }

            fn write_payload<M: SerializeMap>(
                &self,
                $map: &mut M,
                $guard: DepthGuard,
            ) -> Result<(), M::Error> {
                let $geom = self;
                $payload
            }
        }

        impl Serialize for $geometry {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                write_object(self, serializer, DepthGuard::default())
            }
        }
    };
}

impl_geojson_object!(Point, Point, |geom, map, _guard| {
    map.serialize_entry("coordinates", geom.coord())
});

impl_geojson_object!(Line, LineString, |geom, map, _guard| {
    map.serialize_entry("coordinates", geom.coords())
});

impl_geojson_object!(MultiPoint, MultiPoint, |geom, map, _guard| {
    map.serialize_entry("coordinates", &PointPositions(geom.points()))
});

impl_geojson_object!(Polygon, Polygon, |geom, map, _guard| {
    map.serialize_entry("coordinates", &LinePositions(geom.rings()))
});

impl_geojson_object!(MultiLine, MultiLineString, |geom, map, _guard| {
    map.serialize_entry("coordinates", &LinePositions(geom.lines()))
});

impl_geojson_object!(MultiPolygon, MultiPolygon, |geom, map, _guard| {
    map.serialize_entry("coordinates", &PolygonPositions(geom.polygons()))
});

impl_geojson_object!(Collection, GeometryCollection, |geom, map, guard| {
    map.serialize_entry(
        "geometries",
        &GuardedGeometries {
            geometries: geom.geometries(),
            guard,
        },
    )
});

/// The positions of a sequence of points. Bounding boxes and extension members of the individual
/// points have no place in the encoding and are not written.
struct PointPositions<'a>(&'a [Point]);

impl Serialize for PointPositions<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Point::coord))
    }
}

struct LinePositions<'a>(&'a [Line]);

impl Serialize for LinePositions<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Line::coords))
    }
}

struct PolygonPositions<'a>(&'a [Polygon]);

impl Serialize for PolygonPositions<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.0
                .iter()
                .map(|polygon| LinePositions(polygon.rings())),
        )
    }
}

struct GuardedGeometries<'a> {
    geometries: &'a [Geometry],
    guard: DepthGuard,
}

impl Serialize for GuardedGeometries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let guard = self.guard;
        serializer.collect_seq(
            self.geometries
                .iter()
                .map(|geometry| GuardedGeometry { geometry, guard }),
        )
    }
}

struct GuardedGeometry<'a> {
    geometry: &'a Geometry,
    guard: DepthGuard,
}

impl Serialize for GuardedGeometry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let guard = self.guard;
        match self.geometry {
            Geometry::Point(g) => write_object(g, serializer, guard),
            Geometry::Line(g) => write_object(g, serializer, guard),
            Geometry::MultiPoint(g) => write_object(g, serializer, guard),
            Geometry::Polygon(g) => write_object(g, serializer, guard),
            Geometry::MultiLine(g) => write_object(g, serializer, guard),
            Geometry::MultiPolygon(g) => write_object(g, serializer, guard),
            Geometry::Collection(g) => write_object(g, serializer, guard),
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        write_geometry(serializer, self)
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;
    use crate::coord::Coordinate;
    use crate::error::GeoJsonError;
    use crate::io::geojson::{
        from_str, read_geometry, read_geometry_with_options, GeoJsonReaderOptions,
    };
    use crate::property::PropertyValue;
    use crate::test::geometry;

    #[test]
    fn write_point_member_order() {
        let s = to_string(&geometry::point_with_id()).unwrap();
        assert_eq!(s, r#"{"type":"Point","coordinates":[30.0,10.0],"id":"p1"}"#);
    }

    #[test]
    fn write_polygon_bbox_after_coordinates() {
        let s = to_string(&geometry::polygon_with_bbox()).unwrap();
        let expected = r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0],[0.0,0.0]]],"bbox":[0.0,0.0,4.0,4.0]}"#;
        assert_eq!(s, expected);
    }

    #[test]
    fn write_3d_bbox() {
        let value = serde_json::to_value(geometry::multi_polygon()).unwrap();
        assert_eq!(value["bbox"], json!([0.0, 0.0, -5.0, 20.0, 20.0, 5.0]));
    }

    #[test]
    fn write_nested_collection() {
        let s = to_string(&geometry::nested_collection(1)).unwrap();
        assert_eq!(
            s,
            r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[0.0,0.0]}]}"#
        );
    }

    #[test]
    fn round_trip() {
        for geom in geometry::all() {
            let s = to_string(&geom).unwrap();
            let decoded = from_str(&s).unwrap();
            assert_eq!(decoded, geom, "{s}");
            assert!(decoded
                .additional_properties()
                .keys()
                .eq(geom.additional_properties().keys()));

            let value = serde_json::to_value(&geom).unwrap();
            assert_eq!(read_geometry(&value).unwrap(), geom);
        }
    }

    #[test]
    fn round_trip_preserves_text() {
        let text = r#"{"type":"MultiLineString","coordinates":[[[1.5,2.5],[3.5,4.5,5.5]]],"bbox":[1.5,2.5,3.5,4.5],"z":{"b":[true,null],"a":-3},"a":"x"}"#;
        assert_eq!(to_string(&from_str(text).unwrap()).unwrap(), text);
    }

    #[test]
    fn output_is_valid_geojson() {
        for geom in geometry::all() {
            let s = to_string(&geom).unwrap();
            let parsed = geojson::Geometry::from_str(&s).expect("Should be valid GeoJSON");
            assert_eq!(parsed.bbox.is_some(), geom.bounding_box().is_some());
        }
    }

    #[test]
    fn reserved_extension_members_skipped() {
        let mut properties = Properties::new();
        properties.insert("type".to_string(), "Feature".into());
        properties.insert("coordinates".to_string(), PropertyValue::Null);
        properties.insert("geometries".to_string(), 1.into());
        let geom: Geometry = Point::new(Coordinate::new(1., 2.))
            .with_additional_properties(properties)
            .into();
        assert_eq!(
            to_string(&geom).unwrap(),
            r#"{"type":"Point","coordinates":[1.0,2.0],"geometries":1}"#
        );
    }

    #[test]
    fn write_to_writer() {
        let mut out = Vec::new();
        write_geojson(&geometry::point_3d(), &mut out).unwrap();
        assert_eq!(out, to_vec(&geometry::point_3d()).unwrap());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"type":"Point","coordinates":[1.0,2.0,3.0],"bbox":[1.0,2.0,3.0,1.0,2.0,3.0]}"#
        );
    }

    #[test]
    fn non_finite_numbers_fail_the_write() {
        let mut properties = Properties::new();
        properties.insert("v".to_string(), f64::NAN.into());
        let nan_property: Geometry = Point::new(Coordinate::new(1., 2.))
            .with_additional_properties(properties)
            .into();
        let inf_coordinate: Geometry = Point::new(Coordinate::new(f64::INFINITY, 2.)).into();
        let inf_bbox: Geometry = Point::new(Coordinate::new(1., 2.))
            .with_bounding_box(BoundingBox::new(1., 2., f64::INFINITY, 2.))
            .into();
        let nested: Geometry = Collection::new(vec![inf_coordinate.clone()]).into();

        for (geom, expected) in [
            (nan_property, "Non-finite number NaN"),
            (inf_coordinate, "Non-finite number inf"),
            (inf_bbox, "Non-finite number inf"),
            (nested, "Non-finite number inf"),
        ] {
            let err = to_string(&geom).unwrap_err();
            assert!(matches!(err, GeoJsonError::Json(_)));
            assert!(err.to_string().contains(expected), "{err}");
            assert!(serde_json::to_value(&geom).is_err());
        }
    }

    #[test]
    fn case_types_serialize_like_geometry() {
        let line = Line::try_from(geometry::line_string()).unwrap();
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            serde_json::to_value(Geometry::from(line.clone())).unwrap()
        );
    }

    #[test]
    fn depth_limit() {
        let geom = geometry::nested_collection(200);
        assert!(matches!(
            to_string(&geom),
            Err(GeoJsonError::Json(_))
        ));

        let options = GeoJsonWriterOptions::new(500);
        let value =
            write_geometry_with_options(serde_json::value::Serializer, &geom, &options).unwrap();
        assert!(matches!(
            read_geometry(&value),
            Err(GeoJsonError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
        ));
        assert_eq!(
            read_geometry_with_options(&value, &GeoJsonReaderOptions::new(500)).unwrap(),
            geom
        );
    }
}
