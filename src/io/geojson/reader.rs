use std::io::Read;

use serde_json::{Map, Value};

use crate::error::{GeoJsonError, GeoJsonResult, JsonKind};
use crate::geometry::{
    Collection, Geometry, GeometryType, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::geojson::position::{
    expect_array, read_bounding_box, read_position, read_positions,
};
use crate::io::geojson::property::read_additional_properties;
use crate::io::geojson::{DepthGuard, BBOX_MEMBER, DEFAULT_MAX_DEPTH, TYPE_MEMBER};

/// Options for the GeoJSON reader.
#[derive(Debug, Clone, Copy)]
pub struct GeoJsonReaderOptions {
    /// The maximum nesting of geometry collections and extension member values.
    pub max_depth: usize,
}

impl GeoJsonReaderOptions {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl Default for GeoJsonReaderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Decode a GeoJSON geometry object.
///
/// ```
/// use geojson_codec::io::geojson::read_geometry;
/// use geojson_codec::Geometry;
///
/// let value = serde_json::json!({"type": "Point", "coordinates": [30.0, 10.0], "id": "p1"});
/// let Geometry::Point(point) = read_geometry(&value).unwrap() else {
///     panic!("expected a point");
/// };
/// assert_eq!(point.coord().longitude(), 30.0);
/// assert_eq!(point.additional_properties()["id"].as_str(), Some("p1"));
/// ```
pub fn read_geometry(value: &Value) -> GeoJsonResult<Geometry> {
    read_geometry_with_options(value, &Default::default())
}

/// Decode a GeoJSON geometry object with custom options.
pub fn read_geometry_with_options(
    value: &Value,
    options: &GeoJsonReaderOptions,
) -> GeoJsonResult<Geometry> {
    read_object(value, DepthGuard::new(options.max_depth))
}

/// Parse GeoJSON text into a geometry.
pub fn from_str(s: &str) -> GeoJsonResult<Geometry> {
    let value: Value = serde_json::from_str(s)?;
    read_geometry(&value)
}

/// Read a GeoJSON geometry document from a reader.
pub fn read_geojson<R: Read>(reader: R) -> GeoJsonResult<Geometry> {
    let value: Value = serde_json::from_reader(reader)?;
    read_geometry(&value)
}

fn read_type_name(object: &Map<String, Value>) -> GeoJsonResult<&str> {
    match object.get(TYPE_MEMBER) {
        Some(Value::String(name)) => Ok(name),
        Some(other) => Err(GeoJsonError::wrong_shape(JsonKind::String, other)),
        None => Err(GeoJsonError::MissingField(TYPE_MEMBER)),
    }
}

fn read_object(value: &Value, guard: DepthGuard) -> GeoJsonResult<Geometry> {
    let guard = guard.descend()?;
    let object = value
        .as_object()
        .ok_or_else(|| GeoJsonError::wrong_shape(JsonKind::Object, value))?;
    let name = read_type_name(object)?;

    let bbox = object.get(BBOX_MEMBER).map(read_bounding_box).transpose()?;

    // Unknown types still need `coordinates` before they are rejected.
    let typ = GeometryType::from_name(name);
    let payload_member = typ.map_or("coordinates", |typ| typ.payload_member());
    let payload = object
        .get(payload_member)
        .ok_or(GeoJsonError::MissingField(payload_member))?;

    let typ = typ.ok_or_else(|| {
        log::debug!("rejecting GeoJSON object with type '{name}'");
        GeoJsonError::UnsupportedGeometryType(name.to_string())
    })?;
    log::trace!("decoding GeoJSON {typ}");

    let geometry: Geometry = match typ {
        GeometryType::Point => Point::new(read_position(payload)?).into(),
        GeometryType::LineString => Line::new(read_positions(payload)?).into(),
        GeometryType::MultiPoint => {
            MultiPoint::new(read_positions(payload)?.into_iter().map(Point::new).collect()).into()
        }
        GeometryType::Polygon => read_polygon(payload)?.into(),
        GeometryType::MultiLineString => MultiLine::new(read_lines(payload)?).into(),
        GeometryType::MultiPolygon => MultiPolygon::new(
            expect_array(payload)?
                .iter()
                .map(read_polygon)
                .collect::<GeoJsonResult<_>>()?,
        )
        .into(),
        GeometryType::GeometryCollection => Collection::new(
            expect_array(payload)?
                .iter()
                .map(|member| read_object(member, guard))
                .collect::<GeoJsonResult<_>>()?,
        )
        .into(),
    };

    let properties = read_additional_properties(object, payload_member, guard)?;
    Ok(geometry
        .with_bounding_box(bbox)
        .with_additional_properties(properties))
}

fn read_lines(value: &Value) -> GeoJsonResult<Vec<Line>> {
    expect_array(value)?
        .iter()
        .map(|ring| Ok(Line::new(read_positions(ring)?)))
        .collect()
}

fn read_polygon(value: &Value) -> GeoJsonResult<Polygon> {
    Ok(Polygon::new(read_lines(value)?))
}
