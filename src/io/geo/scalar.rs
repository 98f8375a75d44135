use crate::coord::Coordinate;
use crate::geometry::{
    Collection, Geometry, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Convert a [`Coordinate`] to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coordinate) -> geo::Coord {
    geo::Coord {
        x: coord.longitude(),
        y: coord.latitude(),
    }
}

/// Convert a [`Point`] to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(coord_to_geo(point.coord()))
}

/// Convert a [`Line`] to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_to_geo(line: &Line) -> geo::LineString {
    geo::LineString::new(line.coords().iter().map(coord_to_geo).collect())
}

/// Convert a [`Polygon`] to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. A polygon without rings becomes a polygon with an
/// empty exterior, and `geo` closes any ring that is not already closed.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(line_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a [`MultiPoint`] to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert a [`MultiLine`] to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_to_geo(multi_line: &MultiLine) -> geo::MultiLineString {
    geo::MultiLineString::new(multi_line.lines().iter().map(line_to_geo).collect())
}

/// Convert a [`MultiPolygon`] to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a [`Collection`] to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn collection_to_geo(collection: &Collection) -> geo::GeometryCollection {
    geo::GeometryCollection(
        collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert a [`Geometry`] to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept. Bounding boxes and extension members have no
/// counterpart in `geo` and are dropped.
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::Line(g) => geo::Geometry::LineString(line_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiLine(g) => geo::Geometry::MultiLineString(multi_line_to_geo(g)),
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::Collection(g) => geo::Geometry::GeometryCollection(collection_to_geo(g)),
    }
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geo(value)
    }
}

impl From<geo::Coord> for Coordinate {
    fn from(value: geo::Coord) -> Self {
        Coordinate::new(value.x, value.y)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Point::new(value.0.into())
    }
}

impl From<geo::LineString> for Line {
    fn from(value: geo::LineString) -> Self {
        value.0.into_iter().map(Coordinate::from).collect()
    }
}

impl From<geo::Line> for Line {
    fn from(value: geo::Line) -> Self {
        Line::new(vec![value.start.into(), value.end.into()])
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            std::iter::once(exterior)
                .chain(interiors)
                .map(Line::from)
                .collect(),
        )
    }
}

impl From<geo::MultiPoint> for MultiPoint {
    fn from(value: geo::MultiPoint) -> Self {
        MultiPoint::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<geo::MultiLineString> for MultiLine {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLine::new(value.0.into_iter().map(Line::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}

impl From<geo::GeometryCollection> for Collection {
    fn from(value: geo::GeometryCollection) -> Self {
        value.0.into_iter().map(Geometry::from).collect()
    }
}

/// [`geo::Rect`] and [`geo::Triangle`] become polygons and [`geo::Line`] becomes a two position
/// line.
impl From<geo::Geometry> for Geometry {
    fn from(value: geo::Geometry) -> Self {
        match value {
            geo::Geometry::Point(g) => Point::from(g).into(),
            geo::Geometry::Line(g) => Line::from(g).into(),
            geo::Geometry::LineString(g) => Line::from(g).into(),
            geo::Geometry::Polygon(g) => Polygon::from(g).into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLine::from(g).into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::from(g).into(),
            geo::Geometry::GeometryCollection(g) => Collection::from(g).into(),
            geo::Geometry::Rect(g) => Polygon::from(g.to_polygon()).into(),
            geo::Geometry::Triangle(g) => Polygon::from(g.to_polygon()).into(),
        }
    }
}
