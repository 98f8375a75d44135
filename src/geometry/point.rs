use crate::bbox::BoundingBox;
use crate::coord::Coordinate;
use crate::property::Properties;

/// A single position.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Coordinate,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl Point {
    pub fn new(coord: Coordinate) -> Self {
        Self {
            coord,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }
}

impl From<Coordinate> for Point {
    fn from(value: Coordinate) -> Self {
        Self::new(value)
    }
}

impl_geometry_members!(Point, Point);

/// An ordered collection of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }
}

impl_geometry_members!(MultiPoint, MultiPoint);
