use crate::bbox::BoundingBox;
use crate::geometry::Line;
use crate::property::Properties;

/// A polygon made of rings.
///
/// The first ring is the exterior boundary and any further rings are holes. Ring order is kept
/// exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Line>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl Polygon {
    pub fn new(rings: Vec<Line>) -> Self {
        Self {
            rings,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn rings(&self) -> &[Line] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&Line> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[Line] {
        self.rings.get(1..).unwrap_or_default()
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors().len()
    }
}

impl_geometry_members!(Polygon, Polygon);

/// An ordered collection of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }
}

impl_geometry_members!(MultiPolygon, MultiPolygon);
