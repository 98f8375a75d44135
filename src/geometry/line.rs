use crate::bbox::BoundingBox;
use crate::coord::Coordinate;
use crate::property::Properties;

/// An ordered sequence of positions.
///
/// No minimum length is enforced. A [`Line`] also serves as a polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    coords: Vec<Coordinate>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl Line {
    pub fn new(coords: Vec<Coordinate>) -> Self {
        Self {
            coords,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }
}

impl FromIterator<Coordinate> for Line {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_geometry_members!(Line, LineString);

/// An ordered collection of lines.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLine {
    lines: Vec<Line>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl MultiLine {
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }
}

impl_geometry_members!(MultiLine, MultiLineString);
