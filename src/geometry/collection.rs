use crate::bbox::BoundingBox;
use crate::geometry::Geometry;
use crate::property::Properties;

/// A heterogeneous collection of geometries, which may include further collections.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    geometries: Vec<Geometry>,
    bbox: Option<BoundingBox>,
    properties: Properties,
}

impl Collection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            bbox: None,
            properties: Properties::new(),
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }
}

impl FromIterator<Geometry> for Collection {
    fn from_iter<T: IntoIterator<Item = Geometry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_geometry_members!(Collection, GeometryCollection);
