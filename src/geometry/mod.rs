//! The in-memory geometry model.
//!
//! [`Geometry`] is a closed enum over the seven GeoJSON geometry kinds. Every kind carries an
//! optional [`BoundingBox`] and an ordered map of extension members that were present on the
//! GeoJSON object but are not part of the geometry's schema.

use std::fmt::Display;

use crate::bbox::BoundingBox;
use crate::property::Properties;

/// Implements the bounding box and extension member accessors shared by every geometry kind, and
/// the conversion into [`Geometry`].
macro_rules! impl_geometry_members {
    ($geometry:ident, $typ:ident) => {
        impl $geometry {
            /// The bounding box stored on this geometry, if any.
            pub fn bounding_box(&self) -> Option<&$crate::bbox::BoundingBox> {
                self.bbox.as_ref()
            }

            /// Members of the GeoJSON object other than the ones this geometry kind defines.
            pub fn additional_properties(&self) -> &$crate::property::Properties {
                &self.properties
            }

            /// Returns this geometry with the given bounding box.
            pub fn with_bounding_box(
                self,
                bbox: impl Into<Option<$crate::bbox::BoundingBox>>,
            ) -> Self {
                Self {
                    bbox: bbox.into(),
                    ..self
                }
            }

            /// Returns this geometry with the given extension members, replacing any existing ones.
            pub fn with_additional_properties(
                self,
                properties: $crate::property::Properties,
            ) -> Self {
                Self { properties, ..self }
            }
        }

        impl From<$geometry> for $crate::geometry::Geometry {
            fn from(value: $geometry) -> Self {
                $crate::geometry::Geometry::$geometry(value)
            }
        }

        impl TryFrom<$crate::geometry::Geometry> for $geometry {
            type Error = $crate::error::GeoJsonError;

            fn try_from(value: $crate::geometry::Geometry) -> Result<Self, Self::Error> {
                match value {
                    $crate::geometry::Geometry::$geometry(geom) => Ok(geom),
                    other => Err($crate::error::GeoJsonError::IncorrectGeometryType {
                        expected: $crate::geometry::GeometryType::$typ,
                        found: other.geometry_type(),
                    }),
                }
            }
        }
    };
}

mod collection;
mod line;
mod point;
mod polygon;

pub use collection::Collection;
pub use line::{Line, MultiLine};
pub use point::{MultiPoint, Point};
pub use polygon::{MultiPolygon, Polygon};

/// The kind of a [`Geometry`], named after its GeoJSON `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    MultiPoint,
    Polygon,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The value of the GeoJSON `type` member.
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Looks up a geometry type by its GeoJSON `type` member. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let typ = match name {
            "Point" => GeometryType::Point,
            "LineString" => GeometryType::LineString,
            "MultiPoint" => GeometryType::MultiPoint,
            "Polygon" => GeometryType::Polygon,
            "MultiLineString" => GeometryType::MultiLineString,
            "MultiPolygon" => GeometryType::MultiPolygon,
            "GeometryCollection" => GeometryType::GeometryCollection,
            _ => return None,
        };
        Some(typ)
    }

    /// The member holding this kind's payload: `geometries` for collections, `coordinates`
    /// otherwise.
    pub fn payload_member(&self) -> &'static str {
        match self {
            GeometryType::GeometryCollection => "geometries",
            _ => "coordinates",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    MultiPoint(MultiPoint),
    Polygon(Polygon),
    MultiLine(MultiLine),
    MultiPolygon(MultiPolygon),
    Collection(Collection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Line(_) => GeometryType::LineString,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiLine(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::Collection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            Geometry::Point(g) => g.bounding_box(),
            Geometry::Line(g) => g.bounding_box(),
            Geometry::MultiPoint(g) => g.bounding_box(),
            Geometry::Polygon(g) => g.bounding_box(),
            Geometry::MultiLine(g) => g.bounding_box(),
            Geometry::MultiPolygon(g) => g.bounding_box(),
            Geometry::Collection(g) => g.bounding_box(),
        }
    }

    pub fn additional_properties(&self) -> &Properties {
        match self {
            Geometry::Point(g) => g.additional_properties(),
            Geometry::Line(g) => g.additional_properties(),
            Geometry::MultiPoint(g) => g.additional_properties(),
            Geometry::Polygon(g) => g.additional_properties(),
            Geometry::MultiLine(g) => g.additional_properties(),
            Geometry::MultiPolygon(g) => g.additional_properties(),
            Geometry::Collection(g) => g.additional_properties(),
        }
    }

    pub fn with_bounding_box(self, bbox: impl Into<Option<BoundingBox>>) -> Self {
        let bbox = bbox.into();
        match self {
            Geometry::Point(g) => g.with_bounding_box(bbox).into(),
            Geometry::Line(g) => g.with_bounding_box(bbox).into(),
            Geometry::MultiPoint(g) => g.with_bounding_box(bbox).into(),
            Geometry::Polygon(g) => g.with_bounding_box(bbox).into(),
            Geometry::MultiLine(g) => g.with_bounding_box(bbox).into(),
            Geometry::MultiPolygon(g) => g.with_bounding_box(bbox).into(),
            Geometry::Collection(g) => g.with_bounding_box(bbox).into(),
        }
    }

    pub fn with_additional_properties(self, properties: Properties) -> Self {
        match self {
            Geometry::Point(g) => g.with_additional_properties(properties).into(),
            Geometry::Line(g) => g.with_additional_properties(properties).into(),
            Geometry::MultiPoint(g) => g.with_additional_properties(properties).into(),
            Geometry::Polygon(g) => g.with_additional_properties(properties).into(),
            Geometry::MultiLine(g) => g.with_additional_properties(properties).into(),
            Geometry::MultiPolygon(g) => g.with_additional_properties(properties).into(),
            Geometry::Collection(g) => g.with_additional_properties(properties).into(),
        }
    }
}
