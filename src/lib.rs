//! A lossless codec between an in-memory geometry model and [GeoJSON](https://geojson.org/)
//! geometry objects.
//!
//! [`Geometry`] is a closed enum over the seven GeoJSON geometry kinds. Decoding and encoding
//! preserve optional bounding boxes, 3D positions, and every member of a geometry object that is
//! not part of its schema, in document order.
//!
//! ```
//! use geojson_codec::io::geojson::{from_str, to_string};
//!
//! let text = r#"{"type":"Point","coordinates":[30.0,10.0],"id":"p1"}"#;
//! let geometry = from_str(text).unwrap();
//! assert_eq!(to_string(&geometry).unwrap(), text);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use bbox::BoundingBox;
pub use coord::Coordinate;
pub use error::{GeoJsonError, GeoJsonResult};
pub use geometry::{
    Collection, Geometry, GeometryType, Line, MultiLine, MultiPoint, MultiPolygon, Point, Polygon,
};
pub use property::{Properties, PropertyValue};

pub mod bbox;
pub mod coord;
pub mod error;
pub mod geometry;
pub mod io;
pub mod property;
#[cfg(test)]
pub(crate) mod test;
