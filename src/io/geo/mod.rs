//! Convert to and from [`geo`] scalars.

mod scalar;

pub use scalar::{
    collection_to_geo, coord_to_geo, geometry_to_geo, line_to_geo, multi_line_to_geo,
    multi_point_to_geo, multi_polygon_to_geo, point_to_geo, polygon_to_geo,
};
