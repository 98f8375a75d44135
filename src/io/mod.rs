//! Reader and writer implementations for GeoJSON, plus interoperability with the `geo` crate.

pub mod geo;
pub mod geojson;
