//! Read from and write to [GeoJSON](https://geojson.org/) geometry objects.
//!
//! Reading works on an already parsed [`serde_json::Value`]; writing emits tokens into any
//! [`serde::Serializer`]. Both directions keep extension members in their original order, so a
//! decoded geometry re-encodes to the same structure.

pub use reader::{
    from_str, read_geojson, read_geometry, read_geometry_with_options, GeoJsonReaderOptions,
};
pub use writer::{
    to_string, to_vec, write_geojson, write_geometry, write_geometry_with_options,
    GeoJsonWriterOptions,
};

mod deserialize;
mod position;
mod property;
mod reader;
mod writer;

use crate::error::{GeoJsonError, GeoJsonResult};

/// Default limit on geometry and property nesting, matching the recursion limit `serde_json`
/// applies when parsing text.
pub const DEFAULT_MAX_DEPTH: usize = 128;

pub(crate) const TYPE_MEMBER: &str = "type";
pub(crate) const BBOX_MEMBER: &str = "bbox";

/// Tracks recursion depth through nested collections and property values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DepthGuard {
    depth: usize,
    limit: usize,
}

impl DepthGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    /// Enters one more level of nesting.
    pub(crate) fn descend(self) -> GeoJsonResult<Self> {
        if self.depth >= self.limit {
            log::debug!("GeoJSON nesting exceeds depth limit of {}", self.limit);
            return Err(GeoJsonError::DepthLimitExceeded(self.limit));
        }
        Ok(Self {
            depth: self.depth + 1,
            limit: self.limit,
        })
    }
}

impl Default for DepthGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
