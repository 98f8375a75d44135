//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use std::fmt::Display;

use serde_json::Value;
use thiserror::Error;

use crate::geometry::GeometryType;

/// The kind of a JSON value, used to describe shape mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind of the given JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonKind::Null => write!(f, "null"),
            JsonKind::Bool => write!(f, "boolean"),
            JsonKind::Number => write!(f, "number"),
            JsonKind::String => write!(f, "string"),
            JsonKind::Array => write!(f, "array"),
            JsonKind::Object => write!(f, "object"),
        }
    }
}

/// Enum with all errors in this crate.
///
/// Every decode failure is terminal: no partially decoded geometry is ever returned alongside
/// one of these.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
    /// A required member is absent from a GeoJSON object.
    #[error("GeoJSON object expected to have '{0}' member")]
    MissingField(&'static str),

    /// A JSON value had a different kind than the position in the document requires.
    #[error("Expected JSON {expected}, found {found}")]
    WrongShape { expected: JsonKind, found: JsonKind },

    /// The `type` member names a geometry this crate does not know.
    #[error("Unsupported geometry type '{0}'")]
    UnsupportedGeometryType(String),

    /// A position array did not have 2 or 3 elements.
    #[error("Only 2 or 3 element coordinates supported, found {0}")]
    InvalidCoordinateArity(usize),

    /// A `bbox` array did not have 4 or 6 elements.
    #[error("Only 4 or 6 element bounding boxes supported, found {0}")]
    InvalidBoundingBoxArity(usize),

    /// A geometry of one kind was found where another kind was required.
    #[error("Incorrect geometry type: expected {expected}, found {found}")]
    IncorrectGeometryType {
        expected: GeometryType,
        found: GeometryType,
    },

    /// A JSON value could not be represented as a property value.
    #[error("Not supported value kind: {0}")]
    UnsupportedValueKind(String),

    /// NaN or infinity, which JSON cannot represent, was found while encoding.
    #[error("Non-finite number {0} cannot be written as JSON")]
    NonFiniteNumber(f64),

    /// Geometry or property nesting went deeper than the configured limit.
    #[error("Nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GeoJsonError {
    pub(crate) fn wrong_shape(expected: JsonKind, found: &Value) -> Self {
        GeoJsonError::WrongShape {
            expected,
            found: JsonKind::of(found),
        }
    }
}

/// Crate-specific result type.
pub type GeoJsonResult<T> = std::result::Result<T, GeoJsonError>;
