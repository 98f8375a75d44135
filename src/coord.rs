//! A single GeoJSON position.

/// An immutable 2D or 3D position: longitude, latitude and an optional altitude.
///
/// No range checks are applied; the codec does not care about geographic validity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Coordinate {
    /// Creates a 2D coordinate.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// Creates a 3D coordinate.
    pub fn new_with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// The number of values this coordinate occupies in a GeoJSON position array.
    pub fn dim(&self) -> usize {
        if self.altitude.is_some() {
            3
        } else {
            2
        }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(value: [f64; 3]) -> Self {
        Self::new_with_altitude(value[0], value[1], value[2])
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
        Self::new_with_altitude(longitude, latitude, altitude)
    }
}
