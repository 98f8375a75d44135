//! Axis-aligned bounding boxes attached to GeoJSON objects.

/// An immutable axis-aligned envelope, optionally including an altitude range.
///
/// The altitude range is all-or-nothing, mirroring the 4 vs 6 element `bbox` encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
    altitude: Option<(f64, f64)>,
}

impl BoundingBox {
    /// Creates a 2D bounding box.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
            altitude: None,
        }
    }

    /// Creates a 3D bounding box. Arguments follow the GeoJSON `bbox` axis order: all minimums,
    /// then all maximums.
    pub fn new_with_altitude(
        west: f64,
        south: f64,
        min_altitude: f64,
        east: f64,
        north: f64,
        max_altitude: f64,
    ) -> Self {
        Self {
            west,
            south,
            east,
            north,
            altitude: Some((min_altitude, max_altitude)),
        }
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn min_altitude(&self) -> Option<f64> {
        self.altitude.map(|(min, _)| min)
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.altitude.map(|(_, max)| max)
    }

    /// Returns the values in GeoJSON `bbox` order: `[w, s, e, n]` or
    /// `[w, s, min_alt, e, n, max_alt]`.
    pub fn to_vec(&self) -> Vec<f64> {
        match self.altitude {
            Some((min_alt, max_alt)) => vec![
                self.west,
                self.south,
                min_alt,
                self.east,
                self.north,
                max_alt,
            ],
            None => vec![self.west, self.south, self.east, self.north],
        }
    }
}
