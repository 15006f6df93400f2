use std::fmt;

/// A point on the map, in decimal degrees.
///
/// The default value is `(0, 0)`, which is what a search uses when the map
/// has not reported a center yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
