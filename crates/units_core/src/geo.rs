//! Geographic cursor for placing reported units.

use serde::{Deserialize, Serialize};

/// Running (longitude, latitude) position, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCursor {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl GeoCursor {
    /// Where the client script starts.
    pub const START: Self = Self::new(37.61, 55.74);

    /// Per-report step on both axes.
    pub const STEP: f64 = 0.1;

    /// Create a cursor.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Move both coordinates by `step`.
    pub fn advance(&mut self, step: f64) {
        self.longitude += step;
        self.latitude += step;
    }
}

impl Default for GeoCursor {
    fn default() -> Self {
        Self::START
    }
}
