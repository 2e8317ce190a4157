// src/models/location.rs
// DOCUMENTATION: Geographic point used as the search origin

use std::fmt;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Formats as `"<lat>,<lon>"`, the shape the `location` query parameter expects.
/// Uses plain `f64` formatting, so no rounding is applied.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_format() {
        let origin = Coordinate::new(35.7143416, 139.7619679);
        assert_eq!(origin.to_string(), "35.7143416,139.7619679");
    }

    #[test]
    fn test_location_format_keeps_sign_and_integers() {
        assert_eq!(Coordinate::new(-33.0, 151.25).to_string(), "-33,151.25");
    }
}
