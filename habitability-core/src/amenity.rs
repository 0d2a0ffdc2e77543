//! Point amenities that influence the proximity score.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point feature such as a park, school, or waste facility.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The kind
/// is an open string set: only kinds configured in the amenity weight table
/// affect scoring, and unconfigured kinds are silently ignored.
///
/// # Examples
/// ```
/// use habitability_core::Amenity;
///
/// let park = Amenity::new(40.7812, -73.9665, "park");
/// assert_eq!(park.kind, "park");
/// assert_eq!(park.location.y, 40.7812);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amenity {
    /// Geospatial position, longitude-first.
    pub location: Coord<f64>,
    /// Free-form amenity kind, e.g. `"park"` or `"hospital"`.
    pub kind: String,
}

impl Amenity {
    /// Construct an amenity from latitude and longitude in decimal degrees.
    ///
    /// The caller-facing argument order is `(latitude, longitude)`; the
    /// stored coordinate is longitude-first for geometry operations.
    pub fn new(latitude: f64, longitude: f64, kind: impl Into<String>) -> Self {
        Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Amenity;

    #[test]
    fn constructor_swaps_into_lon_lat_order() {
        let amenity = Amenity::new(40.75, -73.98, "grocery");
        assert_eq!(amenity.location.x, -73.98);
        assert_eq!(amenity.location.y, 40.75);
    }
}
