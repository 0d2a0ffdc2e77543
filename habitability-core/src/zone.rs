//! Metric zones: aspect-tagged polygons carrying one raw value each.

use geo::{Coord, LineString, Polygon};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Aspect;
use crate::geometry;

/// A polygonal zone with a single raw metric value for one [`Aspect`].
///
/// Zones for the same aspect are expected to partition its coverage without
/// overlap; where overlap exists anyway, the first containing zone in load
/// order is authoritative. The ring is taken as supplied; no closure or
/// self-intersection validation is performed.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use habitability_core::{Aspect, Zone};
///
/// let ring = vec![
///     Coord { x: -74.0, y: 40.7 },
///     Coord { x: -73.9, y: 40.7 },
///     Coord { x: -73.9, y: 40.8 },
///     Coord { x: -74.0, y: 40.8 },
/// ];
/// let zone = Zone::new(Aspect::CrimeRate, ring, 4.2);
/// assert!(zone.contains(Coord { x: -73.95, y: 40.75 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Zone {
    /// The metric category this zone reports.
    pub aspect: Aspect,
    /// The zone's boundary in WGS84 (`x = longitude`, `y = latitude`).
    pub boundary: Polygon<f64>,
    /// The raw metric value, in the aspect's native unit.
    pub value: f64,
}

impl Zone {
    /// Construct a zone from an exterior ring of (longitude, latitude)
    /// coordinates.
    ///
    /// An open ring is closed implicitly: the first vertex is appended when
    /// it does not already terminate the ring.
    #[must_use]
    pub fn new(aspect: Aspect, exterior: Vec<Coord<f64>>, value: f64) -> Self {
        Self {
            aspect,
            boundary: Polygon::new(LineString::from(exterior), Vec::new()),
            value,
        }
    }

    /// Report whether the zone contains `point`.
    ///
    /// Points on the boundary count as inside.
    #[must_use]
    pub fn contains(&self, point: Coord<f64>) -> bool {
        geometry::contains(&self.boundary, point)
    }
}
