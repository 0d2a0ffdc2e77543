//! Geometry primitives shared by the scorers.
//!
//! Thin wrappers over `geo` that fix the engine's conventions in one place:
//! great-circle distance is measured in kilometres, and point-in-polygon
//! containment treats boundary points as inside.

use geo::{Coord, Distance, Haversine, Intersects, Point, Polygon};

const METRES_PER_KILOMETRE: f64 = 1000.0;

/// Great-circle (haversine) distance between two points, in kilometres.
///
/// Symmetric, and zero when both points coincide. The kilometre unit
/// matches [`ScoringConfig::influence_radius_km`](crate::ScoringConfig);
/// the two must never diverge.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "distance conversion from metres to kilometres"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b)) / METRES_PER_KILOMETRE
}

/// Report whether `polygon` contains `point`.
///
/// Uses `Intersects`, which treats boundary points as inside. Rings are
/// assumed simple; self-intersecting input yields whatever `geo` reports
/// for it, consistent with the engine's no-validation policy.
#[must_use]
pub fn contains(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    polygon.intersects(&Point::from(point))
}
