//! Immutable dataset index: loaded amenities, zones, and their bounds.

use geo::{Coord, Intersects, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Amenity, Zone};

/// The reference data a scorer operates over.
///
/// Built once at load time and read-only thereafter. The geographic
/// envelope of all amenity coordinates and zone vertices is computed during
/// construction and cached; it backs the bounds guard callers use to reject
/// out-of-coverage queries before scoring.
///
/// Zone insertion order is preserved: the zone scorer's
/// first-containing-polygon tie-break depends on it.
///
/// # Examples
/// ```
/// use habitability_core::{Amenity, Dataset};
///
/// let dataset = Dataset::new(vec![Amenity::new(40.75, -73.98, "park")], Vec::new());
/// assert!(dataset.contains(40.75, -73.98));
/// assert!(!dataset.contains(51.5, -0.12));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    amenities: Vec<Amenity>,
    zones: Vec<Zone>,
    bounds: Option<Rect<f64>>,
}

impl Dataset {
    /// Build a dataset and derive its bounding envelope.
    ///
    /// Scans every amenity coordinate and every zone vertex once. An empty
    /// dataset has no envelope and the bounds guard rejects all queries.
    #[must_use]
    pub fn new(amenities: Vec<Amenity>, zones: Vec<Zone>) -> Self {
        let mut bounds = None;
        for amenity in &amenities {
            bounds = extend(bounds, amenity.location);
        }
        for zone in &zones {
            for &coord in &zone.boundary.exterior().0 {
                bounds = extend(bounds, coord);
            }
        }
        Self {
            amenities,
            zones,
            bounds,
        }
    }

    /// All loaded amenities, in load order.
    #[must_use]
    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    /// All loaded zones, in load order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// The geographic envelope of the loaded data, if any data exists.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect<f64>> {
        self.bounds
    }

    /// Report whether `(latitude, longitude)` falls inside the envelope.
    ///
    /// The check is inclusive on both axes; boundary coordinates are in.
    /// Returns `false` for an empty dataset. Callers are expected to invoke
    /// this before scoring: the scorer itself performs no bounds check and
    /// yields degenerate neutral results for far-away points.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.bounds.is_some_and(|rect| {
            rect.intersects(&Coord {
                x: longitude,
                y: latitude,
            })
        })
    }
}

/// Grow `bounds` to cover `coord`.
fn extend(bounds: Option<Rect<f64>>, coord: Coord<f64>) -> Option<Rect<f64>> {
    match bounds {
        None => Some(Rect::new(coord, coord)),
        Some(rect) => {
            let min = rect.min();
            let max = rect.max();
            Some(Rect::new(
                Coord {
                    x: min.x.min(coord.x),
                    y: min.y.min(coord.y),
                },
                Coord {
                    x: max.x.max(coord.x),
                    y: max.y.max(coord.y),
                },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::Coord;
    use rstest::{fixture, rstest};

    use super::Dataset;
    use crate::{Amenity, Aspect, Zone};

    #[fixture]
    fn dataset() -> Dataset {
        let amenities = vec![
            Amenity::new(40.70, -74.02, "park"),
            Amenity::new(40.80, -73.94, "grocery"),
        ];
        let zones = vec![Zone::new(
            Aspect::CrimeRate,
            vec![
                Coord { x: -74.05, y: 40.72 },
                Coord { x: -73.96, y: 40.72 },
                Coord { x: -73.96, y: 40.78 },
                Coord { x: -74.05, y: 40.78 },
            ],
            4.0,
        )];
        Dataset::new(amenities, zones)
    }

    #[rstest]
    fn envelope_covers_amenities_and_zone_vertices(dataset: Dataset) {
        let bounds = dataset.bounds().expect("bounds for non-empty data");
        assert_eq!(bounds.min(), Coord { x: -74.05, y: 40.70 });
        assert_eq!(bounds.max(), Coord { x: -73.94, y: 40.80 });
    }

    #[rstest]
    // Interior point.
    #[case(40.75, -74.0, true)]
    // Envelope corners and edges are inclusive.
    #[case(40.70, -74.05, true)]
    #[case(40.80, -73.94, true)]
    #[case(40.75, -73.94, true)]
    // Outside on either axis.
    #[case(40.85, -74.0, false)]
    #[case(40.75, -73.90, false)]
    fn bounds_guard_is_inclusive(
        dataset: Dataset,
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: bool,
    ) {
        assert_eq!(dataset.contains(latitude, longitude), expected);
    }

    #[rstest]
    fn empty_dataset_rejects_everything() {
        let empty = Dataset::new(Vec::new(), Vec::new());
        assert_eq!(empty.bounds(), None);
        assert!(!empty.contains(40.75, -73.98));
    }

    #[rstest]
    fn zone_order_is_preserved(dataset: Dataset) {
        assert_eq!(dataset.zones().len(), 1);
        assert_eq!(dataset.amenities().len(), 2);
        assert_eq!(
            dataset.amenities().first().map(|a| a.kind.as_str()),
            Some("park")
        );
    }
}
