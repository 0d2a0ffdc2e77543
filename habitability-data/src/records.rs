//! Wire-format records for the JSON reference data files.
//!
//! Amenities arrive as a flat array of `{latitude, longitude, type}`
//! objects. Zone records carry an `aspect`, a closed ring of
//! `[longitude, latitude]` pairs, and their raw metric under a key named
//! after the aspect family (`"crime_rate": 4.2` and so on); the metric key
//! is found by probing the record's remaining fields against the known
//! aspect names, mirroring how the original data was keyed.

use std::collections::BTreeMap;

use geo::Coord;
use habitability_core::{Amenity, Aspect, Zone};
use serde::Deserialize;

/// One amenity record as stored in the reference file.
#[derive(Debug, Deserialize)]
pub(crate) struct AmenityRecord {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "type")]
    kind: String,
}

impl From<AmenityRecord> for Amenity {
    fn from(record: AmenityRecord) -> Self {
        Self::new(record.latitude, record.longitude, record.kind)
    }
}

/// One zone record as stored in the reference file.
#[derive(Debug, Deserialize)]
pub(crate) struct ZoneRecord {
    aspect: String,
    /// Ring vertices as `[longitude, latitude]` pairs.
    coordinates: Vec<[f64; 2]>,
    /// Remaining fields, one of which holds the metric value.
    #[serde(flatten)]
    metrics: BTreeMap<String, serde_json::Value>,
}

impl ZoneRecord {
    /// Convert the record into a [`Zone`], or `None` when it is unusable.
    ///
    /// Records with an unrecognised aspect, or without a numeric metric
    /// under any known-aspect key, are skipped: malformed reference data
    /// degrades rather than fails.
    pub(crate) fn into_zone(self) -> Option<Zone> {
        let Some(aspect) = Aspect::parse(&self.aspect) else {
            log::warn!("skipping zone with unknown aspect '{}'", self.aspect);
            return None;
        };
        let Some(value) = self.metric_value() else {
            log::warn!("skipping {aspect} zone without a numeric metric value");
            return None;
        };
        let ring = self
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect();
        Some(Zone::new(aspect, ring, value))
    }

    /// The first numeric field stored under a known aspect name.
    fn metric_value(&self) -> Option<f64> {
        self.metrics
            .iter()
            .filter(|(key, _)| Aspect::parse(key).is_some())
            .find_map(|(_, value)| value.as_f64())
    }
}
