//! JSON reference-data loading for the habitability engine.
//!
//! Amenities and zone polygons arrive as flat JSON arrays, loaded once at
//! start-up into an immutable [`Dataset`]. Parsing is strict at the file
//! level (unreadable or syntactically invalid files error) but lenient per
//! record: entries with unknown aspects or missing metric values are
//! skipped with a warning, never surfaced as failures, matching the
//! engine's degrade-gracefully policy.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use habitability_data::load_dataset;
//!
//! # fn main() -> Result<(), habitability_data::DataError> {
//! let dataset = load_dataset(
//!     Utf8Path::new("data/features.json"),
//!     Utf8Path::new("data/features_poly.json"),
//! )?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use camino::Utf8Path;
use habitability_core::{Amenity, Dataset, Zone};

mod error;
mod records;

pub use error::DataError;

use records::{AmenityRecord, ZoneRecord};

/// Parse amenities from a JSON array of `{latitude, longitude, type}`
/// records.
///
/// # Errors
/// Returns [`DataError::Parse`] when the payload is not valid JSON of the
/// expected shape.
pub fn amenities_from_str(json: &str) -> Result<Vec<Amenity>, DataError> {
    let records: Vec<AmenityRecord> =
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            operation: "amenity records",
            source,
        })?;
    Ok(records.into_iter().map(Amenity::from).collect())
}

/// Parse zones from a JSON array of aspect-tagged polygon records.
///
/// Unusable records are skipped with a `warn!`; load order of the
/// remaining zones is preserved for the scorer's first-match tie-break.
///
/// # Errors
/// Returns [`DataError::Parse`] when the payload is not valid JSON of the
/// expected shape.
pub fn zones_from_str(json: &str) -> Result<Vec<Zone>, DataError> {
    let records: Vec<ZoneRecord> =
        serde_json::from_str(json).map_err(|source| DataError::Parse {
            operation: "zone records",
            source,
        })?;
    Ok(records.into_iter().filter_map(ZoneRecord::into_zone).collect())
}

/// Load amenities from a JSON file.
///
/// # Errors
/// Returns [`DataError::Read`] when the file cannot be read and
/// [`DataError::Parse`] when its contents are invalid.
pub fn load_amenities(path: &Utf8Path) -> Result<Vec<Amenity>, DataError> {
    let payload = read_file(path)?;
    let amenities = amenities_from_str(&payload)?;
    log::debug!("loaded {} amenities from {path}", amenities.len());
    Ok(amenities)
}

/// Load zone polygons from a JSON file.
///
/// # Errors
/// Returns [`DataError::Read`] when the file cannot be read and
/// [`DataError::Parse`] when its contents are invalid.
pub fn load_zones(path: &Utf8Path) -> Result<Vec<Zone>, DataError> {
    let payload = read_file(path)?;
    let zones = zones_from_str(&payload)?;
    log::debug!("loaded {} zones from {path}", zones.len());
    Ok(zones)
}

/// Load both reference files and build the dataset index.
///
/// The dataset's bounding envelope is derived here, once, and is read-only
/// afterwards.
///
/// # Errors
/// Propagates [`DataError`] from either file.
pub fn load_dataset(
    amenities_path: &Utf8Path,
    zones_path: &Utf8Path,
) -> Result<Dataset, DataError> {
    let amenities = load_amenities(amenities_path)?;
    let zones = load_zones(zones_path)?;
    Ok(Dataset::new(amenities, zones))
}

fn read_file(path: &Utf8Path) -> Result<String, DataError> {
    std::fs::read_to_string(path.as_std_path()).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })
}
