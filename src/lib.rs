//! Facade crate for the habitability scoring engine.
//!
//! Re-exports the core domain types and scorer, and exposes the JSON
//! reference-data loader behind the `data-json` feature.

#![forbid(unsafe_code)]

pub use habitability_core::{
    Amenity, AmenityWeight, Aspect, AspectRange, ConfigError, Dataset, HabitabilityScorer,
    NEUTRAL_SCORE, Polarity, RawRange, ScoreResult, ScoreWeights, ScoringConfig, Zone, geometry,
    normalize,
};

#[cfg(feature = "data-json")]
pub use habitability_data::{
    DataError, amenities_from_str, load_amenities, load_dataset, load_zones, zones_from_str,
};
