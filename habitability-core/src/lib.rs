//! Core scoring engine for habitability queries.
//!
//! The crate computes a 0–100 habitability score for a geographic point by
//! combining two signals over an immutable in-memory [`Dataset`]:
//!
//! - a **zone score** from the metric zones the point falls in (air quality,
//!   crime rate, rent, school quality, transit distance), and
//! - a **proximity score** from nearby point amenities, weighted by distance
//!   with linear decay inside a fixed influence radius.
//!
//! All reference data is loaded once and never mutated; scoring is a pure
//! function of the query point, so concurrent read-only use across threads
//! needs no locking. Missing or unknown data degrades to a neutral
//! contribution rather than failing; the only fallible operation is
//! configuration validation at construction time.
//!
//! Coordinates are WGS84 throughout, with `geo`'s `x = longitude` and
//! `y = latitude` axis order. The public entry points take `(latitude,
//! longitude)` per the caller-facing contract and convert internally.
//!
//! # Examples
//!
//! ```
//! use habitability_core::{Amenity, Dataset, HabitabilityScorer, ScoringConfig};
//!
//! # fn main() -> Result<(), habitability_core::ConfigError> {
//! let amenities = vec![Amenity::new(40.7812, -73.9665, "park")];
//! let dataset = Dataset::new(amenities, Vec::new());
//! let scorer = HabitabilityScorer::new(ScoringConfig::default(), dataset)?;
//!
//! if scorer.is_within_bounds(40.7812, -73.9665) {
//!     let result = scorer.score(40.7812, -73.9665);
//!     assert!(result.final_score <= 100);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod amenity;
mod aspect;
mod config;
mod dataset;
pub mod geometry;
pub mod normalize;
mod score;
mod zone;

pub use amenity::Amenity;
pub use aspect::Aspect;
pub use config::{
    AmenityWeight, AspectRange, ConfigError, Polarity, RawRange, ScoreWeights, ScoringConfig,
};
pub use dataset::Dataset;
pub use normalize::NEUTRAL_SCORE;
pub use score::{HabitabilityScorer, ScoreResult};
pub use zone::Zone;
