//! Fixed configuration tables for the scoring engine.
//!
//! The tables are plain data passed into
//! [`HabitabilityScorer`](crate::HabitabilityScorer) at construction, not
//! module-level mutable state, so tests can substitute their own tables and
//! concurrent readers share immutable configuration.
//!
//! [`ScoringConfig::default`] carries the Manhattan calibration: aspect
//! ranges derived from the observed min/max of the reference zone data, and
//! an amenity table pairing each kind with a polarity and maximum
//! contribution.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Aspect;

/// Normalisation range for one aspect.
///
/// `invert` marks aspects where a lower raw value is better (crime, rent,
/// pollution, distance to transit): the normalised score is flipped so that
/// 100 always means "most habitable".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AspectRange {
    /// Raw value mapped to the bottom of the scale.
    pub min: f64,
    /// Raw value mapped to the top of the scale. Must exceed `min`.
    pub max: f64,
    /// Flip the normalised score when lower raw values are better.
    pub invert: bool,
}

/// Whether an amenity kind helps or harms habitability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// Proximity adds to the raw total.
    Positive,
    /// Proximity subtracts from the raw total.
    Negative,
}

/// Proximity weighting for one amenity kind.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmenityWeight {
    /// Direction of the contribution.
    pub polarity: Polarity,
    /// Contribution at distance zero; decays linearly to zero at the
    /// influence radius.
    pub max_score: f64,
}

/// Relative weighting of the zone and proximity components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreWeights {
    /// Multiplier applied to the zone score.
    pub zone: f64,
    /// Multiplier applied to the proximity score.
    pub proximity: f64,
}

impl ScoreWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Validate the weights.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWeights`] when either weight is
    /// non-finite or negative, or the pair does not sum to 1.0.
    #[expect(
        clippy::float_arithmetic,
        reason = "validation sums the weights to check they total 1.0"
    )]
    pub fn validate(self) -> Result<Self, ConfigError> {
        let finite = self.zone.is_finite() && self.proximity.is_finite();
        let non_negative = self.zone >= 0.0 && self.proximity >= 0.0;
        let sums_to_one = (self.zone + self.proximity - 1.0).abs() <= Self::SUM_TOLERANCE;
        if finite && non_negative && sums_to_one {
            Ok(self)
        } else {
            Err(ConfigError::InvalidWeights {
                zone: self.zone,
                proximity: self.proximity,
            })
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            zone: 0.4,
            proximity: 0.6,
        }
    }
}

/// Assumed range of the raw proximity total before rescaling.
///
/// This is a heuristic baked into the calibration, not derived from the
/// actual amenity density: dense datasets can exceed `max` and sparse ones
/// never approach it, in which case the rescaled score saturates rather
/// than spreading. Treat it as an approximation to recalibrate against
/// real data, not a guarantee of score spread.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRange {
    /// Raw total mapped to 0.
    pub min: f64,
    /// Raw total mapped to 100. Must exceed `min`.
    pub max: f64,
}

/// Errors raised when validating a [`ScoringConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Component weights were unusable.
    #[error("score weights must be finite, non-negative, and sum to 1.0 (zone={zone}, proximity={proximity})")]
    InvalidWeights {
        /// Configured zone weight.
        zone: f64,
        /// Configured proximity weight.
        proximity: f64,
    },
    /// The influence radius was not a positive finite number.
    #[error("influence radius must be positive and finite, got {radius_km} km")]
    InvalidRadius {
        /// Configured radius in kilometres.
        radius_km: f64,
    },
    /// An aspect range violated `min < max`.
    #[error("range for {aspect} must satisfy min < max with finite bounds (min={min}, max={max})")]
    InvalidRange {
        /// Aspect whose range is invalid.
        aspect: Aspect,
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The proximity raw range violated `min < max`.
    #[error("proximity raw range must satisfy min < max with finite bounds (min={min}, max={max})")]
    InvalidRawRange {
        /// Configured minimum raw total.
        min: f64,
        /// Configured maximum raw total.
        max: f64,
    },
    /// An amenity weight carried a non-finite or negative maximum score.
    #[error("amenity kind '{kind}' must have a finite, non-negative max score, got {max_score}")]
    InvalidAmenityWeight {
        /// Offending amenity kind.
        kind: String,
        /// Configured maximum score.
        max_score: f64,
    },
}

/// Complete configuration for the scoring engine.
///
/// Fixed at construction time; runtime re-weighting is out of scope. Build
/// a different `ScoringConfig` to change the calibration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringConfig {
    /// Maximum distance at which an amenity affects the proximity score,
    /// in kilometres, the same unit as
    /// [`geometry::distance_km`](crate::geometry::distance_km).
    pub influence_radius_km: f64,
    /// Zone/proximity combination weights.
    pub weights: ScoreWeights,
    /// Normalisation range per aspect. Aspects absent from the table
    /// normalise to the neutral score.
    pub ranges: HashMap<Aspect, AspectRange>,
    /// Proximity weighting per amenity kind. Kinds absent from the table
    /// are ignored.
    pub amenity_weights: HashMap<String, AmenityWeight>,
    /// Assumed raw proximity total range; see [`RawRange`].
    pub proximity_raw_range: RawRange,
}

impl ScoringConfig {
    /// Validate every table entry.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] encountered: unusable weights, a
    /// non-positive radius, an aspect range without `min < max`, a raw
    /// range without `min < max`, or an amenity weight with a non-finite
    /// or negative maximum score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if !(self.influence_radius_km.is_finite() && self.influence_radius_km > 0.0) {
            return Err(ConfigError::InvalidRadius {
                radius_km: self.influence_radius_km,
            });
        }
        for (&aspect, range) in &self.ranges {
            let finite = range.min.is_finite() && range.max.is_finite();
            if !finite || range.min >= range.max {
                return Err(ConfigError::InvalidRange {
                    aspect,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        let raw = self.proximity_raw_range;
        if !(raw.min.is_finite() && raw.max.is_finite()) || raw.min >= raw.max {
            return Err(ConfigError::InvalidRawRange {
                min: raw.min,
                max: raw.max,
            });
        }
        for (kind, weight) in &self.amenity_weights {
            if !weight.max_score.is_finite() || weight.max_score < 0.0 {
                return Err(ConfigError::InvalidAmenityWeight {
                    kind: kind.clone(),
                    max_score: weight.max_score,
                });
            }
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            influence_radius_km: 1.5,
            weights: ScoreWeights::default(),
            ranges: default_ranges(),
            amenity_weights: default_amenity_weights(),
            proximity_raw_range: RawRange {
                min: -50.0,
                max: 100.0,
            },
        }
    }
}

/// Aspect ranges observed across the Manhattan reference zones.
fn default_ranges() -> HashMap<Aspect, AspectRange> {
    HashMap::from([
        (
            Aspect::AirQualityIndex,
            AspectRange {
                min: 11.0,
                max: 22.0,
                invert: true,
            },
        ),
        (
            Aspect::CrimeRate,
            AspectRange {
                min: 2.8,
                max: 6.7,
                invert: true,
            },
        ),
        (
            Aspect::MedianRent,
            AspectRange {
                min: 3400.0,
                max: 5800.0,
                invert: true,
            },
        ),
        (
            Aspect::SchoolQuality,
            AspectRange {
                min: 6.4,
                max: 9.1,
                invert: false,
            },
        ),
        (
            Aspect::TransitDistance,
            AspectRange {
                min: 0.05,
                max: 0.45,
                invert: true,
            },
        ),
    ])
}

fn default_amenity_weights() -> HashMap<String, AmenityWeight> {
    const fn positive(max_score: f64) -> AmenityWeight {
        AmenityWeight {
            polarity: Polarity::Positive,
            max_score,
        }
    }
    const fn negative(max_score: f64) -> AmenityWeight {
        AmenityWeight {
            polarity: Polarity::Negative,
            max_score,
        }
    }

    let entries = [
        ("park", positive(10.0)),
        ("grocery", positive(10.0)),
        ("school", positive(10.0)),
        ("hospital", positive(10.0)),
        ("museum", positive(7.0)),
        ("library", positive(7.0)),
        ("pharmacy", positive(5.0)),
        ("gym", positive(5.0)),
        ("community_center", positive(5.0)),
        ("cafe", positive(5.0)),
        ("shopping", positive(5.0)),
        ("police_station", positive(3.0)),
        ("fire_station", positive(3.0)),
        ("waste_facility", negative(15.0)),
        ("jail", negative(15.0)),
        ("prison", negative(15.0)),
        ("hazardous_waste", negative(15.0)),
        ("crime_hotspot", negative(15.0)),
        ("sanitation_facility", negative(8.0)),
        ("industrial_complex", negative(8.0)),
        ("power_plant", negative(8.0)),
        ("homeless_shelter", negative(5.0)),
        ("methadone_clinic", negative(5.0)),
        ("adult_entertainment", negative(5.0)),
    ];
    entries
        .into_iter()
        .map(|(kind, weight)| (kind.to_owned(), weight))
        .collect()
}
