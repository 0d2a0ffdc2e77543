//! Zone scoring, proximity scoring, and the weighted combination.

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{Polarity, ScoringConfig};
use crate::geometry;
use crate::normalize::{NEUTRAL_SCORE, normalize, rescale};
use crate::{Aspect, ConfigError, Dataset};

/// The structured outcome of a habitability query.
///
/// All three fields are integers in `0..=100`. Component scores are
/// rounded independently; the final score is the weighted combination of
/// the *unrounded* components, rounded once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreResult {
    /// Weighted combination of the component scores.
    pub final_score: u8,
    /// Zone component: containing-polygon metrics, normalised and averaged.
    pub zone_score: u8,
    /// Proximity component: distance-decayed amenity contributions,
    /// rescaled.
    pub proximity_score: u8,
}

/// Computes habitability scores over an immutable [`Dataset`].
///
/// Construction validates the configuration once; scoring afterwards is an
/// infallible pure function of the query point. Unknown or missing
/// reference data degrades to neutral contributions rather than erroring.
///
/// The scorer performs no bounds validation. Use
/// [`is_within_bounds`](Self::is_within_bounds) to reject out-of-coverage
/// queries before scoring; far-away points simply score all-neutral.
///
/// # Examples
/// ```
/// use habitability_core::{Amenity, Dataset, HabitabilityScorer, ScoringConfig};
///
/// # fn main() -> Result<(), habitability_core::ConfigError> {
/// let dataset = Dataset::new(vec![Amenity::new(40.75, -73.98, "park")], Vec::new());
/// let scorer = HabitabilityScorer::new(ScoringConfig::default(), dataset)?;
/// let result = scorer.score(40.75, -73.98);
/// assert!(result.final_score <= 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HabitabilityScorer {
    config: ScoringConfig,
    dataset: Dataset,
}

impl HabitabilityScorer {
    /// Build a scorer from validated configuration and loaded data.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any configuration table entry is
    /// invalid; see [`ScoringConfig::validate`].
    pub fn new(config: ScoringConfig, dataset: Dataset) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, dataset })
    }

    /// Score a point given as `(latitude, longitude)` in decimal degrees.
    ///
    /// Deterministic: repeated calls with identical inputs over the same
    /// dataset return bit-identical results. Rounding is
    /// half-away-from-zero (`f64::round`), which on this non-negative
    /// domain is round-half-up.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score is a weighted average of the components"
    )]
    pub fn score(&self, latitude: f64, longitude: f64) -> ScoreResult {
        let point = Coord {
            x: longitude,
            y: latitude,
        };
        let zone = self.zone_score(point);
        let proximity = self.proximity_score(point);
        let combined = zone * self.config.weights.zone + proximity * self.config.weights.proximity;
        ScoreResult {
            final_score: to_score(combined),
            zone_score: to_score(zone),
            proximity_score: to_score(proximity),
        }
    }

    /// Report whether the point lies inside the dataset's envelope.
    ///
    /// Exposed separately so callers can pre-validate input; see
    /// [`Dataset::contains`].
    #[must_use]
    pub fn is_within_bounds(&self, latitude: f64, longitude: f64) -> bool {
        self.dataset.contains(latitude, longitude)
    }

    /// Zone component for an internal longitude-first point, in `[0, 100]`.
    ///
    /// For each aspect, the first loaded zone containing the point supplies
    /// that aspect's raw value; later containing zones are never consulted.
    /// Found values are normalised and averaged. Aspects with no containing
    /// zone contribute nothing; only when *every* aspect is missing does
    /// the whole component default to [`NEUTRAL_SCORE`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "zone scoring averages normalised metric values"
    )]
    pub fn zone_score(&self, point: Coord<f64>) -> f64 {
        let mut total = 0.0;
        let mut found = 0_u32;
        for aspect in Aspect::ALL {
            let containing = self
                .dataset
                .zones()
                .iter()
                .filter(|zone| zone.aspect == aspect)
                .find(|zone| zone.contains(point));
            let Some(zone) = containing else {
                continue;
            };
            total += normalize(zone.value, self.config.ranges.get(&aspect));
            found += 1;
        }
        if found == 0 {
            NEUTRAL_SCORE
        } else {
            total / f64::from(found)
        }
    }

    /// Proximity component for an internal longitude-first point, in
    /// `[0, 100]`.
    ///
    /// Every amenity inside the influence radius contributes
    /// `max_score * (1 - distance / radius)`: full weight at distance zero,
    /// decaying linearly to nothing at the radius. Positive kinds add,
    /// negative kinds subtract, unconfigured kinds are skipped. The signed
    /// total is rescaled from the configured raw range onto `[0, 100]`
    /// with clamping and no inversion.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "proximity scoring accumulates distance-decayed weights"
    )]
    pub fn proximity_score(&self, point: Coord<f64>) -> f64 {
        let radius = self.config.influence_radius_km;
        let mut total = 0.0;
        for amenity in self.dataset.amenities() {
            let distance = geometry::distance_km(point, amenity.location);
            if distance > radius {
                continue;
            }
            let Some(weight) = self.config.amenity_weights.get(&amenity.kind) else {
                continue;
            };
            let contribution = weight.max_score * (1.0 - distance / radius);
            match weight.polarity {
                Polarity::Positive => total += contribution,
                Polarity::Negative => total -= contribution,
            }
        }
        let raw = self.config.proximity_raw_range;
        rescale(total, raw.min, raw.max)
    }
}

/// Round a `[0, 100]` component onto the integer scale.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "the input is clamped to [0, 100] before rounding"
)]
fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}
