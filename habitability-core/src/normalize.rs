//! Linear rescaling of raw metric values onto the 0–100 scale.
//!
//! Normalisation fails soft: an absent range yields the neutral score
//! rather than an error, so out-of-coverage queries degrade instead of
//! crashing. Out-of-range raw values are common in real data and clamp to
//! the scale's bounds.

use crate::config::AspectRange;

/// The score contributed when no information is available.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Top of the normalised scale.
pub(crate) const SCALE_MAX: f64 = 100.0;

/// Map a raw metric value onto `[0, 100]` for the given range.
///
/// Returns [`NEUTRAL_SCORE`] when no range is configured or the range is
/// degenerate (`max <= min`). Otherwise rescales linearly, clamps to
/// `[0, 100]`, and inverts (`100 - x`) when the range marks lower raw
/// values as better.
///
/// Monotonic in `value` for a fixed range: non-decreasing when
/// `invert == false`, non-increasing otherwise.
///
/// # Examples
/// ```
/// use habitability_core::{AspectRange, normalize::normalize};
///
/// let crime = AspectRange { min: 2.8, max: 6.7, invert: true };
/// assert_eq!(normalize(2.8, Some(&crime)), 100.0);
/// assert_eq!(normalize(6.7, Some(&crime)), 0.0);
/// assert_eq!(normalize(1.0, None), 50.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "normalisation is a linear rescale over raw metric values"
)]
pub fn normalize(value: f64, range: Option<&AspectRange>) -> f64 {
    let Some(range) = range else {
        return NEUTRAL_SCORE;
    };
    if range.max <= range.min {
        return NEUTRAL_SCORE;
    }
    let scaled = rescale(value, range.min, range.max);
    if range.invert { SCALE_MAX - scaled } else { scaled }
}

/// Linearly rescale `value` from `[min, max]` onto `[0, 100]`, clamped.
///
/// Shared by aspect normalisation and the proximity total; callers must
/// guarantee `max > min`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rescaling is the engine's core arithmetic"
)]
pub(crate) fn rescale(value: f64, min: f64, max: f64) -> f64 {
    ((value - min) / (max - min) * SCALE_MAX).clamp(0.0, SCALE_MAX)
}
