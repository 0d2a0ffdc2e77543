//! Zone metric categories.
//!
//! Each zone polygon carries exactly one metric drawn from this closed set.
//! The enum gives compile-time safety for range-table lookups, while the
//! snake_case wire names match the reference data files.
//!
//! # Examples
//! ```
//! use habitability_core::Aspect;
//!
//! assert_eq!(Aspect::CrimeRate.as_str(), "crime_rate");
//! assert_eq!(Aspect::parse("median_rent"), Some(Aspect::MedianRent));
//! assert_eq!(Aspect::parse("noise"), None);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named zone-level metric category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Aspect {
    /// Ambient air quality index; lower readings are better.
    AirQualityIndex,
    /// Reported crimes per capita; lower is better.
    CrimeRate,
    /// Median monthly rent in dollars; lower is better.
    MedianRent,
    /// School quality rating; higher is better.
    SchoolQuality,
    /// Distance to the nearest transit stop; lower is better.
    TransitDistance,
}

impl Aspect {
    /// Every aspect, in the fixed order the zone scorer traverses them.
    ///
    /// The order is part of the engine's determinism guarantee: combined
    /// with zone load order it makes overlapping-zone tie-breaks stable.
    pub const ALL: [Self; 5] = [
        Self::AirQualityIndex,
        Self::CrimeRate,
        Self::MedianRent,
        Self::SchoolQuality,
        Self::TransitDistance,
    ];

    /// Return the aspect's snake_case wire name.
    ///
    /// # Examples
    /// ```
    /// use habitability_core::Aspect;
    ///
    /// assert_eq!(Aspect::SchoolQuality.as_str(), "school_quality");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AirQualityIndex => "air_quality_index",
            Self::CrimeRate => "crime_rate",
            Self::MedianRent => "median_rent",
            Self::SchoolQuality => "school_quality",
            Self::TransitDistance => "transit_distance",
        }
    }

    /// Parse a wire name back into an aspect.
    ///
    /// Returns `None` for unrecognised names; callers are expected to skip
    /// such records rather than fail.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|aspect| aspect.as_str() == name)
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Aspect;

    #[rstest]
    #[case(Aspect::AirQualityIndex, "air_quality_index")]
    #[case(Aspect::CrimeRate, "crime_rate")]
    #[case(Aspect::MedianRent, "median_rent")]
    #[case(Aspect::SchoolQuality, "school_quality")]
    #[case(Aspect::TransitDistance, "transit_distance")]
    fn wire_names_round_trip(#[case] aspect: Aspect, #[case] name: &str) {
        assert_eq!(aspect.as_str(), name);
        assert_eq!(Aspect::parse(name), Some(aspect));
    }

    #[rstest]
    #[case("noise_level")]
    #[case("")]
    #[case("Crime_Rate")]
    fn unknown_names_do_not_parse(#[case] name: &str) {
        assert_eq!(Aspect::parse(name), None);
    }

    #[rstest]
    fn all_lists_every_aspect_once() {
        let mut names: Vec<_> = Aspect::ALL.iter().map(|a| a.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Aspect::ALL.len());
    }
}
