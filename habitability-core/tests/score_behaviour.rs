//! End-to-end behaviour of the habitability scorer over a small Manhattan
//! fixture dataset.

use geo::Coord;
use habitability_core::{
    Amenity, Aspect, Dataset, HabitabilityScorer, ScoreResult, ScoringConfig, Zone,
};
use rstest::rstest;

const QUERY_LAT: f64 = 40.75;
const QUERY_LON: f64 = -73.98;

/// Square zone covering the query point.
fn covering_zone(aspect: Aspect, value: f64) -> Zone {
    Zone::new(
        aspect,
        vec![
            Coord { x: -74.03, y: 40.70 },
            Coord { x: -73.93, y: 40.70 },
            Coord { x: -73.93, y: 40.80 },
            Coord { x: -74.03, y: 40.80 },
        ],
        value,
    )
}

fn scorer(amenities: Vec<Amenity>, zones: Vec<Zone>) -> HabitabilityScorer {
    HabitabilityScorer::new(ScoringConfig::default(), Dataset::new(amenities, zones))
        .expect("default configuration is valid")
}

#[rstest]
// No data at all: neutral zone, rescaled-zero proximity, final
// round(50 * 0.4 + 33.33 * 0.6) = 40.
#[case::all_neutral(Vec::new(), Vec::new(), ScoreResult { final_score: 40, zone_score: 50, proximity_score: 33 })]
// A park at the query point contributes its full max score of 10:
// proximity (10 + 50) / 150 * 100 = 40.
#[case::park_at_point(
    vec![Amenity::new(QUERY_LAT, QUERY_LON, "park")],
    Vec::new(),
    ScoreResult { final_score: 44, zone_score: 50, proximity_score: 40 }
)]
// The documented combination scenario: a school_quality zone normalising
// to 80 plus the park proximity of 40 gives round(80 * 0.4 + 40 * 0.6) = 56.
#[case::weighted_combination(
    vec![Amenity::new(QUERY_LAT, QUERY_LON, "park")],
    vec![covering_zone(Aspect::SchoolQuality, 8.56)],
    ScoreResult { final_score: 56, zone_score: 80, proximity_score: 40 }
)]
// crime_rate inverts: a zone at the configured minimum scores 100.
#[case::crime_minimum(
    Vec::new(),
    vec![covering_zone(Aspect::CrimeRate, 2.8)],
    ScoreResult { final_score: 60, zone_score: 100, proximity_score: 33 }
)]
// ...and one at the configured maximum scores 0.
#[case::crime_maximum(
    Vec::new(),
    vec![covering_zone(Aspect::CrimeRate, 6.7)],
    ScoreResult { final_score: 20, zone_score: 0, proximity_score: 33 }
)]
// Overlapping zones for one aspect: the first loaded polygon wins.
#[case::first_match_wins(
    Vec::new(),
    vec![covering_zone(Aspect::CrimeRate, 2.8), covering_zone(Aspect::CrimeRate, 6.7)],
    ScoreResult { final_score: 60, zone_score: 100, proximity_score: 33 }
)]
// A hazard at the point drags proximity below the empty-data constant.
#[case::hazard_at_point(
    vec![Amenity::new(QUERY_LAT, QUERY_LON, "waste_facility")],
    Vec::new(),
    ScoreResult { final_score: 34, zone_score: 50, proximity_score: 23 }
)]
// Unknown amenity kinds are silently ignored.
#[case::unknown_kind_ignored(
    vec![Amenity::new(QUERY_LAT, QUERY_LON, "teleporter")],
    Vec::new(),
    ScoreResult { final_score: 40, zone_score: 50, proximity_score: 33 }
)]
fn score_scenarios(
    #[case] amenities: Vec<Amenity>,
    #[case] zones: Vec<Zone>,
    #[case] expected: ScoreResult,
) {
    let scorer = scorer(amenities, zones);
    let result = scorer.score(QUERY_LAT, QUERY_LON);
    assert_eq!(result, expected);
    assert!(result.final_score <= 100);
    assert!(result.zone_score <= 100);
    assert!(result.proximity_score <= 100);
}

#[rstest]
fn repeated_queries_are_bit_identical() {
    let scorer = scorer(
        vec![
            Amenity::new(QUERY_LAT, QUERY_LON, "park"),
            Amenity::new(QUERY_LAT + 0.003, QUERY_LON, "library"),
            Amenity::new(QUERY_LAT, QUERY_LON + 0.004, "jail"),
        ],
        vec![
            covering_zone(Aspect::CrimeRate, 4.1),
            covering_zone(Aspect::MedianRent, 5100.0),
        ],
    );
    let first = scorer.score(QUERY_LAT, QUERY_LON);
    let second = scorer.score(QUERY_LAT, QUERY_LON);
    assert_eq!(first, second);
}

#[rstest]
fn bounds_guard_rejects_points_outside_the_data() {
    let scorer = scorer(
        vec![Amenity::new(QUERY_LAT, QUERY_LON, "park")],
        vec![covering_zone(Aspect::CrimeRate, 4.1)],
    );
    assert!(scorer.is_within_bounds(QUERY_LAT, QUERY_LON));
    // Zone vertices stretch the envelope past the lone amenity.
    assert!(scorer.is_within_bounds(40.70, -74.03));
    // London is not Manhattan.
    assert!(!scorer.is_within_bounds(51.5074, -0.1278));
}

#[rstest]
fn out_of_coverage_points_score_degenerate_neutral_rather_than_failing() {
    let scorer = scorer(
        vec![Amenity::new(QUERY_LAT, QUERY_LON, "park")],
        vec![covering_zone(Aspect::CrimeRate, 4.1)],
    );
    // The combiner performs no bounds validation; a far-away point simply
    // finds no zones and no amenities in radius.
    let result = scorer.score(51.5074, -0.1278);
    assert_eq!(result.zone_score, 50);
    assert_eq!(result.proximity_score, 33);
}
