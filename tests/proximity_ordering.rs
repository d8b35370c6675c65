//! Proximity Ordering Tests
//!
//! - output is non-decreasing in distance
//! - equal distances are ordered by name
//! - output does not depend on input order
//! - a record at the reference point is at distance 0

use geoschool::proximity::{rank, rank_from, RankedSchool};
use geoschool::school::{Coordinate, School};
use rand::seq::SliceRandom;
use rand::Rng;

// =============================================================================
// Test Utilities
// =============================================================================

fn school(id: u64, name: &str, latitude: f64, longitude: f64) -> School {
    School {
        id,
        name: name.to_string(),
        address: format!("{} Example Road", id),
        latitude,
        longitude,
    }
}

fn random_schools<R: Rng>(rng: &mut R, count: u64) -> Vec<School> {
    const NAMES: [&str; 5] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo"];
    // A small coordinate grid so distance ties actually occur
    (1..=count)
        .map(|id| {
            school(
                id,
                NAMES[rng.gen_range(0..NAMES.len())],
                rng.gen_range(-3..=3) as f64 * 10.0,
                rng.gen_range(-3..=3) as f64 * 20.0,
            )
        })
        .collect()
}

fn names(ranked: &[RankedSchool]) -> Vec<&str> {
    ranked.iter().map(|r| r.school.name.as_str()).collect()
}

// =============================================================================
// Ordering invariants
// =============================================================================

#[test]
fn test_non_decreasing_with_name_tie_break() {
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let schools = random_schools(&mut rng, 40);
        let reference = Coordinate::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0));
        let ranked = rank(&schools, reference);

        assert_eq!(ranked.len(), schools.len());
        for pair in ranked.windows(2) {
            assert!(
                pair[0].distance <= pair[1].distance,
                "distance decreased: {} then {}",
                pair[0].distance,
                pair[1].distance
            );
            if pair[0].distance == pair[1].distance {
                assert!(pair[0].school.name <= pair[1].school.name);
            }
        }
    }
}

#[test]
fn test_permutation_stable() {
    let mut rng = rand::thread_rng();
    let reference = Coordinate::new(0.0, 0.0);

    for _ in 0..20 {
        let schools = random_schools(&mut rng, 30);
        let expected = rank(&schools, reference);

        let mut shuffled = schools.clone();
        for _ in 0..10 {
            shuffled.shuffle(&mut rng);
            assert_eq!(rank(&shuffled, reference), expected);
        }
    }
}

#[test]
fn test_self_reference_is_zero() {
    let schools = vec![
        school(1, "Polar", 90.0, 0.0),
        school(2, "Dateline", -45.5, 180.0),
        school(3, "Odd", 33.333333333, -117.777777777),
    ];

    for s in &schools {
        let ranked = rank(&schools, s.coordinate());
        assert_eq!(ranked[0].school.id, s.id);
        assert_eq!(ranked[0].distance, 0.0);
        assert!(ranked.iter().all(|r| r.distance.is_finite()));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_equator_alpha_beta() {
    let schools = vec![school(2, "Beta", 0.0, 1.0), school(1, "Alpha", 0.0, 0.0)];
    let ranked = rank(&schools, Coordinate::new(0.0, 0.0));

    assert_eq!(names(&ranked), vec!["Alpha", "Beta"]);
    assert!(ranked[0].distance.abs() < 1e-9);
    assert!((ranked[1].distance - 111.19).abs() < 0.01, "got {}", ranked[1].distance);
}

#[test]
fn test_equal_distance_sorted_by_name() {
    let schools = vec![
        school(1, "Charlie", 5.0, 5.0),
        school(2, "Alpha", 5.0, 5.0),
        school(3, "Bravo", 5.0, 5.0),
    ];
    let ranked = rank(&schools, Coordinate::new(-12.0, 40.0));
    assert_eq!(names(&ranked), vec!["Alpha", "Bravo", "Charlie"]);
}

#[test]
fn test_fallback_reference() {
    let schools = vec![
        school(1, "Chennai", 13.0827, 80.2707),
        school(2, "Noida", 28.5355, 77.3910),
        school(3, "Kolkata", 22.5726, 88.3639),
    ];

    assert_eq!(rank_from(&schools, None), rank(&schools, Coordinate::FALLBACK));
    assert_eq!(
        names(&rank_from(&schools, None)),
        vec!["Noida", "Kolkata", "Chennai"]
    );
}
