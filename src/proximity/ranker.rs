//! Proximity ranking
//!
//! Orders schools by distance from a reference point. Ties on distance are
//! broken by name, then by id, so the result is a total order that does not
//! depend on the order the store returned rows in.

use std::cmp::Ordering;

use serde::Serialize;

use super::distance::great_circle_km;
use crate::school::{Coordinate, School};

/// A school paired with its distance from the reference point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSchool {
    #[serde(flatten)]
    pub school: School,
    /// Distance in kilometres
    pub distance: f64,
}

/// Rank `schools` by distance from `reference`.
///
/// The input is left untouched; the returned vector owns clones.
pub fn rank(schools: &[School], reference: Coordinate) -> Vec<RankedSchool> {
    let mut ranked: Vec<RankedSchool> = schools
        .iter()
        .map(|school| RankedSchool {
            distance: great_circle_km(reference, school.coordinate()),
            school: school.clone(),
        })
        .collect();

    ranked.sort_by(compare);
    ranked
}

/// Rank from `reference`, or from [`Coordinate::FALLBACK`] when absent.
pub fn rank_from(schools: &[School], reference: Option<Coordinate>) -> Vec<RankedSchool> {
    rank(schools, reference.unwrap_or(Coordinate::FALLBACK))
}

fn compare(a: &RankedSchool, b: &RankedSchool) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.school.name.cmp(&b.school.name))
        .then_with(|| a.school.id.cmp(&b.school.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(id: u64, name: &str, latitude: f64, longitude: f64) -> School {
        School {
            id,
            name: name.to_string(),
            address: format!("{} Road", id),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_equator_scenario() {
        let schools = vec![school(2, "Beta", 0.0, 1.0), school(1, "Alpha", 0.0, 0.0)];
        let ranked = rank(&schools, Coordinate::new(0.0, 0.0));

        assert_eq!(ranked[0].school.name, "Alpha");
        assert_eq!(ranked[0].distance, 0.0);
        assert_eq!(ranked[1].school.name, "Beta");
        assert!((ranked[1].distance - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_name_breaks_distance_ties() {
        let schools = vec![
            school(1, "Charlie", 10.0, 10.0),
            school(2, "Alpha", 10.0, 10.0),
            school(3, "Bravo", 10.0, 10.0),
        ];
        let names: Vec<_> = rank(&schools, Coordinate::new(0.0, 0.0))
            .into_iter()
            .map(|r| r.school.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn test_id_breaks_full_ties() {
        let schools = vec![school(9, "Same", 1.0, 1.0), school(4, "Same", 1.0, 1.0)];
        let ranked = rank(&schools, Coordinate::new(0.0, 0.0));
        assert_eq!(ranked[0].school.id, 4);
        assert_eq!(ranked[1].school.id, 9);
    }

    #[test]
    fn test_input_not_mutated() {
        let schools = vec![school(1, "Far", 50.0, 50.0), school(2, "Near", 0.0, 0.0)];
        let before = schools.clone();
        let _ = rank(&schools, Coordinate::new(0.0, 0.0));
        assert_eq!(schools, before);
    }

    #[test]
    fn test_rank_from_uses_fallback() {
        let schools = vec![
            school(1, "Mumbai", 19.0760, 72.8777),
            school(2, "Delhi", 28.6139, 77.2090),
        ];
        let ranked = rank_from(&schools, None);
        assert_eq!(ranked[0].school.name, "Delhi");
        assert_eq!(ranked[0].distance, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank(&[], Coordinate::FALLBACK).is_empty());
    }

    #[test]
    fn test_serializes_with_distance() {
        let ranked = rank(&[school(1, "Alpha", 0.0, 0.0)], Coordinate::new(0.0, 0.0));
        let json = serde_json::to_value(&ranked).unwrap();
        assert_eq!(json[0]["name"], "Alpha");
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["distance"], 0.0);
    }
}
