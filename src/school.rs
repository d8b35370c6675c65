//! School data model
//!
//! A school is the only entity the service knows about. It is created once,
//! after validation, and never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity assigned by the store on insert.
pub type SchoolId = u64;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Reference point used when a ranking request carries no location
    /// (New Delhi).
    pub const FALLBACK: Coordinate = Coordinate {
        latitude: 28.6139,
        longitude: 77.2090,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both components lie within their valid ranges.
    pub fn is_valid(&self) -> bool {
        (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&self.latitude)
            && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A validated school that has not been stored yet.
///
/// Only the validator produces values of this type outside of tests. The
/// name pattern is matched before trimming, so a name padded with spaces
/// (or made only of spaces) may be shorter than two characters once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewSchool {
    /// Attach the store-assigned identity.
    pub fn with_id(self, id: SchoolId) -> School {
        School {
            id,
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A persisted school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: SchoolId,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_valid() {
        assert!(Coordinate::FALLBACK.is_valid());
        assert_eq!(Coordinate::FALLBACK.latitude, 28.6139);
        assert_eq!(Coordinate::FALLBACK.longitude, 77.2090);
    }

    #[test]
    fn test_coordinate_bounds_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(90.0001, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
    }

    #[test]
    fn test_with_id_keeps_fields() {
        let school = NewSchool {
            name: "St Mary".to_string(),
            address: "1 Main St".to_string(),
            latitude: 12.5,
            longitude: -3.25,
        }
        .with_id(7);

        assert_eq!(school.id, 7);
        assert_eq!(school.name, "St Mary");
        assert_eq!(school.coordinate(), Coordinate::new(12.5, -3.25));
    }

    #[test]
    fn test_school_serializes_flat() {
        let school = School {
            id: 1,
            name: "Alpha".to_string(),
            address: "Somewhere".to_string(),
            latitude: 1.0,
            longitude: 2.0,
        };
        let json = serde_json::to_value(&school).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alpha");
        assert_eq!(json["latitude"], 1.0);
    }
}
