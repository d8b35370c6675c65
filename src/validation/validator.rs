//! Candidate school validation
//!
//! Checks run in a fixed priority order and the first failure wins:
//!
//! 1. presence of all four fields
//! 2. JSON types (`name` is a string, coordinates are not booleans)
//! 3. name format
//! 4. address format
//! 5. coordinate parse
//! 6. coordinate range

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::errors::{Field, ValidationError, ValidationResult};
use crate::school::{NewSchool, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Maximum raw address length in characters
pub const MAX_ADDRESS_LEN: usize = 255;

const NAME_PATTERN: &str = r"^[A-Za-z\s]{2,100}$";

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("name pattern is a valid regex"))
}

/// Validate a raw JSON candidate and normalize it.
///
/// A body that is not a JSON object has none of the required fields and is
/// rejected as `MissingField(Name)`.
pub fn validate(candidate: &Value) -> ValidationResult<NewSchool> {
    for field in Field::ALL {
        require(candidate.get(field.key()), field)?;
    }

    let name = candidate.get(Field::Name.key()).unwrap_or(&Value::Null);
    let address = candidate.get(Field::Address.key()).unwrap_or(&Value::Null);
    let latitude = candidate.get(Field::Latitude.key()).unwrap_or(&Value::Null);
    let longitude = candidate.get(Field::Longitude.key()).unwrap_or(&Value::Null);

    let name = name.as_str().ok_or(ValidationError::InvalidType {
        field: Field::Name,
        expected: "a string",
    })?;
    check_coordinate_type(latitude, Field::Latitude)?;
    check_coordinate_type(longitude, Field::Longitude)?;

    if !name_regex().is_match(name) {
        return Err(ValidationError::InvalidFormat {
            field: Field::Name,
            reason: "must be 2-100 alphabetic characters",
        });
    }

    let address = address
        .as_str()
        .filter(|a| !a.trim().is_empty() && a.chars().count() <= MAX_ADDRESS_LEN)
        .ok_or(ValidationError::InvalidFormat {
            field: Field::Address,
            reason: "must be a non-empty string (max 255 characters)",
        })?;

    let latitude = parse_number(latitude, Field::Latitude)?;
    let longitude = parse_number(longitude, Field::Longitude)?;

    check_range(latitude, Field::Latitude)?;
    check_range(longitude, Field::Longitude)?;

    Ok(NewSchool {
        name: name.trim().to_string(),
        address: address.trim().to_string(),
        latitude,
        longitude,
    })
}

/// Absent, `null` and `""` all count as missing.
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn require(value: Option<&Value>, field: Field) -> ValidationResult<()> {
    if is_absent(value) {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Coordinates arrive as JSON numbers or numeric strings. Booleans would
/// coerce to 0/1 in a loosely typed client, so they get their own rejection.
pub(crate) fn check_coordinate_type(value: &Value, field: Field) -> ValidationResult<()> {
    match value {
        Value::Number(_) | Value::String(_) => Ok(()),
        Value::Bool(_) => Err(ValidationError::InvalidType {
            field,
            expected: "a number, not a boolean",
        }),
        _ => Err(ValidationError::InvalidType {
            field,
            expected: "a number or numeric string",
        }),
    }
}

pub(crate) fn parse_number(value: &Value, field: Field) -> ValidationResult<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::InvalidFormat {
            field,
            reason: "must be a valid number",
        })
}

pub(crate) fn check_range(value: f64, field: Field) -> ValidationResult<()> {
    let (min, max) = match field {
        Field::Latitude => LATITUDE_RANGE,
        Field::Longitude => LONGITUDE_RANGE,
        Field::Name | Field::Address => return Ok(()),
    };

    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "St Mary",
            "address": "1 Main St",
            "latitude": 12.34,
            "longitude": 56.78
        })
    }

    #[test]
    fn test_valid_candidate_is_normalized() {
        let mut candidate = valid();
        candidate["name"] = json!("  Green Valley  ");
        candidate["address"] = json!("  42 Hill Road ");
        candidate["latitude"] = json!("  -33.5");

        let school = validate(&candidate).unwrap();
        assert_eq!(school.name, "Green Valley");
        assert_eq!(school.address, "42 Hill Road");
        assert_eq!(school.latitude, -33.5);
        assert_eq!(school.longitude, 56.78);
    }

    #[test]
    fn test_name_pattern_applies_before_trimming() {
        let mut candidate = valid();
        candidate["name"] = json!(" A");
        assert_eq!(validate(&candidate).unwrap().name, "A");

        candidate["name"] = json!("   ");
        assert_eq!(validate(&candidate).unwrap().name, "");
    }

    #[test]
    fn test_missing_checked_before_type() {
        let candidate = json!({
            "name": 42,
            "address": "1 Main St",
            "latitude": true
        });
        assert_eq!(
            validate(&candidate),
            Err(ValidationError::MissingField(Field::Longitude))
        );
    }

    #[test]
    fn test_null_and_empty_string_are_missing() {
        let mut candidate = valid();
        candidate["address"] = Value::Null;
        assert_eq!(
            validate(&candidate),
            Err(ValidationError::MissingField(Field::Address))
        );

        let mut candidate = valid();
        candidate["latitude"] = json!("");
        assert_eq!(
            validate(&candidate),
            Err(ValidationError::MissingField(Field::Latitude))
        );
    }

    #[test]
    fn test_non_object_body_is_missing_name() {
        assert_eq!(
            validate(&json!([1, 2, 3])),
            Err(ValidationError::MissingField(Field::Name))
        );
    }

    #[test]
    fn test_boolean_coordinates_rejected() {
        let mut candidate = valid();
        candidate["longitude"] = json!(false);
        let err = validate(&candidate).unwrap_err();
        assert_eq!(err.code(), "INVALID_TYPE");
        assert_eq!(err.field(), Field::Longitude);
    }

    #[test]
    fn test_name_type_before_coordinate_type() {
        let mut candidate = valid();
        candidate["name"] = json!(["St", "Mary"]);
        candidate["latitude"] = json!(true);
        assert_eq!(validate(&candidate).unwrap_err().field(), Field::Name);
    }

    #[test]
    fn test_name_pattern() {
        for bad in ["A", "St. Mary", "School 42", "Ecole Normale Sup\u{e9}rieure"] {
            let mut candidate = valid();
            candidate["name"] = json!(bad);
            assert!(
                matches!(
                    validate(&candidate),
                    Err(ValidationError::InvalidFormat {
                        field: Field::Name,
                        ..
                    })
                ),
                "expected name {:?} to be rejected",
                bad
            );
        }

        let mut candidate = valid();
        candidate["name"] = json!("a".repeat(100));
        assert!(validate(&candidate).is_ok());
        candidate["name"] = json!("a".repeat(101));
        assert!(validate(&candidate).is_err());
    }

    #[test]
    fn test_address_rules() {
        let mut candidate = valid();
        candidate["address"] = json!("   ");
        assert_eq!(validate(&candidate).unwrap_err().field(), Field::Address);

        candidate["address"] = json!(12);
        assert_eq!(validate(&candidate).unwrap_err().code(), "INVALID_FORMAT");

        candidate["address"] = json!("x".repeat(255));
        assert!(validate(&candidate).is_ok());

        candidate["address"] = json!("x".repeat(256));
        assert_eq!(validate(&candidate).unwrap_err().field(), Field::Address);
    }

    #[test]
    fn test_unparseable_coordinates() {
        for bad in [json!("abc"), json!("12abc"), json!("NaN"), json!("inf")] {
            let mut candidate = valid();
            candidate["latitude"] = bad;
            assert_eq!(
                validate(&candidate).unwrap_err(),
                ValidationError::InvalidFormat {
                    field: Field::Latitude,
                    reason: "must be a valid number",
                }
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut candidate = valid();
        candidate["longitude"] = json!(-180.01);
        assert_eq!(
            validate(&candidate).unwrap_err(),
            ValidationError::OutOfRange {
                field: Field::Longitude,
                min: -180.0,
                max: 180.0
            }
        );
    }

    #[test]
    fn test_bounds_inclusive() {
        let mut candidate = valid();
        candidate["latitude"] = json!(-90);
        candidate["longitude"] = json!("180");
        let school = validate(&candidate).unwrap();
        assert_eq!(school.latitude, -90.0);
        assert_eq!(school.longitude, 180.0);
    }
}
