//! Reference coordinate coercion for ranking requests
//!
//! Query-string coordinates go through the same presence, parse and range
//! rules as the coordinates of a submitted school.

use serde_json::Value;

use super::errors::{Field, ValidationError, ValidationResult};
use super::validator::{check_range, is_absent, parse_number};
use crate::school::Coordinate;

/// Parse a reference coordinate where both components are required.
pub fn parse_reference(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> ValidationResult<Coordinate> {
    let latitude = present(latitude, Field::Latitude)?;
    let longitude = present(longitude, Field::Longitude)?;

    let latitude = parse_number(&latitude, Field::Latitude)?;
    let longitude = parse_number(&longitude, Field::Longitude)?;

    check_range(latitude, Field::Latitude)?;
    check_range(longitude, Field::Longitude)?;

    Ok(Coordinate::new(latitude, longitude))
}

/// Parse a reference coordinate, substituting each absent component from
/// `fallback`. Supplied components are still parsed and range-checked.
pub fn reference_or(
    latitude: Option<&str>,
    longitude: Option<&str>,
    fallback: Coordinate,
) -> ValidationResult<Coordinate> {
    let latitude = component_or(latitude, Field::Latitude, fallback.latitude)?;
    let longitude = component_or(longitude, Field::Longitude, fallback.longitude)?;

    check_range(latitude, Field::Latitude)?;
    check_range(longitude, Field::Longitude)?;

    Ok(Coordinate::new(latitude, longitude))
}

fn present(raw: Option<&str>, field: Field) -> ValidationResult<Value> {
    let value = raw.map(|s| Value::String(s.to_string()));
    if is_absent(value.as_ref()) {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.unwrap_or(Value::Null))
}

fn component_or(raw: Option<&str>, field: Field, fallback: f64) -> ValidationResult<f64> {
    match raw {
        Some(s) if !s.is_empty() => parse_number(&Value::String(s.to_string()), field),
        _ => Ok(fallback),
    }
}
