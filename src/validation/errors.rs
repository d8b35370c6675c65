//! Validation error types
//!
//! Every rejection names exactly one cause. Callers never see an aggregate
//! of several problems.

use std::fmt;

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fields of a candidate school
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Address,
    Latitude,
    Longitude,
}

impl Field {
    /// All fields in the order presence is checked.
    pub const ALL: [Field; 4] = [Field::Name, Field::Address, Field::Latitude, Field::Longitude];

    /// JSON / query-string key for this field
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }

    /// Capitalized label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Address => "Address",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a candidate record or reference coordinate is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is absent, null, or an empty string
    #[error("{0} is required")]
    MissingField(Field),

    /// Field has the wrong JSON type (e.g. a boolean latitude)
    #[error("{field} must be {expected}")]
    InvalidType { field: Field, expected: &'static str },

    /// Field has the right type but an unacceptable shape
    #[error("{field} {reason}")]
    InvalidFormat { field: Field, reason: &'static str },

    /// Coordinate parsed but lies outside its valid range
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: Field, min: f64, max: f64 },
}

impl ValidationError {
    /// The field this rejection refers to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingField(field) => *field,
            ValidationError::InvalidType { field, .. } => *field,
            ValidationError::InvalidFormat { field, .. } => *field,
            ValidationError::OutOfRange { field, .. } => *field,
        }
    }

    /// Stable code for logs
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MissingField(_) => "MISSING_FIELD",
            ValidationError::InvalidType { .. } => "INVALID_TYPE",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}
