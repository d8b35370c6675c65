//! Request validation
//!
//! Pure functions that turn loosely typed request input (JSON bodies and
//! query strings) into normalized, range-checked values. Nothing here touches
//! storage.

mod errors;
mod reference;
mod validator;

pub use errors::{Field, ValidationError, ValidationResult};
pub use reference::{parse_reference, reference_or};
pub use validator::{validate, MAX_ADDRESS_LEN};
