//! Proximity ranking
//!
//! Computes great-circle distances from a reference point and orders schools
//! by them. Pure and stateless; the full record set is scanned on every call.

mod distance;
mod ranker;

pub use distance::{great_circle_km, EARTH_RADIUS_KM};
pub use ranker::{rank, rank_from, RankedSchool};
