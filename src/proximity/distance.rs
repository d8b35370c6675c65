//! Great-circle distance on a spherical Earth

use crate::school::Coordinate;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points, using the
/// spherical law of cosines.
///
/// The inverse cosine argument is clamped to [-1, 1]; for coincident points
/// rounding can push it to 1.0000000000000002, which would yield NaN.
pub fn great_circle_km(from: Coordinate, to: Coordinate) -> f64 {
    if from == to {
        return 0.0;
    }

    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lon = to.longitude.to_radians() - from.longitude.to_radians();

    let cos_angle = from_lat.cos() * to_lat.cos() * delta_lon.cos() + from_lat.sin() * to_lat.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}
