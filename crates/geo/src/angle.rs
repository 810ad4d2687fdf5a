//! Angle conversions and the shared Earth model.

use std::f64::consts::PI;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters. Every distance, projection and area
/// computation in this crate uses this sphere.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Normalizes a heading in degrees into `[0, 360)`.
///
/// ```
/// use geocoordinates::normalize_heading;
///
/// assert_eq!(normalize_heading(-90.0), 270.0);
/// assert_eq!(normalize_heading(720.0), 0.0);
/// ```
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    let heading = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to 360.0
    if heading >= 360.0 { 0.0 } else { heading }
}

/// Wraps a longitude in degrees into `[-180, 180]`.
///
/// Values already inside the range are returned untouched, so both `180`
/// and `-180` survive as given.
#[inline]
pub fn wrap_longitude(degrees: f64) -> f64 {
    if (-180.0..=180.0).contains(&degrees) {
        degrees
    } else {
        (degrees + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Wraps a longitude difference in radians onto the shorter way round.
#[inline]
pub(crate) fn shortest_delta(radians: f64) -> f64 {
    if radians > PI {
        radians - 2.0 * PI
    } else if radians < -PI {
        radians + 2.0 * PI
    } else {
        radians
    }
}

/// Signed longitude difference `to - from` in degrees, the shorter way round.
#[inline]
pub(crate) fn longitude_delta(from: f64, to: f64) -> f64 {
    let delta = to - from;
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}
