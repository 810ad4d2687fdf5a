//! Great-circle formulas on the spherical Earth model.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes. Bearings and destination
//! points use the matching spherical formulas.

use crate::angle::{shortest_delta, to_degrees, to_radians, wrap_longitude, EARTH_RADIUS_M};
use crate::GeoPoint;
use std::f64::consts::FRAC_PI_4;

/// Calculates the great-circle distance between two points in meters.
///
/// Uses the Haversine formula on a sphere of radius [`EARTH_RADIUS_M`].
/// The result is symmetric and exactly zero for identical points.
///
/// # Example
/// ```
/// use geocoordinates::{distance, GeoPoint};
///
/// let a = GeoPoint::new(-43.2126812, -22.951911).unwrap();
/// let b = GeoPoint::new(-43.1589638, -22.9492483).unwrap();
///
/// assert!((distance(&a, &b) - 5508.24).abs() < 0.01);
/// ```
#[inline]
pub fn distance(from: &GeoPoint, to: &GeoPoint) -> f64 {
    distance_with_radius(from, to, EARTH_RADIUS_M)
}

/// Calculates the great-circle distance on a sphere of the given radius.
///
/// The result is expressed in the unit of `radius`.
#[inline]
pub fn distance_with_radius(from: &GeoPoint, to: &GeoPoint, radius: f64) -> f64 {
    radius * central_angle(from, to)
}

/// Angle subtended at the sphere's center by two points, in radians.
#[inline]
pub(crate) fn central_angle(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = to_radians(from.latitude());
    let lat2 = to_radians(to.latitude());
    let d_lat = to_radians(to.latitude() - from.latitude());
    let d_lon = to_radians(to.longitude() - from.longitude());

    let a = (d_lat / 2.0).sin().powi(2)
        + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let a = a.clamp(0.0, 1.0);

    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Calculates the heading from `from` towards `to` in degrees, `[0, 360)`.
///
/// The longitude difference is wrapped onto the shorter way round, so a
/// path across the antimeridian heads across it instead of circling the
/// globe. Not symmetric: `bearing(a, b)` and `bearing(b, a)` generally
/// differ by 180 degrees.
///
/// # Example
/// ```
/// use geocoordinates::{bearing, GeoPoint};
///
/// let west = GeoPoint::new(179.0, 0.0).unwrap();
/// let east = GeoPoint::new(-179.0, 0.0).unwrap();
///
/// assert!((bearing(&west, &east) - 90.0).abs() < 1e-9);
/// ```
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lon = shortest_delta(to_radians(to.longitude() - from.longitude()));
    let d_phi = stretched_latitude(to.latitude()) - stretched_latitude(from.latitude());
    // Both points on the same pole leave the latitude term undefined.
    let d_phi = if d_phi.is_nan() { 0.0 } else { d_phi };

    (to_degrees(d_lon.atan2(d_phi)) + 360.0) % 360.0
}

/// Initial heading of the great circle from `from` to `to`, in degrees `[0, 360)`.
///
/// This is the course [`destination`] follows, so projecting `from` by
/// `distance(from, to)` at this heading lands on `to`.
///
/// # Example
/// ```
/// use geocoordinates::{initial_bearing, GeoPoint};
///
/// let berlin = GeoPoint::new(13.405, 52.52).unwrap();
/// let tokyo = GeoPoint::new(139.65, 35.68).unwrap();
///
/// // the great circle leaves Berlin heading north-east, over Siberia
/// assert!(initial_bearing(&berlin, &tokyo) < 45.0);
/// ```
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = to_radians(from.latitude());
    let lat2 = to_radians(to.latitude());
    let d_lon = to_radians(to.longitude() - from.longitude());

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (to_degrees(y.atan2(x)) + 360.0) % 360.0
}

/// Isometric latitude, `ln(tan(pi/4 + phi/2))`.
#[inline]
fn stretched_latitude(latitude: f64) -> f64 {
    (to_radians(latitude) / 2.0 + FRAC_PI_4).tan().ln()
}

/// Projects `from` along a great circle by `distance` at initial `heading`.
///
/// `distance` and `radius` share a unit. The resulting longitude is wrapped
/// back into `[-180, 180]` when the path crosses the antimeridian.
pub fn destination(from: &GeoPoint, distance: f64, heading: f64, radius: f64) -> GeoPoint {
    let lat1 = to_radians(from.latitude());
    let lon1 = to_radians(from.longitude());
    let delta = distance / radius;
    let theta = to_radians(heading);

    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new_unchecked(
        wrap_longitude(to_degrees(lon2)),
        to_degrees(lat2).clamp(-90.0, 90.0),
    )
}
