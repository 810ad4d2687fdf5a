//! Validated points on the Earth's surface.

use crate::angle::{normalize_heading, to_degrees, to_radians};
use crate::haversine::{bearing, destination, distance, initial_bearing};
use crate::{
    GeoError, GeoVector, Result, COORDINATE_EPSILON, DEFAULT_DECIMAL_DIGITS, EARTH_RADIUS_M,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A point on the Earth's surface.
///
/// Coordinates are validated once at construction and never change
/// afterwards. Two points compare equal when both coordinates differ by less
/// than [`COORDINATE_EPSILON`].
///
/// Serializes as the GeoJSON position `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// The `0,0` coordinate.
    pub const ZERO: GeoPoint = GeoPoint::new_unchecked(0.0, 0.0);

    /// Creates a new point.
    ///
    /// # Arguments
    /// * `longitude` - Longitude in degrees (-180 to 180)
    /// * `latitude` - Latitude in degrees (-90 to 90)
    ///
    /// # Errors
    /// [`GeoError::OutOfRange`] when either coordinate is outside its range
    /// or is NaN.
    ///
    /// # Example
    /// ```
    /// use geocoordinates::GeoPoint;
    ///
    /// let rio = GeoPoint::new(-43.2126812, -22.951911).unwrap();
    /// assert_eq!(rio.to_string(), "-43.2126812,-22.9519110");
    ///
    /// assert!(GeoPoint::new(0.0, 91.0).is_err());
    /// ```
    pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            tracing::debug!(latitude, longitude, "rejected point: latitude out of range");
            return Err(GeoError::OutOfRange {
                name: "latitude",
                value: latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            tracing::debug!(latitude, longitude, "rejected point: longitude out of range");
            return Err(GeoError::OutOfRange {
                name: "longitude",
                value: longitude,
                min: -180.0,
                max: 180.0,
            });
        }

        Ok(Self::new_unchecked(longitude, latitude))
    }

    /// Builds a point from coordinates already known to be in range.
    #[inline]
    pub(crate) const fn new_unchecked(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Creates a point from an optional `[longitude, latitude]` sequence.
    ///
    /// Elements past the second are ignored.
    ///
    /// # Errors
    /// * [`GeoError::NullArgument`] when `coordinates` is `None`
    /// * [`GeoError::InvalidArgument`] when fewer than two values are given
    /// * [`GeoError::OutOfRange`] when the values are not valid coordinates
    pub fn from_coordinates(coordinates: Option<&[f64]>) -> Result<Self> {
        let coordinates = coordinates.ok_or(GeoError::NullArgument("coordinates"))?;
        match *coordinates {
            [longitude, latitude, ..] => Self::new(longitude, latitude),
            _ => Err(GeoError::invalid(
                "coordinates",
                format!("must contain two elements, got {}", coordinates.len()),
            )),
        }
    }

    /// Latitude in degrees (-90 to 90).
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees (-180 to 180).
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `[longitude, latitude]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }

    /// Heading from this point towards `other`, in degrees `[0, 360)`.
    #[inline]
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        bearing(self, other)
    }

    /// Moves this point along `vector` on the default Earth sphere.
    ///
    /// Same as `self + vector`.
    #[inline]
    pub fn project(&self, vector: GeoVector) -> GeoPoint {
        self.project_with_radius(vector, EARTH_RADIUS_M)
    }

    /// Moves this point along `vector` on a sphere of `radius` meters.
    #[inline]
    pub fn project_with_radius(&self, vector: GeoVector, radius: f64) -> GeoPoint {
        destination(self, vector.distance, vector.heading, radius)
    }

    /// Renders `longitude,latitude` with a fixed number of decimal digits.
    ///
    /// Always uses `.` as the decimal separator.
    ///
    /// ```
    /// use geocoordinates::GeoPoint;
    ///
    /// let p = GeoPoint::new(-43.212681212, -22.951911).unwrap();
    /// assert_eq!(p.to_string_with(3), "-43.213,-22.952");
    /// ```
    pub fn to_string_with(&self, decimal_digits: usize) -> String {
        format!("{:.*}", decimal_digits, self)
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        (self.latitude - other.latitude).abs() < COORDINATE_EPSILON
            && (self.longitude - other.longitude).abs() < COORDINATE_EPSILON
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.latitude, state);
        hash_coordinate(self.longitude, state);
    }
}

/// Hashes a coordinate consistently with the epsilon-tolerant equality.
///
/// Distinct floats of magnitude 2 or more are at least one epsilon apart, so
/// equal values there are bit-identical. Smaller magnitudes share a bucket.
fn hash_coordinate<H: Hasher>(value: f64, state: &mut H) {
    if value.abs() < 2.0 {
        0u64.hash(state);
    } else {
        value.to_bits().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    /// Formats as `longitude,latitude`; the precision flag picks the number
    /// of decimal digits (7 by default).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(DEFAULT_DECIMAL_DIGITS);
        write!(f, "{:.*},{:.*}", digits, self.longitude, digits, self.latitude)
    }
}

impl FromStr for GeoPoint {
    type Err = GeoError;

    /// Parses the `longitude,latitude` text produced by `Display`.
    fn from_str(s: &str) -> Result<Self> {
        let (lng, lat) = s
            .split_once(',')
            .ok_or_else(|| {
                GeoError::invalid("text", format!("expected `longitude,latitude`, got: {}", s))
            })?;

        let longitude: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeoError::invalid("text", format!("invalid longitude: {}", lng)))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeoError::invalid("text", format!("invalid latitude: {}", lat)))?;

        Self::new(longitude, latitude)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        point.to_array()
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = GeoError;

    fn try_from([longitude, latitude]: [f64; 2]) -> Result<Self> {
        Self::new(longitude, latitude)
    }
}

impl TryFrom<&[f64]> for GeoPoint {
    type Error = GeoError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::from_coordinates(Some(coordinates))
    }
}

impl Sub for GeoPoint {
    type Output = GeoVector;

    /// The vector leading from `rhs` to `self`, so `a + (b - a) == b`.
    ///
    /// The heading is the great-circle course that projection follows, not
    /// the loxodrome [`GeoPoint::bearing_to`].
    fn sub(self, rhs: GeoPoint) -> GeoVector {
        GeoVector::new(distance(&rhs, &self), initial_bearing(&rhs, &self))
    }
}

impl Add<GeoVector> for GeoPoint {
    type Output = GeoPoint;

    fn add(self, rhs: GeoVector) -> GeoPoint {
        self.project(rhs)
    }
}

impl Add<GeoPoint> for GeoVector {
    type Output = GeoPoint;

    fn add(self, rhs: GeoPoint) -> GeoPoint {
        rhs.project(self)
    }
}

/// Average heading of an object moving along `path`, in degrees `[0, 360)`.
///
/// Takes the circular mean of the bearings of each leg, skipping legs whose
/// endpoints are equal. Paths with fewer than two distinct points, or whose
/// legs cancel out, yield `0`.
///
/// ```
/// use geocoordinates::{average_heading, GeoPoint};
///
/// let path = [
///     GeoPoint::new(0.0, 0.0).unwrap(),
///     GeoPoint::new(0.0, 1.0).unwrap(),
///     GeoPoint::new(1.0, 1.0).unwrap(),
/// ];
/// assert!((average_heading(&path) - 45.0).abs() < 0.1);
/// ```
pub fn average_heading(path: &[GeoPoint]) -> f64 {
    let (sin_sum, cos_sum) = path
        .windows(2)
        .filter(|leg| leg[0] != leg[1])
        .map(|leg| to_radians(bearing(&leg[0], &leg[1])))
        .fold((0.0, 0.0), |(s, c), theta| (s + theta.sin(), c + theta.cos()));

    if sin_sum.hypot(cos_sum) < 1e-9 {
        return 0.0;
    }

    normalize_heading(to_degrees(sin_sum.atan2(cos_sum)))
}
