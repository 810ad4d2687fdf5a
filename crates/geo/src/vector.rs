//! Directed displacements over the Earth's surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A displacement of `distance` meters at an initial `heading`.
///
/// Obtained by subtracting two points (`b - a` leads from `a` to `b`) and
/// applied by adding it to a point.
///
/// Scaling changes the distance only. Adding or subtracting two vectors
/// does not compose them: both return the left operand unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoVector {
    /// Distance in meters
    pub distance: f64,
    /// Heading in degrees clockwise from north, conventionally `[0, 360)`
    pub heading: f64,
}

impl GeoVector {
    /// The null displacement.
    pub const ZERO: GeoVector = GeoVector::new(0.0, 0.0);

    /// Creates a new vector. Neither value is validated.
    #[inline]
    pub const fn new(distance: f64, heading: f64) -> Self {
        Self { distance, heading }
    }
}

impl Mul<f64> for GeoVector {
    type Output = GeoVector;

    fn mul(self, rhs: f64) -> GeoVector {
        GeoVector::new(self.distance * rhs, self.heading)
    }
}

impl Mul<GeoVector> for f64 {
    type Output = GeoVector;

    fn mul(self, rhs: GeoVector) -> GeoVector {
        rhs * self
    }
}

impl Div<f64> for GeoVector {
    type Output = GeoVector;

    fn div(self, rhs: f64) -> GeoVector {
        GeoVector::new(self.distance / rhs, self.heading)
    }
}

impl Add for GeoVector {
    type Output = GeoVector;

    /// Returns `self` unchanged; headings are not composed.
    fn add(self, _rhs: GeoVector) -> GeoVector {
        self
    }
}

impl Sub for GeoVector {
    type Output = GeoVector;

    /// Defined as `self + rhs * -1`, which returns `self` unchanged.
    fn sub(self, rhs: GeoVector) -> GeoVector {
        self + rhs * -1.0
    }
}

impl fmt::Display for GeoVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} meters on {}° N", self.distance, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaling_keeps_heading() {
        let v = GeoVector::new(100.0, 45.0);
        assert_eq!(v * 2.5, GeoVector::new(250.0, 45.0));
        assert_eq!(2.5 * v, GeoVector::new(250.0, 45.0));
        assert_eq!(v / 4.0, GeoVector::new(25.0, 45.0));
        assert_eq!(v * -1.0, GeoVector::new(-100.0, 45.0));
    }

    #[test]
    fn test_addition_returns_left_operand() {
        let left = GeoVector::new(100.0, 45.0);
        let right = GeoVector::new(30.0, 270.0);
        assert_eq!(left + right, left);
        assert_eq!(right + left, right);
    }

    #[test]
    fn test_subtraction_returns_left_operand() {
        let left = GeoVector::new(100.0, 45.0);
        let right = GeoVector::new(30.0, 270.0);
        assert_eq!(left - right, left);
        assert_eq!(left - left, left);
    }

    #[test]
    fn test_zero_and_default() {
        assert_eq!(GeoVector::ZERO, GeoVector::default());
        assert_eq!(GeoVector::ZERO.distance, 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(GeoVector::new(1500.0, 90.5).to_string(), "1500 meters on 90.5° N");
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let v = GeoVector::new(12.5, 180.0);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json, serde_json::json!({"distance": 12.5, "heading": 180.0}));
    }
}
