//! Geodetic primitives on a spherical Earth.
//!
//! This crate provides:
//! - [`GeoPoint`]: a validated longitude/latitude pair
//! - [`GeoVector`]: a displacement given as distance and heading
//! - [`GeoRegion`]: a closed polygon with area, centroid, containment and
//!   intersection queries
//! - Haversine distance, bearing and destination formulas
//! - GeoJSON and WKT interop
//! - WASM bindings for browser usage
//!
//! All computations use a sphere of radius [`EARTH_RADIUS_M`].
//!
//! # Example
//!
//! ```
//! use geocoordinates::{GeoPoint, GeoVector};
//!
//! let a = GeoPoint::new(-43.2126812, -22.951911).unwrap();
//! let b = GeoPoint::new(-43.1589638, -22.9492483).unwrap();
//!
//! let leg = b - a; // from a to b
//! assert!((leg.distance - 5508.24).abs() < 0.01);
//!
//! let moved = a + GeoVector::new(1_000.0, 90.0);
//! assert!((a.distance_to(&moved) - 1_000.0).abs() < 1e-6);
//! ```

mod angle;
mod error;
mod geojson;
mod haversine;
mod point;
mod region;
mod vector;

#[cfg(feature = "wasm")]
mod wasm;

pub use angle::{
    normalize_heading, to_degrees, to_radians, wrap_longitude, EARTH_RADIUS_KM, EARTH_RADIUS_M,
};
pub use error::{GeoError, GeoErrorCode, Result};
pub use geojson::{
    parse_point, parse_region, parse_wkt_point, parse_wkt_polygon, point_to_geojson, point_to_wkt,
    region_to_geojson, region_to_wkt,
};
pub use haversine::{bearing, destination, distance, distance_with_radius, initial_bearing};
pub use point::{average_heading, GeoPoint};
pub use region::GeoRegion;
pub use vector::GeoVector;

/// Decimal digits used when a point is formatted without an explicit precision.
pub const DEFAULT_DECIMAL_DIGITS: usize = 7;

/// Largest coordinate difference, in degrees, at which two points still
/// compare equal.
pub const COORDINATE_EPSILON: f64 = f64::EPSILON;
