//! GeoJSON and WKT interop.
//!
//! Supports parsing points and regions from:
//! - GeoJSON: `{"type": "Point", "coordinates": [lng, lat]}` and
//!   `{"type": "Polygon", "coordinates": [[[lng, lat], ...]]}`
//! - WKT: `POINT(lng lat)` and `POLYGON((lng lat, ...))`
//!
//! Only the outer ring of a polygon is read; holes are ignored.

use crate::{GeoError, GeoPoint, GeoRegion, Result};
use serde_json::{json, Value};

/// Parse a point from a JSON value holding GeoJSON or a WKT string.
///
/// # Errors
/// * [`GeoError::NullArgument`] for JSON `null`
/// * [`GeoError::InvalidArgument`] when the value has no usable coordinates
/// * [`GeoError::InvalidWkt`] for malformed WKT
///
/// # Example
/// ```
/// use geocoordinates::parse_point;
/// use serde_json::json;
///
/// // GeoJSON format
/// let geojson = json!({"type": "Point", "coordinates": [13.4050, 52.5200]});
/// let point = parse_point(&geojson).unwrap();
/// assert!((point.latitude() - 52.5200).abs() < 0.0001);
///
/// // WKT format
/// let wkt = json!("POINT(13.4050 52.5200)");
/// let point = parse_point(&wkt).unwrap();
/// assert!((point.longitude() - 13.4050).abs() < 0.0001);
/// ```
pub fn parse_point(value: &Value) -> Result<GeoPoint> {
    if value.is_null() {
        return Err(GeoError::NullArgument("location"));
    }

    if let Some(wkt) = value.as_str() {
        return parse_wkt_point(wkt);
    }

    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| GeoError::invalid("location", "missing `coordinates`"))?;
    position(coordinates)
}

/// Parse a region from a JSON value holding a GeoJSON polygon or a WKT string.
///
/// An empty coordinate list yields [`GeoRegion::empty`].
pub fn parse_region(value: &Value) -> Result<GeoRegion> {
    if value.is_null() {
        return Err(GeoError::NullArgument("region"));
    }

    if let Some(wkt) = value.as_str() {
        return parse_wkt_polygon(wkt);
    }

    let rings = value
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| GeoError::invalid("region", "missing `coordinates` array"))?;

    let Some(outer) = rings.first() else {
        return Ok(GeoRegion::empty());
    };

    let outer = outer
        .as_array()
        .ok_or_else(|| GeoError::invalid("region", "outer ring must be an array"))?;
    let points = outer.iter().map(position).collect::<Result<Vec<_>>>()?;

    GeoRegion::new(points)
}

/// Reads a GeoJSON position `[lng, lat, ...]`.
fn position(value: &Value) -> Result<GeoPoint> {
    let values = value
        .as_array()
        .ok_or_else(|| GeoError::invalid("coordinates", "position must be an array"))?
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| GeoError::invalid("coordinates", format!("not a number: {}", v)))
        })
        .collect::<Result<Vec<f64>>>()?;

    GeoPoint::try_from(values.as_slice())
}

/// Render a point as a GeoJSON geometry.
pub fn point_to_geojson(point: &GeoPoint) -> Value {
    json!({
        "type": "Point",
        "coordinates": point.to_array(),
    })
}

/// Render a region as a GeoJSON polygon with a single ring.
pub fn region_to_geojson(region: &GeoRegion) -> Value {
    let ring: Vec<[f64; 2]> = region.points().iter().map(GeoPoint::to_array).collect();
    let rings = if ring.is_empty() { vec![] } else { vec![ring] };

    json!({
        "type": "Polygon",
        "coordinates": rings,
    })
}

/// Parse a WKT POINT string.
///
/// Format: `POINT(longitude latitude)`
pub fn parse_wkt_point(wkt: &str) -> Result<GeoPoint> {
    let body = wkt_body(wkt, "POINT")?;
    wkt_position(body)
}

/// Parse a WKT POLYGON string, reading its outer ring.
///
/// Format: `POLYGON((lng lat, lng lat, ...))`; `POLYGON EMPTY` yields the
/// empty region.
pub fn parse_wkt_polygon(wkt: &str) -> Result<GeoRegion> {
    let trimmed = wkt.trim();
    if trimmed == "POLYGON EMPTY" {
        return Ok(GeoRegion::empty());
    }

    let body = wkt_body(trimmed, "POLYGON")?;
    let body = body.trim();

    let ring = body
        .strip_prefix('(')
        .and_then(|rest| rest.split(')').next())
        .ok_or_else(|| GeoError::InvalidWkt(format!("Expected a ring, got: {}", body)))?;

    let points = ring.split(',').map(wkt_position).collect::<Result<Vec<_>>>()?;
    GeoRegion::new(points)
}

/// Render a point as WKT with the given number of decimal digits.
pub fn point_to_wkt(point: &GeoPoint, decimal_digits: usize) -> String {
    format!("POINT({})", wkt_coordinates(point, decimal_digits))
}

/// Render a region as WKT with the given number of decimal digits.
pub fn region_to_wkt(region: &GeoRegion, decimal_digits: usize) -> String {
    if region.is_empty() {
        return "POLYGON EMPTY".to_string();
    }

    let ring: Vec<String> = region
        .points()
        .iter()
        .map(|p| wkt_coordinates(p, decimal_digits))
        .collect();
    format!("POLYGON(({}))", ring.join(", "))
}

fn wkt_coordinates(point: &GeoPoint, decimal_digits: usize) -> String {
    format!(
        "{:.*} {:.*}",
        decimal_digits,
        point.longitude(),
        decimal_digits,
        point.latitude()
    )
}

/// Returns the text between the outermost parentheses of a `TAG(...)` string.
fn wkt_body<'a>(wkt: &'a str, tag: &str) -> Result<&'a str> {
    let wkt = wkt.trim();

    let rest = wkt
        .strip_prefix(tag)
        .map(str::trim_start)
        .filter(|rest| rest.starts_with('('))
        .ok_or_else(|| GeoError::InvalidWkt(format!("Expected {}, got: {}", tag, wkt)))?;

    let end = rest
        .rfind(')')
        .ok_or_else(|| GeoError::InvalidWkt("Missing ')'".into()))?;

    Ok(&rest[1..end])
}

fn wkt_position(text: &str) -> Result<GeoPoint> {
    let parts: Vec<&str> = text.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(GeoError::InvalidWkt(format!(
            "Expected 2 coordinates, got {}",
            parts.len()
        )));
    }

    let lng: f64 = parts[0]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid longitude: {}", parts[0])))?;
    let lat: f64 = parts[1]
        .parse()
        .map_err(|_| GeoError::InvalidWkt(format!("Invalid latitude: {}", parts[1])))?;

    GeoPoint::new(lng, lat)
}
