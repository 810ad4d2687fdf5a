//! WASM bindings for the geocoordinates crate.
//!
//! These bindings allow the crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments. Points cross the boundary as
//! separate `lng, lat` numbers and regions as JSON text: a GeoJSON polygon
//! or a quoted WKT string.

use crate::{parse_region, GeoError, GeoPoint, GeoVector};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

fn to_js(err: GeoError) -> JsValue {
    JsValue::from_str(&format!("[{}] {}", err.code() as u32, err))
}

fn point(lng: f64, lat: f64) -> Result<GeoPoint, JsValue> {
    GeoPoint::new(lng, lat).map_err(to_js)
}

fn region(region_json: &str) -> Result<crate::GeoRegion, JsValue> {
    let value: serde_json::Value = serde_json::from_str(region_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    parse_region(&value).map_err(to_js)
}

/// Great-circle distance in meters between two points.
#[wasm_bindgen]
pub fn distance(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> Result<f64, JsValue> {
    Ok(point(lng1, lat1)?.distance_to(&point(lng2, lat2)?))
}

/// Heading in degrees `[0, 360)` from the first point towards the second.
#[wasm_bindgen]
pub fn bearing(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> Result<f64, JsValue> {
    Ok(point(lng1, lat1)?.bearing_to(&point(lng2, lat2)?))
}

/// Projects a point by `distance` meters at `heading` degrees.
///
/// # Returns
/// `Float64Array` of `[lng, lat]`
#[wasm_bindgen]
pub fn destination(
    lng: f64,
    lat: f64,
    distance: f64,
    heading: f64,
) -> Result<Float64Array, JsValue> {
    let landed = point(lng, lat)? + GeoVector::new(distance, heading);
    Ok(Float64Array::from(&landed.to_array()[..]))
}

/// Formats a point as `lng,lat` with the given number of decimal digits.
#[wasm_bindgen]
pub fn format_point(lng: f64, lat: f64, decimal_digits: u32) -> Result<String, JsValue> {
    Ok(point(lng, lat)?.to_string_with(decimal_digits as usize))
}

/// Area in square meters of a JSON-encoded region.
#[wasm_bindgen]
pub fn region_area(region_json: &str) -> Result<f64, JsValue> {
    Ok(region(region_json)?.area())
}

/// Whether a JSON-encoded region contains the given point.
#[wasm_bindgen]
pub fn region_contains(region_json: &str, lng: f64, lat: f64) -> Result<bool, JsValue> {
    Ok(region(region_json)?.contains(&point(lng, lat)?))
}

/// Whether two JSON-encoded regions overlap.
#[wasm_bindgen]
pub fn regions_intersect(first_json: &str, second_json: &str) -> Result<bool, JsValue> {
    Ok(region(first_json)?.intersects(&region(second_json)?))
}
