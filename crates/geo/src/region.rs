//! Closed polygonal regions on the Earth's surface.
//!
//! A region is a ring of points whose first and last vertices are equal.
//! Area and centroid are computed on the sphere. Containment and
//! intersection work on longitude/latitude coordinates unwrapped around a
//! reference meridian, so rings crossing the antimeridian or spanning more
//! than half the globe are handled; rings enclosing a pole are not.

use crate::angle::{longitude_delta, shortest_delta, to_degrees, to_radians, wrap_longitude};
use crate::haversine::distance;
use crate::{GeoError, GeoPoint, Result, EARTH_RADIUS_M};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Points closer than this to an edge, in degrees, lie on the boundary.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// A closed polygon of [`GeoPoint`]s.
///
/// The region owns its vertices and never changes after construction.
/// Cloning is cheap. [`GeoRegion::empty`] is a vertex-less sentinel meaning
/// "no shape": it has no area, contains nothing and intersects nothing.
///
/// Equality compares vertex sequences in order; a cyclically shifted ring
/// is a different region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<GeoPoint>", into = "Vec<GeoPoint>")]
pub struct GeoRegion {
    shape: Arc<[GeoPoint]>,
}

impl GeoRegion {
    /// Creates a region from a closed ring of points.
    ///
    /// # Errors
    /// [`GeoError::InvalidArgument`] when fewer than 3 points are given or
    /// the first point differs from the last.
    ///
    /// # Example
    /// ```
    /// use geocoordinates::{GeoPoint, GeoRegion};
    ///
    /// let p = |lng, lat| GeoPoint::new(lng, lat).unwrap();
    /// let square = GeoRegion::new([
    ///     p(0.0, 0.0),
    ///     p(1.0, 0.0),
    ///     p(1.0, 1.0),
    ///     p(0.0, 1.0),
    ///     p(0.0, 0.0),
    /// ])
    /// .unwrap();
    ///
    /// assert!(square.contains(&p(0.5, 0.5)));
    /// assert!(!square.contains(&p(2.0, 0.5)));
    /// ```
    pub fn new<I>(shape: I) -> Result<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let points: Vec<GeoPoint> = shape.into_iter().collect();

        if points.len() < 3 {
            tracing::debug!(vertices = points.len(), "rejected region: too few points");
            return Err(GeoError::invalid(
                "shape",
                format!("must contain at least 3 points, got {}", points.len()),
            ));
        }

        if points.first() != points.last() {
            tracing::debug!(vertices = points.len(), "rejected region: ring is not closed");
            return Err(GeoError::invalid(
                "shape",
                "must start and finish on the same point",
            ));
        }

        Ok(Self { shape: points.into() })
    }

    /// Creates a region from an optional ring of points.
    ///
    /// # Errors
    /// [`GeoError::NullArgument`] when `shape` is `None`, otherwise as
    /// [`GeoRegion::new`].
    pub fn from_points<I>(shape: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        Self::new(shape.ok_or(GeoError::NullArgument("shape"))?)
    }

    /// The empty region.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true for the empty region.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// The ring, including the closing point.
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.shape
    }

    /// Number of distinct vertices (the closing point is not counted).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.shape.len().saturating_sub(1)
    }

    fn edges(&self) -> impl Iterator<Item = (&GeoPoint, &GeoPoint)> {
        self.shape.windows(2).map(|edge| (&edge[0], &edge[1]))
    }

    /// Area in square meters, independent of winding direction.
    ///
    /// Sums `Δλ · (2 + sin φ1 + sin φ2)` over the edges and scales by `R²/2`.
    pub fn area(&self) -> f64 {
        let sum: f64 = self
            .edges()
            .map(|(p1, p2)| {
                let d_lon = shortest_delta(to_radians(p2.longitude() - p1.longitude()));
                d_lon * (2.0 + to_radians(p1.latitude()).sin() + to_radians(p2.latitude()).sin())
            })
            .sum();

        (sum * EARTH_RADIUS_M.powi(2) / 2.0).abs()
    }

    /// Length of the boundary in meters.
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(p1, p2)| distance(p1, p2)).sum()
    }

    /// South-west and north-east corners of the vertices' bounding box, or
    /// `None` for the empty region.
    pub fn bounding_box(&self) -> Option<(GeoPoint, GeoPoint)> {
        let first = self.shape.first()?;
        let init = (first.longitude(), first.latitude(), first.longitude(), first.latitude());

        let (min_lon, min_lat, max_lon, max_lat) =
            self.shape.iter().fold(init, |(w, s, e, n), p| {
                (
                    w.min(p.longitude()),
                    s.min(p.latitude()),
                    e.max(p.longitude()),
                    n.max(p.latitude()),
                )
            });

        Some((
            GeoPoint::new_unchecked(min_lon, min_lat),
            GeoPoint::new_unchecked(max_lon, max_lat),
        ))
    }

    /// Middle of the bounding box; the origin for the empty region.
    ///
    /// This is not the centroid, see [`GeoRegion::centroid`].
    pub fn center(&self) -> GeoPoint {
        match self.bounding_box() {
            Some((sw, ne)) => GeoPoint::new_unchecked(
                (ne.longitude() - sw.longitude()) / 2.0 + sw.longitude(),
                (ne.latitude() - sw.latitude()) / 2.0 + sw.latitude(),
            ),
            None => GeoPoint::ZERO,
        }
    }

    /// Area-weighted centroid on the sphere; the origin for the empty region.
    ///
    /// Each edge contributes its unit normal weighted by its arc length.
    /// Degenerate rings with no area fall back to [`GeoRegion::center`].
    pub fn centroid(&self) -> GeoPoint {
        if self.is_empty() {
            return GeoPoint::ZERO;
        }

        let mut moment = [0.0; 3];
        for (p1, p2) in self.edges() {
            let a = unit_vector(p1);
            let b = unit_vector(p2);
            let normal = cross(a, b);
            let sin_arc = norm(normal);
            if sin_arc < 1e-15 {
                continue;
            }
            let arc = sin_arc.atan2(dot(a, b));
            for (m, n) in moment.iter_mut().zip(normal) {
                *m += n / sin_arc * arc;
            }
        }

        if norm(moment) < 1e-15 {
            return self.center();
        }

        // The moment points into the region for counter-clockwise rings and
        // away from it otherwise; orient it towards the vertices.
        let mean = self.shape[..self.shape.len() - 1]
            .iter()
            .map(unit_vector)
            .fold([0.0; 3], |acc, v| [acc[0] + v[0], acc[1] + v[1], acc[2] + v[2]]);
        if dot(moment, mean) < 0.0 {
            moment = moment.map(|m| -m);
        }

        let [x, y, z] = moment;
        GeoPoint::new_unchecked(
            wrap_longitude(to_degrees(y.atan2(x))),
            to_degrees(z.atan2(x.hypot(y))).clamp(-90.0, 90.0),
        )
    }

    /// Returns true if `point` lies inside the region or on its boundary.
    ///
    /// Casts a ray east from the point and counts edge crossings, with
    /// longitudes taken relative to the point's meridian. The query meridian
    /// is moved by whole turns into the unwrapped ring's span, so rings wider
    /// than half the globe are handled.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        if self.is_empty() {
            return false;
        }

        let y = point.latitude();
        let ring = unwrap_ring(&self.shape, point.longitude());
        let (min_x, max_x) = span(&ring);
        let qx = turns_above(0.0, min_x - BOUNDARY_TOLERANCE);
        if qx > max_x + BOUNDARY_TOLERANCE {
            return false;
        }
        let target = (qx, y);

        let mut inside = false;
        for edge in ring.windows(2) {
            let (a, b) = (edge[0], edge[1]);
            if on_segment(a, b, target) {
                return true;
            }
            if (a.1 > y) != (b.1 > y) {
                let x = a.0 + (y - a.1) * (b.0 - a.0) / (b.1 - a.1);
                if x > qx {
                    inside = !inside;
                }
            }
        }

        inside
    }

    /// Returns true if every vertex of `region` is inside this region.
    ///
    /// Edges of `region` that leave and re-enter this region between two
    /// contained vertices are not detected. The empty region is neither
    /// contained nor containing.
    pub fn contains_region(&self, region: &GeoRegion) -> bool {
        !self.is_empty()
            && !region.is_empty()
            && region.shape.iter().all(|p| self.contains(p))
    }

    /// Returns true if the two regions share any boundary or interior point.
    pub fn intersects(&self, region: &GeoRegion) -> bool {
        if self.is_empty() || region.is_empty() {
            return false;
        }

        if region.shape.iter().any(|p| self.contains(p))
            || self.shape.iter().any(|p| region.contains(p))
        {
            return true;
        }

        let origin = self.shape[0].longitude();
        let ours = unwrap_ring(&self.shape, origin);
        let theirs = unwrap_ring(&region.shape, origin);

        // Either ring may sit a whole turn away from the other once unwrapped.
        [-360.0, 0.0, 360.0].into_iter().any(|shift| {
            ours.windows(2).any(|a| {
                theirs.windows(2).any(|b| {
                    let (c, d) = ((b[0].0 + shift, b[0].1), (b[1].0 + shift, b[1].1));
                    segments_intersect(a[0], a[1], c, d)
                })
            })
        })
    }
}

impl Default for GeoRegion {
    fn default() -> Self {
        Self { shape: Arc::new([]) }
    }
}

impl PartialEq for GeoRegion {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl Eq for GeoRegion {}

impl Hash for GeoRegion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
    }
}

impl fmt::Display for GeoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices = {}, Area = {} m²", self.vertex_count(), self.area())
    }
}

impl TryFrom<Vec<GeoPoint>> for GeoRegion {
    type Error = GeoError;

    /// Validates as [`GeoRegion::new`]; an empty vector yields the empty region.
    fn try_from(points: Vec<GeoPoint>) -> Result<Self> {
        if points.is_empty() {
            Ok(Self::empty())
        } else {
            Self::new(points)
        }
    }
}

impl From<GeoRegion> for Vec<GeoPoint> {
    fn from(region: GeoRegion) -> Self {
        region.shape.to_vec()
    }
}

/// Longitude offset from a reference meridian and latitude, in degrees.
type Planar = (f64, f64);

/// Lays the ring out edge by edge so every edge takes the short way round,
/// starting from the copy of the first vertex nearest to `origin`.
fn unwrap_ring(points: &[GeoPoint], origin: f64) -> Vec<Planar> {
    let mut previous = origin;
    let mut x = 0.0;
    points
        .iter()
        .map(|p| {
            x += longitude_delta(previous, p.longitude());
            previous = p.longitude();
            (x, p.latitude())
        })
        .collect()
}

/// Smallest and largest unwrapped longitude of a ring.
fn span(ring: &[Planar]) -> (f64, f64) {
    ring.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)))
}

/// `x` moved by the fewest whole turns that bring it to `floor` or above.
fn turns_above(x: f64, floor: f64) -> f64 {
    x + ((floor - x) / 360.0).ceil() * 360.0
}

fn orientation(a: Planar, b: Planar, c: Planar) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn within_box(a: Planar, b: Planar, p: Planar) -> bool {
    p.0 >= a.0.min(b.0) - BOUNDARY_TOLERANCE
        && p.0 <= a.0.max(b.0) + BOUNDARY_TOLERANCE
        && p.1 >= a.1.min(b.1) - BOUNDARY_TOLERANCE
        && p.1 <= a.1.max(b.1) + BOUNDARY_TOLERANCE
}

fn on_segment(a: Planar, b: Planar, p: Planar) -> bool {
    let length = (b.0 - a.0).hypot(b.1 - a.1);
    if length < BOUNDARY_TOLERANCE {
        return (p.0 - a.0).hypot(p.1 - a.1) <= BOUNDARY_TOLERANCE;
    }
    (orientation(a, b, p) / length).abs() <= BOUNDARY_TOLERANCE && within_box(a, b, p)
}

fn segments_intersect(p1: Planar, p2: Planar, q1: Planar, q2: Planar) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    on_segment(q1, q2, p1)
        || on_segment(q1, q2, p2)
        || on_segment(p1, p2, q1)
        || on_segment(p1, p2, q2)
}

fn unit_vector(point: &GeoPoint) -> [f64; 3] {
    let lat = to_radians(point.latitude());
    let lon = to_radians(point.longitude());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(lng: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lng, lat).unwrap()
    }

    fn square(west: f64, south: f64, size: f64) -> GeoRegion {
        GeoRegion::new([
            p(west, south),
            p(west + size, south),
            p(west + size, south + size),
            p(west, south + size),
            p(west, south),
        ])
        .unwrap()
    }

    fn reversed(region: &GeoRegion) -> GeoRegion {
        GeoRegion::new(region.points().iter().rev().copied()).unwrap()
    }

    #[test]
    fn test_construction_validation() {
        let open = GeoRegion::new([p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
        assert!(matches!(open, Err(GeoError::InvalidArgument { .. })));

        let short = GeoRegion::new([p(0.0, 0.0), p(0.0, 0.0)]);
        assert!(matches!(short, Err(GeoError::InvalidArgument { .. })));

        let absent = GeoRegion::from_points(None::<Vec<GeoPoint>>);
        assert!(matches!(absent, Err(GeoError::NullArgument("shape"))));

        let closed = GeoRegion::from_points(Some(vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]));
        assert!(closed.is_ok());
    }

    #[test]
    fn test_region_owns_its_points() {
        let mut source = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let region = GeoRegion::new(source.clone()).unwrap();
        source[1] = p(5.0, 5.0);
        assert_eq!(region.points()[1], p(1.0, 0.0));
        assert_eq!(region.vertex_count(), 3);
    }

    #[test]
    fn test_empty_region() {
        let empty = GeoRegion::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.vertex_count(), 0);
        assert_eq!(empty.area(), 0.0);
        assert_eq!(empty.perimeter(), 0.0);
        assert_eq!(empty.center(), GeoPoint::ZERO);
        assert_eq!(empty.centroid(), GeoPoint::ZERO);
        assert!(empty.bounding_box().is_none());
        assert!(!empty.contains(&GeoPoint::ZERO));
        assert!(!empty.intersects(&square(0.0, 0.0, 1.0)));
        assert!(!square(0.0, 0.0, 1.0).contains_region(&empty));
        assert_eq!(empty, GeoRegion::default());
        assert_ne!(empty, square(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_area_of_one_degree_square() {
        let area = square(0.0, 0.0, 1.0).area();
        // about 1.236e10 m² on the 6371 km sphere
        assert!((area - 1.2364e10).abs() < 0.002e10, "area {}", area);
    }

    #[test]
    fn test_area_ignores_winding() {
        let ccw = square(-43.3, -23.0, 0.2);
        let cw = reversed(&ccw);
        assert!(ccw.area() > 0.0);
        assert!((ccw.area() - cw.area()).abs() < 1e-3);
    }

    #[test]
    fn test_area_across_antimeridian() {
        let wrapped = GeoRegion::new([
            p(179.5, 10.0),
            p(-179.5, 10.0),
            p(-179.5, 11.0),
            p(179.5, 11.0),
            p(179.5, 10.0),
        ])
        .unwrap();
        let reference = square(10.0, 10.0, 1.0);
        assert!((wrapped.area() - reference.area()).abs() < 1.0);
    }

    #[test]
    fn test_perimeter() {
        let one_degree = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;
        let perimeter = square(0.0, 0.0, 1.0).perimeter();
        assert!(perimeter < 4.0 * one_degree);
        assert!(perimeter > 3.99 * one_degree);
    }

    #[test]
    fn test_center_is_bounding_box_middle() {
        let triangle =
            GeoRegion::new([p(0.0, 0.0), p(4.0, 0.0), p(0.0, 2.0), p(0.0, 0.0)]).unwrap();
        assert_eq!(triangle.center(), p(2.0, 1.0));
        assert_eq!(triangle.bounding_box(), Some((p(0.0, 0.0), p(4.0, 2.0))));
    }

    #[test]
    fn test_centroid_of_symmetric_square() {
        let region = square(9.0, -1.0, 2.0);
        let centroid = region.centroid();
        assert!((centroid.longitude() - 10.0).abs() < 1e-9, "{}", centroid);
        assert!(centroid.latitude().abs() < 1e-9, "{}", centroid);
    }

    #[test]
    fn test_centroid_ignores_winding() {
        let region = square(20.0, 40.0, 2.0);
        let a = region.centroid();
        let b = reversed(&region).centroid();
        assert!(a.distance_to(&b) < 1e-6);
        assert!(region.contains(&a));
    }

    #[test]
    fn test_centroid_differs_from_center() {
        let triangle =
            GeoRegion::new([p(0.0, 0.0), p(3.0, 0.0), p(0.0, 3.0), p(0.0, 0.0)]).unwrap();
        let centroid = triangle.centroid();
        // planar centroid of this triangle is (1, 1); the box center is (1.5, 1.5)
        assert!((centroid.longitude() - 1.0).abs() < 0.01, "{}", centroid);
        assert!((centroid.latitude() - 1.0).abs() < 0.01, "{}", centroid);
    }

    #[test]
    fn test_contains_inside_and_outside() {
        let region = square(-43.3, -23.0, 0.2);
        assert!(region.contains(&p(-43.2, -22.9)));
        assert!(!region.contains(&p(-43.5, -22.9)));
        assert!(!region.contains(&p(-43.2, -22.7)));
        assert!(!region.contains(&p(140.0, 35.0)));
    }

    #[test]
    fn test_contains_boundary() {
        let region = square(0.0, 0.0, 1.0);
        assert!(region.contains(&p(0.0, 0.0)));
        assert!(region.contains(&p(1.0, 1.0)));
        assert!(region.contains(&p(0.5, 0.0)));
        assert!(region.contains(&p(1.0, 0.5)));
        assert!(!region.contains(&p(1.0 + 1e-6, 0.5)));
    }

    #[test]
    fn test_contains_concave() {
        // a "U" open to the north
        let u = GeoRegion::new([
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 3.0),
            p(2.0, 3.0),
            p(2.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 3.0),
            p(0.0, 3.0),
            p(0.0, 0.0),
        ])
        .unwrap();
        assert!(u.contains(&p(0.5, 2.0)));
        assert!(u.contains(&p(2.5, 2.0)));
        assert!(!u.contains(&p(1.5, 2.0)));
        assert!(u.contains(&p(1.5, 0.5)));
    }

    #[test]
    fn test_contains_across_antimeridian() {
        let region = GeoRegion::new([
            p(179.0, -1.0),
            p(-179.0, -1.0),
            p(-179.0, 1.0),
            p(179.0, 1.0),
            p(179.0, -1.0),
        ])
        .unwrap();
        assert!(region.contains(&p(180.0, 0.0)));
        assert!(region.contains(&p(-179.5, 0.5)));
        assert!(region.contains(&p(179.5, -0.5)));
        assert!(!region.contains(&p(0.0, 0.0)));
        assert!(!region.contains(&p(178.0, 0.0)));
    }

    fn band(west: f64, east: f64) -> GeoRegion {
        let middle = wrap_longitude(west + longitude_delta(west, east).rem_euclid(360.0) / 2.0);
        GeoRegion::new([
            p(west, -10.0),
            p(middle, -10.0),
            p(east, -10.0),
            p(east, 10.0),
            p(middle, 10.0),
            p(west, 10.0),
            p(west, -10.0),
        ])
        .unwrap()
    }

    fn strip(longitude: f64) -> GeoRegion {
        let (west, east) = (wrap_longitude(longitude - 1.0), wrap_longitude(longitude + 1.0));
        GeoRegion::new([
            p(west, -20.0),
            p(east, -20.0),
            p(east, 20.0),
            p(west, 20.0),
            p(west, -20.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_contains_ring_wider_than_half_the_globe() {
        let region = band(-120.0, 120.0);
        for lng in [-100.0, 100.0, -60.0, 60.0, 0.0, -119.0, 119.0] {
            assert!(region.contains(&p(lng, 0.0)), "lng {}", lng);
        }
        for lng in [180.0, -180.0, 150.0, -150.0, 121.0, -121.0] {
            assert!(!region.contains(&p(lng, 0.0)), "lng {}", lng);
        }
        assert!(region.contains(&p(120.0, 0.0)));
        assert!(!region.contains(&p(100.0, 11.0)));
    }

    #[test]
    fn test_contains_wide_ring_across_antimeridian() {
        let region = band(60.0, -60.0);
        for lng in [100.0, -100.0, 150.0, -150.0, 180.0] {
            assert!(region.contains(&p(lng, 0.0)), "lng {}", lng);
        }
        for lng in [0.0, 30.0, -30.0] {
            assert!(!region.contains(&p(lng, 0.0)), "lng {}", lng);
        }
    }

    #[test]
    fn test_contains_region() {
        let outer = square(0.0, 0.0, 10.0);
        let inner = square(2.0, 2.0, 3.0);
        let partial = square(8.0, 8.0, 4.0);
        assert!(outer.contains_region(&inner));
        assert!(!inner.contains_region(&outer));
        assert!(!outer.contains_region(&partial));
        assert!(outer.contains_region(&outer));
    }

    #[test]
    fn test_intersects() {
        let a = square(0.0, 0.0, 2.0);
        assert!(a.intersects(&square(1.0, 1.0, 2.0)));
        assert!(a.intersects(&square(0.5, 0.5, 0.5)));
        assert!(square(0.5, 0.5, 0.5).intersects(&a));
        assert!(!a.intersects(&square(5.0, 5.0, 1.0)));
    }

    #[test]
    fn test_intersects_touching_edge() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_without_shared_vertices() {
        // a plus sign: each bar pokes through the other with no vertex inside
        let horizontal = GeoRegion::new([
            p(0.0, 1.0),
            p(3.0, 1.0),
            p(3.0, 2.0),
            p(0.0, 2.0),
            p(0.0, 1.0),
        ])
        .unwrap();
        let vertical = GeoRegion::new([
            p(1.0, 0.0),
            p(2.0, 0.0),
            p(2.0, 3.0),
            p(1.0, 3.0),
            p(1.0, 0.0),
        ])
        .unwrap();
        assert!(!horizontal.contains_region(&vertical));
        assert!(horizontal.intersects(&vertical));
        assert!(vertical.intersects(&horizontal));
    }

    #[test]
    fn test_intersects_across_antimeridian() {
        // a plus sign whose bars both straddle the antimeridian
        let horizontal = GeoRegion::new([
            p(179.0, -0.5),
            p(-179.0, -0.5),
            p(-179.0, 0.5),
            p(179.0, 0.5),
            p(179.0, -0.5),
        ])
        .unwrap();
        let vertical = GeoRegion::new([
            p(179.5, -2.0),
            p(-179.5, -2.0),
            p(-179.5, 2.0),
            p(179.5, 2.0),
            p(179.5, -2.0),
        ])
        .unwrap();
        assert!(!horizontal.contains_region(&vertical));
        assert!(horizontal.intersects(&vertical));
        assert!(vertical.intersects(&horizontal));
        assert!(!horizontal.intersects(&strip(0.0)));
    }

    #[test]
    fn test_intersects_ring_wider_than_half_the_globe() {
        let region = band(-120.0, 120.0);
        for lng in [100.0, -100.0] {
            assert!(region.intersects(&strip(lng)), "lng {}", lng);
            assert!(strip(lng).intersects(&region), "lng {}", lng);
        }
        assert!(!region.intersects(&strip(180.0)));

        let wrapped = band(60.0, -60.0);
        for lng in [100.0, -100.0, 180.0] {
            assert!(wrapped.intersects(&strip(lng)), "lng {}", lng);
            assert!(strip(lng).intersects(&wrapped), "lng {}", lng);
        }
        assert!(!wrapped.intersects(&strip(0.0)));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = square(0.0, 0.0, 1.0);
        let same = square(0.0, 0.0, 1.0);
        let shifted = GeoRegion::new([
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
            p(0.0, 0.0),
            p(1.0, 0.0),
        ])
        .unwrap();
        assert_eq!(a, same);
        assert_ne!(a, shifted);
        assert_ne!(a, reversed(&a));
    }

    #[test]
    fn test_display() {
        let text = square(0.0, 0.0, 1.0).to_string();
        assert!(text.starts_with("Vertices = 4, Area = "), "{}", text);
        assert!(text.ends_with(" m²"));
    }

    #[test]
    fn test_serde() {
        let region = GeoRegion::new([p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)]).unwrap();
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, "[[0.0,0.0],[1.0,0.0],[0.0,1.0],[0.0,0.0]]");
        assert_eq!(serde_json::from_str::<GeoRegion>(&json).unwrap(), region);

        assert_eq!(serde_json::from_str::<GeoRegion>("[]").unwrap(), GeoRegion::empty());
        assert!(serde_json::from_str::<GeoRegion>("[[0.0,0.0],[1.0,0.0],[0.0,1.0]]").is_err());
    }

    proptest! {
        #[test]
        fn prop_area_is_winding_independent(
            west in -170.0f64..170.0,
            south in -80.0f64..79.0,
            size in 0.01f64..1.0,
        ) {
            let region = square(west, south, size);
            let area = region.area();
            prop_assert!(area > 0.0);
            prop_assert!((area - reversed(&region).area()).abs() <= area * 1e-9);
        }

        #[test]
        fn prop_center_is_contained(
            west in -170.0f64..170.0,
            south in -80.0f64..79.0,
            size in 0.01f64..1.0,
        ) {
            let region = square(west, south, size);
            prop_assert!(region.contains(&region.center()));
            prop_assert!(!region.contains(&p(west + size * 2.0, south + size / 2.0)));
        }
    }
}
