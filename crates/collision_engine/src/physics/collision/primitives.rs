//! Primitive collision shapes and intersection algorithms
//!
//! Provides the basic geometric primitives (segments, planes, triangles)
//! with the predicates the polygon dispatch is built from. All comparisons
//! go through [`crate::foundation::compare`]; touching counts as
//! intersecting everywhere.

use crate::foundation::compare::{self, Interval};
use crate::foundation::math::{Point3, PointExt, Vec3, Vec3Ext};

/// A line segment between two points.
///
/// The directing vector is always `end - begin`, cached at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    points: [Point3; 2],
    direction: Vec3,
}

impl Segment {
    /// Creates a segment from its two endpoints
    pub fn new(begin: Point3, end: Point3) -> Self {
        Self {
            points: [begin, end],
            direction: end - begin,
        }
    }

    /// Creates a segment starting at `begin` and spanning `direction`
    pub fn from_direction(begin: Point3, direction: Vec3) -> Self {
        Self::new(begin, begin + direction)
    }

    /// First endpoint
    pub fn begin(&self) -> Point3 {
        self.points[0]
    }

    /// Second endpoint
    pub fn end(&self) -> Point3 {
        self.points[1]
    }

    /// Both endpoints, begin first
    pub fn endpoints(&self) -> &[Point3; 2] {
        &self.points
    }

    /// Directing vector (`end - begin`)
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.direction.norm()
    }

    /// True if `point` lies on the segment.
    ///
    /// Uses the distance criterion: the distances from the point to both
    /// endpoints sum to the segment length. Invalid points never lie on a segment.
    pub fn contains_point(&self, point: &Point3) -> bool {
        match (point.distance_to(&self.begin()), point.distance_to(&self.end())) {
            (Some(to_begin), Some(to_end)) => compare::equal(to_begin + to_end, self.length()),
            _ => false,
        }
    }

    /// True if `point` lies on the infinite line through this segment
    pub fn is_on_line(&self, point: &Point3) -> bool {
        point.is_valid() && self.direction.is_collinear(&(point - self.begin()))
    }

    /// True if both segments lie on the same infinite line
    pub fn is_coincident_with(&self, other: &Segment) -> bool {
        self.is_on_line(&other.begin()) && self.is_on_line(&other.end())
    }

    /// True if the segments are parallel and share at least one point along
    /// their common direction (one endpoint lies on the other segment)
    pub fn overlaps(&self, other: &Segment) -> bool {
        if !self.direction.is_collinear(&other.direction) {
            return false;
        }

        other.contains_point(&self.begin())
            || other.contains_point(&self.end())
            || self.contains_point(&other.begin())
            || self.contains_point(&other.end())
    }

    /// Point on this segment's line closest to the other segment's line.
    ///
    /// Returns `None` when the lines are parallel (no unique closest point).
    /// For intersecting lines this is the intersection point.
    pub fn closest_point_to_line(&self, other: &Segment) -> Option<Point3> {
        if self.direction.is_collinear(&other.direction) {
            return None;
        }

        let d1 = self.direction;
        let d2 = other.direction;
        let w = self.begin() - other.begin();

        let a = d1.dot(&d1);
        let b = d1.dot(&d2);
        let c = d2.dot(&d2);
        let d = d1.dot(&w);
        let e = d2.dot(&w);

        let denominator = a * c - b * b;
        if denominator == 0.0 {
            return None;
        }

        let s = (b * e - c * d) / denominator;
        let point = self.begin() + d1 * s;
        point.is_valid().then_some(point)
    }

    /// True if the two segments share at least one point
    pub fn intersects(&self, other: &Segment) -> bool {
        if self.direction.is_collinear(&other.direction) {
            return self.is_coincident_with(other) && self.overlaps(other);
        }

        match self.closest_point_to_line(other) {
            Some(point) => self.contains_point(&point) && other.contains_point(&point),
            None => false,
        }
    }
}

/// An infinite plane through three points.
///
/// Stored as a unit normal `n` and offset `d` such that `n · x + d = 0`,
/// plus the first defining point. Computed once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f64,
    origin: Point3,
}

impl Plane {
    /// Plane through three points, or `None` if the points are collinear
    pub fn from_points(p1: &Point3, p2: &Point3, p3: &Point3) -> Option<Self> {
        let normal = (p2 - p1).cross(&(p3 - p1));
        let length = normal.norm();
        if !length.is_finite() || length <= 0.0 {
            return None;
        }

        let normal = normal / length;
        Some(Self {
            normal,
            offset: -normal.dot(&p1.coords),
            origin: *p1,
        })
    }

    /// Implicit coefficients `(a, b, c, d)` of `ax + by + cz + d = 0`
    pub fn coefficients(&self) -> [f64; 4] {
        [self.normal.x, self.normal.y, self.normal.z, self.offset]
    }

    /// Unit normal vector
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// A point lying on the plane
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Signed distance from the point to the plane
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) + self.offset
    }

    /// True if the point lies on the plane
    pub fn contains_point(&self, point: &Point3) -> bool {
        point.is_valid() && compare::equal(self.signed_distance(point), 0.0)
    }

    /// True if the planes have parallel normals
    pub fn is_parallel(&self, other: &Plane) -> bool {
        self.normal.is_collinear(&other.normal)
    }

    /// True if both planes are the same plane
    pub fn coincides_with(&self, other: &Plane) -> bool {
        self.is_parallel(other) && self.contains_point(&other.origin)
    }

    /// Point where the segment crosses the plane.
    ///
    /// A segment lying in the plane yields its begin point; a segment that
    /// is parallel to the plane or stops short of it yields `None`.
    pub fn intersect_segment(&self, segment: &Segment) -> Option<Point3> {
        let begin = segment.begin();
        let direction = segment.direction();
        let start = self.signed_distance(&begin);

        if direction.is_null() || compare::equal(direction.normalize().dot(&self.normal), 0.0) {
            return compare::equal(start, 0.0).then_some(begin);
        }

        let t = -start / direction.dot(&self.normal);
        let point = begin + direction * t;
        segment.contains_point(&point).then_some(point)
    }

    /// Line along which the two planes meet, as a point and a unit direction.
    ///
    /// Returns `None` for parallel planes.
    pub fn intersection_line(&self, other: &Plane) -> Option<Segment> {
        if self.is_parallel(other) {
            return None;
        }

        let n1 = self.normal;
        let n2 = other.normal;
        let h1 = -self.offset;
        let h2 = -other.offset;

        // Unit normals, so |n1|² = |n2|² = 1
        let cos = n1.dot(&n2);
        let det = 1.0 - cos * cos;
        let c1 = (h1 - h2 * cos) / det;
        let c2 = (h2 - h1 * cos) / det;

        let point = Point3::from(n1 * c1 + n2 * c2);
        Some(Segment::from_direction(point, n1.cross(&n2).normalize()))
    }
}

/// A non-degenerate triangle with its boundary segments and supporting
/// plane cached at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3; 3],
    edges: [Segment; 3],
    plane: Plane,
}

impl Triangle {
    /// Creates a triangle, or `None` if the vertices are collinear
    pub fn new(a: Point3, b: Point3, c: Point3) -> Option<Self> {
        let plane = Plane::from_points(&a, &b, &c)?;
        Some(Self {
            vertices: [a, b, c],
            edges: [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)],
            plane,
        })
    }

    /// First vertex
    pub fn a(&self) -> Point3 {
        self.vertices[0]
    }

    /// Second vertex
    pub fn b(&self) -> Point3 {
        self.vertices[1]
    }

    /// Third vertex
    pub fn c(&self) -> Point3 {
        self.vertices[2]
    }

    /// All three vertices
    pub fn vertices(&self) -> &[Point3; 3] {
        &self.vertices
    }

    /// Boundary segments `ab`, `bc`, `ca`
    pub fn edges(&self) -> &[Segment; 3] {
        &self.edges
    }

    /// Supporting plane
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Unit normal of the supporting plane (right-hand rule on `a, b, c`)
    pub fn normal(&self) -> Vec3 {
        self.plane.normal()
    }

    /// True if the point lies in the triangle's plane and inside or on the
    /// boundary of the triangle.
    ///
    /// For each edge the cross product of the edge with the point's offset
    /// from the edge start is projected on the normal; the point is inside
    /// when all three projections share a sign.
    pub fn contains_point(&self, point: &Point3) -> bool {
        if !point.is_valid() || !self.plane.contains_point(point) {
            return false;
        }

        let normal = self.plane.normal();
        let sides: [f64; 3] = std::array::from_fn(|i| {
            let offset = point - self.vertices[i];
            offset.cross(&self.edges[i].direction()).dot(&normal)
        });

        sides.iter().all(|&s| compare::greater_or_equal(s, 0.0))
            || sides.iter().all(|&s| compare::less_or_equal(s, 0.0))
    }

    /// True if the segment touches the triangle
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        if self.edges.iter().any(|edge| edge.intersects(segment)) {
            return true;
        }

        let begin = segment.begin();
        let end = segment.end();
        if self.plane.contains_point(&begin) && self.plane.contains_point(&end) {
            // Coplanar and not crossing any edge: inside iff an endpoint is
            return self.contains_point(&begin) || self.contains_point(&end);
        }

        self.plane
            .intersect_segment(segment)
            .is_some_and(|point| self.contains_point(&point))
    }

    /// True if the two triangles share at least one point
    pub fn intersects_triangle(&self, other: &Triangle) -> bool {
        if self.plane.coincides_with(&other.plane) {
            return self.intersects_coplanar(other);
        }

        if self.lies_on_one_side_of(&other.plane) || other.lies_on_one_side_of(&self.plane) {
            return false;
        }

        let Some(line) = self.plane.intersection_line(&other.plane) else {
            return false;
        };

        match (
            other.interval_on_line(&line, &self.plane),
            self.interval_on_line(&line, &other.plane),
        ) {
            (Some(first), Some(second)) => first.overlaps(&second),
            _ => false,
        }
    }

    /// Intersection test for two triangles in the same plane
    fn intersects_coplanar(&self, other: &Triangle) -> bool {
        let edges_cross = self
            .edges
            .iter()
            .any(|edge| other.edges.iter().any(|other_edge| edge.intersects(other_edge)));

        edges_cross || self.contains_point(&other.a()) || other.contains_point(&self.a())
    }

    /// True if every vertex lies strictly on the same side of the plane
    fn lies_on_one_side_of(&self, plane: &Plane) -> bool {
        let distances = self.vertices.map(|v| plane.signed_distance(&v));

        distances.iter().all(|&d| !compare::less_or_equal(d, 0.0))
            || distances.iter().all(|&d| !compare::greater_or_equal(d, 0.0))
    }

    /// Interval swept on `line` by the part of this triangle lying in `plane`.
    ///
    /// Collects the vertices lying on the plane and, for every edge whose
    /// endpoints are on opposite sides, the interpolated crossing point, then
    /// spans their projections on the line. `None` if the triangle does not
    /// reach the plane.
    fn interval_on_line(&self, line: &Segment, plane: &Plane) -> Option<Interval> {
        let distances = self.vertices.map(|v| plane.signed_distance(&v));
        let on_plane = distances.map(|d| compare::equal(d, 0.0));
        let project = |point: &Point3| (point - line.begin()).dot(&line.direction());

        let touching = (0..3)
            .filter(|&i| on_plane[i])
            .map(|i| project(&self.vertices[i]));

        let crossing = [(0, 1), (1, 2), (2, 0)]
            .into_iter()
            .filter(|&(i, j)| !on_plane[i] && !on_plane[j] && (distances[i] > 0.0) != (distances[j] > 0.0))
            .map(|(i, j)| {
                let t = distances[i] / (distances[i] - distances[j]);
                let point = self.vertices[i] + (self.vertices[j] - self.vertices[i]) * t;
                project(&point)
            });

        Interval::spanning(touching.chain(crossing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn seg(a: Point3, b: Point3) -> Segment {
        Segment::new(a, b)
    }

    fn tri(a: Point3, b: Point3, c: Point3) -> Triangle {
        Triangle::new(a, b, c).expect("non-degenerate triangle")
    }

    #[test]
    fn test_point_lies_on_segment() {
        let s = seg(p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0));
        assert!(s.contains_point(&p(0.0, 0.0, 0.5)));

        let s = seg(p(0.0, 0.0, 2.0), p(1.0, -1.0, 0.0));
        assert!(s.contains_point(&p(0.5, -0.5, 1.0)));
        assert!(!s.contains_point(&p(0.5, 0.5, 1.0)));
        assert!(!s.contains_point(&p(f64::NAN, 0.0, 0.0)));
    }

    #[test]
    fn test_segment_length() {
        let s = seg(p(0.0, 0.0, 0.0), p(13.0, 18.0, 6.0));
        approx::assert_relative_eq!(s.length(), 23.0);
    }

    #[test]
    fn test_segments_intersect() {
        let s1 = seg(p(3.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let s2 = seg(p(2.0, 0.0, 0.0), p(0.0, 0.0, 3.0));
        assert!(s1.intersects(&s2));

        // Identical segments
        let s3 = seg(p(2.0, 0.0, 0.0), p(0.0, 0.0, 3.0));
        assert!(s2.intersects(&s3));

        // Shared endpoint
        let s4 = seg(p(-1.0, -1.0, 0.0), p(0.0, 0.0, 3.0));
        let s5 = seg(p(-3.0, 0.0, 0.0), p(-1.0, -1.0, 0.0));
        assert!(s4.intersects(&s5));
    }

    #[test]
    fn test_skew_segments_do_not_intersect() {
        let s1 = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let s2 = seg(p(0.5, -1.0, 1.0), p(0.5, 1.0, 1.0));
        assert!(!s1.intersects(&s2));
    }

    #[test]
    fn test_closest_point_of_lines() {
        let l1 = seg(p(3.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        let l2 = seg(p(2.0, 0.0, 0.0), p(0.0, 0.0, 3.0));
        let point = l1.closest_point_to_line(&l2).expect("lines cross");
        assert!(point.approx_eq(&p(1.2, 0.0, 1.2)));

        let l3 = seg(p(-6.0, 0.0, 0.0), p(0.0, -6.0, 0.0));
        let l4 = seg(p(0.0, 0.0, 0.0), p(-5.0, -5.0, 0.0));
        let point = l3.closest_point_to_line(&l4).expect("lines cross");
        assert!(point.approx_eq(&p(-3.0, -3.0, 0.0)));

        let parallel = seg(p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0));
        let base = seg(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        assert!(base.closest_point_to_line(&parallel).is_none());
    }

    #[test]
    fn test_point_lies_on_line() {
        let line = seg(p(0.0, 0.0, 0.0), p(1.0, 1.0, 1.0));
        assert!(line.is_on_line(&p(-100.0, -100.0, -100.0)));
        assert!(line.is_on_line(&p(0.5, 0.5, 0.5)));
        assert!(!line.is_on_line(&p(0.5, 0.4, 0.5)));
    }

    #[test]
    fn test_lines_are_coincident() {
        let l1 = seg(p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0));
        let l2 = seg(p(50.0, 50.0, 50.0), p(100.0, 100.0, 100.0));
        assert!(l1.is_coincident_with(&l2));

        let l3 = seg(p(1.0, 1.5, 1.0), p(2.0, 2.0, 2.0));
        assert!(!l3.is_coincident_with(&l2));
    }

    #[test]
    fn test_segments_overlap() {
        let s1 = seg(p(20.0, 0.0, 0.0), p(100.0, 0.0, 0.0));
        let s2 = seg(p(50.0, 0.0, 0.0), p(-50.0, 0.0, 0.0));
        assert!(s1.overlaps(&s2));

        let inner = seg(p(0.0, 0.0, 0.0), p(50.0, 50.0, 50.0));
        let outer = seg(p(-100.0, -100.0, -100.0), p(100.0, 100.0, 100.0));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_segments_do_not_overlap() {
        let s1 = seg(p(0.0, 0.0, -50.0), p(0.0, 0.0, 50.0));
        let s2 = seg(p(50.0, 100.0, 0.0), p(-50.0, 200.0, 0.0));
        assert!(!s1.overlaps(&s2));

        let s3 = seg(p(0.0, 0.0, 1.0), p(0.0, 0.0, 2.0));
        let s4 = seg(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.9));
        assert!(!s3.overlaps(&s4));
        assert!(!s3.intersects(&s4));
    }

    #[test]
    fn test_point_lies_on_plane() {
        let plane = Plane::from_points(&p(0.0, 1.0, 1.0), &p(-2.5, 0.0, 0.0), &p(0.0, 0.0, 0.0))
            .expect("plane");
        assert!(plane.contains_point(&p(0.0, 0.0, 0.0)));
        assert!(plane.contains_point(&p(0.1, 0.1, 0.1)));
        assert!(!plane.contains_point(&p(0.1, 0.2, 0.1)));
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0), &p(2.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn test_plane_segment_intersection() {
        let plane = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0))
            .expect("plane");

        let crossing = seg(p(0.25, 0.25, 1.0), p(0.25, 0.25, -1.0));
        let point = plane.intersect_segment(&crossing).expect("crosses");
        assert!(point.approx_eq(&p(0.25, 0.25, 0.0)));

        let short = seg(p(0.25, 0.25, 1.0), p(0.25, 0.25, 0.5));
        assert!(plane.intersect_segment(&short).is_none());

        let parallel = seg(p(0.0, 0.0, 1.0), p(1.0, 0.0, 1.0));
        assert!(plane.intersect_segment(&parallel).is_none());
    }

    #[test]
    fn test_planes_intersection_line() {
        let xy = Plane::from_points(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(0.0, 1.0, 0.0))
            .expect("plane");
        let x_half = Plane::from_points(&p(0.5, 0.0, 0.0), &p(0.5, 1.0, 0.0), &p(0.5, 0.0, 1.0))
            .expect("plane");

        let line = xy.intersection_line(&x_half).expect("planes cross");
        assert!(xy.contains_point(&line.begin()));
        assert!(x_half.contains_point(&line.begin()));
        assert!(line.direction().is_collinear(&Vec3::y()));

        let shifted = Plane::from_points(&p(0.0, 0.0, 1.0), &p(1.0, 0.0, 1.0), &p(0.0, 1.0, 1.0))
            .expect("plane");
        assert!(xy.is_parallel(&shifted));
        assert!(!xy.coincides_with(&shifted));
        assert!(xy.intersection_line(&shifted).is_none());
    }

    #[test]
    fn test_point_inside_triangle() {
        let t = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(t.contains_point(&p(0.25, 0.25, 0.0)));
        // Boundary points are inside
        assert!(t.contains_point(&p(0.5, 0.0, 0.0)));
        assert!(t.contains_point(&p(0.0, 0.0, 0.0)));
        assert!(!t.contains_point(&p(0.75, 0.75, 0.0)));
    }

    #[test]
    fn test_point_outside_triangle() {
        let t = tri(p(0.0, 0.0, 2.0), p(1.0, 0.0, 0.0), p(0.0, -1.0, 0.0));
        assert!(!t.contains_point(&p(0.0, 0.0, 0.0)));

        let t = tri(p(0.0, 0.0, 0.2), p(1.0, 0.0, 0.0), p(0.0, -1.0, 0.0));
        assert!(!t.contains_point(&p(1.2, 0.0, 0.0)));
    }

    #[test]
    fn test_triangle_segment_intersection() {
        let t = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));

        // Pierces the interior
        assert!(t.intersects_segment(&seg(p(0.25, 0.25, 1.0), p(0.25, 0.25, -1.0))));
        // Coplanar and fully inside
        assert!(t.intersects_segment(&seg(p(0.1, 0.1, 0.0), p(0.2, 0.2, 0.0))));
        // Misses beside the hypotenuse
        assert!(!t.intersects_segment(&seg(p(0.8, 0.8, 1.0), p(0.8, 0.8, -1.0))));
        // Stops above the plane
        assert!(!t.intersects_segment(&seg(p(0.25, 0.25, 1.0), p(0.25, 0.25, 0.1))));
    }

    #[test]
    fn test_coplanar_triangles() {
        let t1 = tri(p(-4.0, 0.0, 0.0), p(0.0, -4.0, 0.0), p(-2.0, 0.0, 0.0));

        let apart = tri(p(2.0, 0.0, 0.0), p(3.0, 0.0, 0.0), p(0.0, 2.0, 0.0));
        assert!(!t1.intersects_triangle(&apart));

        let crossing = tri(p(3.0, 0.0, 0.0), p(-5.0, 0.0, 0.0), p(0.0, 2.0, 0.0));
        assert!(t1.intersects_triangle(&crossing));

        let spanning = tri(p(3.0, 0.0, 0.0), p(-4.0, -5.0, 0.0), p(0.0, 2.0, 0.0));
        assert!(t1.intersects_triangle(&spanning));

        let big = tri(p(0.0, 0.0, 0.0), p(0.0, 0.0, 4.0), p(0.0, 5.0, 0.0));
        let nested = tri(p(0.0, 1.0, 0.5), p(0.0, 1.0, 1.0), p(0.0, 2.0, 1.0));
        assert!(big.intersects_triangle(&nested));
        assert!(nested.intersects_triangle(&big));
    }

    #[test]
    fn test_triangles_intersect_in_3d() {
        let t1 = tri(p(0.0, 1.0, 0.0), p(0.0, 0.0, 2.0), p(0.0, -1.0, 0.0));
        let t2 = tri(p(0.0, 2.0, 0.0), p(-3.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
        assert!(t1.intersects_triangle(&t2));

        let t3 = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let t4 = tri(p(0.5, -0.5, 0.0), p(0.5, 0.5, 1.0), p(0.5, 0.5, -1.0));
        assert!(t3.intersects_triangle(&t4));

        let t5 = tri(p(1.0, 1.0, 1.0), p(2.0, 1.0, 1.0), p(1.0, 2.0, 1.0));
        let t6 = tri(p(1.5, 0.5, 0.0), p(1.5, 1.5, 2.0), p(1.5, 1.5, -2.0));
        assert!(t5.intersects_triangle(&t6));
    }

    #[test]
    fn test_triangles_touching_along_edge() {
        let t1 = tri(p(1.0, 1.0, 0.0), p(3.0, 1.0, 0.0), p(1.0, 1.0, 2.0));
        let t2 = tri(p(2.0, 2.0, 2.0), p(1.0, 1.0, 2.0), p(2.0, 1.0, 2.0));
        assert!(t1.intersects_triangle(&t2));
        assert!(t2.intersects_triangle(&t1));
    }

    #[test]
    fn test_triangles_do_not_intersect() {
        // Parallel planes
        let t1 = tri(p(0.0, -1.0, -1.0), p(2.0, -1.0, -1.0), p(0.0, -1.0, 2.0));
        let t2 = tri(p(1.0, 1.0, 0.0), p(3.0, 1.0, 0.0), p(1.0, 1.0, 2.0));
        assert!(!t1.intersects_triangle(&t2));

        let t3 = tri(p(2.0, 2.0, 2.0), p(1.0, 1.0, 2.0), p(2.0, 1.0, 2.0));
        assert!(!t1.intersects_triangle(&t3));

        // Coplanar, separated by a gap
        let t4 = tri(p(1.0, 1.0, 0.0), p(3.0, 1.0, 0.0), p(1.0, 3.0, 0.0));
        let t5 = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(!t4.intersects_triangle(&t5));

        let t6 = tri(p(81.8857, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 78.4631, 0.0));
        let t7 = tri(p(73.2058, 12.201, 0.0), p(155.092, 12.201, 0.0), p(73.2058, 90.6641, 0.0));
        assert!(!t6.intersects_triangle(&t7));

        let t8 = tri(p(-4.4, 3.7, -2.1), p(-0.6, 2.8, -0.3), p(-1.6, -1.2, -1.0));
        let t9 = tri(p(0.2, -1.1, -1.7), p(2.6, -3.2, -3.9), p(-4.7, -1.7, 0.3));
        assert!(!t8.intersects_triangle(&t9));
    }

    #[test]
    fn test_planes_cross_but_triangles_miss() {
        // The planes meet along x = 5, z = 0 but the first triangle stops at x = 1
        let t1 = tri(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let t2 = tri(p(5.0, -1.0, -1.0), p(5.0, 1.0, -1.0), p(5.0, 0.0, 1.0));
        assert!(!t1.intersects_triangle(&t2));
        assert!(!t2.intersects_triangle(&t1));
    }
}
