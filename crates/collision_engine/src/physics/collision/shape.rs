//! Polygons: input triangles normalized to the shape they really are
//!
//! A triangle whose vertices coincide is stored as a [`Shape::Point`]; one
//! whose vertices are collinear is stored as the [`Shape::Segment`] covering
//! them. Every pairwise test dispatches on the two shapes.

use crate::foundation::math::{Point3, PointExt, Vec3Ext};

use super::primitives::{Segment, Triangle};

/// Geometric content of a polygon
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// All three input vertices coincide
    Point(Point3),
    /// The input vertices are collinear
    Segment(Segment),
    /// A proper triangle
    Triangle(Triangle),
}

impl Shape {
    /// Normalize three vertices to the simplest shape covering them
    pub fn from_vertices(a: Point3, b: Point3, c: Point3) -> Self {
        if a.approx_eq(&b) && b.approx_eq(&c) {
            return Self::Point(a);
        }

        if !(b - a).is_collinear(&(c - a)) {
            if let Some(triangle) = Triangle::new(a, b, c) {
                return Self::Triangle(triangle);
            }
        }

        // Collinear: the longest of the three candidate segments spans the others
        let candidates = [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)];
        let longest = candidates
            .into_iter()
            .fold(candidates[0], |best, s| if s.length() > best.length() { s } else { best });
        Self::Segment(longest)
    }

    /// Points defining the shape
    pub fn vertices(&self) -> &[Point3] {
        match self {
            Self::Point(point) => std::slice::from_ref(point),
            Self::Segment(segment) => segment.endpoints(),
            Self::Triangle(triangle) => triangle.vertices(),
        }
    }

    /// True if the two shapes share at least one point
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Self::Point(p), Self::Point(q)) => p.approx_eq(q),
            (Self::Point(p), Self::Segment(s)) => s.contains_point(p),
            (Self::Point(p), Self::Triangle(t)) => t.contains_point(p),
            (Self::Segment(s), Self::Segment(o)) => s.intersects(o),
            (Self::Segment(s), Self::Triangle(t)) => t.intersects_segment(s),
            (Self::Triangle(t), Self::Triangle(o)) => t.intersects_triangle(o),
            (Self::Segment(_) | Self::Triangle(_), _) => other.intersects(self),
        }
    }
}

/// One input triangle after normalization, tagged with its input position
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    index: usize,
    shape: Shape,
}

impl Polygon {
    /// Build a polygon from three vertices, normalizing degenerate input
    pub fn from_vertices(a: Point3, b: Point3, c: Point3, index: usize) -> Self {
        Self {
            index,
            shape: Shape::from_vertices(a, b, c),
        }
    }

    /// A point polygon
    pub fn point(point: Point3, index: usize) -> Self {
        Self {
            index,
            shape: Shape::Point(point),
        }
    }

    /// A segment polygon; a zero-length segment becomes a point
    pub fn segment(begin: Point3, end: Point3, index: usize) -> Self {
        let shape = if begin.approx_eq(&end) {
            Shape::Point(begin)
        } else {
            Shape::Segment(Segment::new(begin, end))
        };
        Self { index, shape }
    }

    /// Position of the source triangle in the input
    pub fn index(&self) -> usize {
        self.index
    }

    /// Normalized shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Points defining the polygon
    pub fn vertices(&self) -> &[Point3] {
        self.shape.vertices()
    }

    /// True if the two polygons share at least one point.
    ///
    /// The pair is always evaluated lower index first, so the answer does
    /// not depend on argument order.
    pub fn intersects(&self, other: &Polygon) -> bool {
        if self.index <= other.index {
            self.shape.intersects(&other.shape)
        } else {
            other.shape.intersects(&self.shape)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn triangle(a: Point3, b: Point3, c: Point3) -> Polygon {
        Polygon::from_vertices(a, b, c, 0)
    }

    #[test]
    fn test_degenerate_to_point() {
        let polygon = Polygon::from_vertices(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0), 3);
        assert!(matches!(polygon.shape(), Shape::Point(_)));
        assert_eq!(polygon.index(), 3);
        assert_eq!(polygon.vertices().len(), 1);
    }

    #[test]
    fn test_degenerate_to_segment() {
        let polygon = triangle(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0), p(1.0, 1.0, 1.0));
        let Shape::Segment(segment) = polygon.shape() else {
            panic!("expected a segment, got {:?}", polygon.shape());
        };
        approx::assert_relative_eq!(segment.length(), 12.0_f64.sqrt());

        // Two coincident vertices
        let polygon = triangle(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(0.0, 3.0, 0.0));
        let Shape::Segment(segment) = polygon.shape() else {
            panic!("expected a segment, got {:?}", polygon.shape());
        };
        approx::assert_relative_eq!(segment.length(), 3.0);
    }

    #[test]
    fn test_zero_length_segment_is_point() {
        let polygon = Polygon::segment(p(1.0, 2.0, 3.0), p(1.0, 2.0, 3.0), 0);
        assert!(matches!(polygon.shape(), Shape::Point(_)));
    }

    #[test]
    fn test_point_point() {
        let a = Polygon::point(p(1.0, 1.0, 1.0), 0);
        let b = Polygon::point(p(1.0, 1.0, 1.0), 1);
        let c = Polygon::point(p(1.0, 1.0, 1.5), 2);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_point_triangle() {
        let t = triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert!(Polygon::point(p(0.25, 0.25, 0.0), 1).intersects(&t));
        assert!(t.intersects(&Polygon::point(p(0.25, 0.25, 0.0), 1)));
        assert!(!t.intersects(&Polygon::point(p(0.25, 0.25, 0.5), 1)));
    }

    #[test]
    fn test_point_segment() {
        let s = Polygon::segment(p(0.0, 0.0, 0.0), p(2.0, 0.0, 0.0), 0);
        assert!(s.intersects(&Polygon::point(p(2.0, 0.0, 0.0), 1)));
        assert!(!s.intersects(&Polygon::point(p(2.5, 0.0, 0.0), 1)));
    }

    #[test]
    fn test_segment_triangle() {
        let t = triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let through = Polygon::segment(p(0.2, 0.2, -1.0), p(0.2, 0.2, 1.0), 1);
        let beside = Polygon::segment(p(2.0, 2.0, -1.0), p(2.0, 2.0, 1.0), 2);
        assert!(t.intersects(&through));
        assert!(through.intersects(&t));
        assert!(!t.intersects(&beside));
    }

    #[test]
    fn test_degenerate_triangles_against_triangle() {
        let t = triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));

        let segment_off_plane = triangle(p(1.0, 1.0, 1.0), p(2.0, 2.0, 2.0), p(3.0, 3.0, 3.0));
        assert!(!t.intersects(&segment_off_plane));

        let segment_through = triangle(p(0.1, 0.1, -1.0), p(0.1, 0.1, 0.0), p(0.1, 0.1, 1.0));
        assert!(t.intersects(&segment_through));

        let point_inside = triangle(p(0.1, 0.1, 0.0), p(0.1, 0.1, 0.0), p(0.1, 0.1, 0.0));
        assert!(t.intersects(&point_inside));
    }

    #[test]
    fn test_triangles_touching_at_vertex() {
        let t1 = triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let t2 = Polygon::from_vertices(p(1.0, 0.0, 0.0), p(2.0, 0.0, 1.0), p(2.0, 1.0, -1.0), 1);
        assert!(t1.intersects(&t2));
        assert!(t2.intersects(&t1));
    }

    #[test]
    fn test_triangles_far_apart() {
        let t1 = triangle(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        let t2 = Polygon::from_vertices(p(5.0, 5.0, 5.0), p(6.0, 5.0, 5.0), p(5.0, 6.0, 5.0), 1);
        assert!(!t1.intersects(&t2));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        fn random_point(rng: &mut StdRng) -> Point3 {
            p(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0))
        }

        let mut rng = StdRng::seed_from_u64(7);

        let polygons: Vec<Polygon> = (0..60)
            .map(|i| {
                let a = random_point(&mut rng);
                match i % 3 {
                    0 => Polygon::point(a, i),
                    1 => Polygon::segment(a, random_point(&mut rng), i),
                    _ => Polygon::from_vertices(a, random_point(&mut rng), random_point(&mut rng), i),
                }
            })
            .collect();

        for first in &polygons {
            assert!(first.intersects(first));
            for second in &polygons {
                assert_eq!(first.intersects(second), second.intersects(first));
            }
        }
    }
}
