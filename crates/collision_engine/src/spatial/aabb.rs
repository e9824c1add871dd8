//! Axis-aligned bounding boxes
//!
//! A box is stored as a center and positive half-extents; min and max corners
//! are derived on demand. Containment of a point is strict (the boundary is
//! outside), while every overlap test counts touching as overlapping.

use crate::foundation::compare::{self, Interval};
use crate::foundation::math::{Point3, PointExt, Vec3, Vec3Ext, AXES};
use crate::physics::collision::{Polygon, Segment, Shape, Triangle};

/// Errors raised when a box would be malformed
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    /// A half-extent is zero, negative or not a number
    #[error("half-extent on axis {axis} must be positive, got {value}")]
    NonPositiveExtent {
        /// Offending axis (0, 1 or 2)
        axis: usize,
        /// Value supplied
        value: f64,
    },

    /// The center has a NaN or infinite coordinate
    #[error("box center must have finite coordinates")]
    NonFiniteCenter,

    /// No points to enclose
    #[error("cannot build a bounding box around zero points")]
    Empty,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    center: Point3,
    half_extents: Vec3,
}

impl AABB {
    /// Create a box from its center and half-extents
    pub fn new(center: Point3, half_extents: Vec3) -> Result<Self, BoundsError> {
        if !center.is_valid() {
            return Err(BoundsError::NonFiniteCenter);
        }
        for axis in 0..AXES {
            let value = half_extents.axis(axis);
            if !value.is_finite() || value <= 0.0 {
                return Err(BoundsError::NonPositiveExtent { axis, value });
            }
        }
        Ok(Self { center, half_extents })
    }

    /// Smallest box around `points`, grown by `padding` on every side.
    ///
    /// Axes along which the points have no extent and no padding get a
    /// half-extent of [`compare::EPSILON`] so the box stays well formed.
    pub fn enclosing<'a, I>(points: I, padding: f64) -> Result<Self, BoundsError>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(BoundsError::Empty)?;
        let (min, max) = iter.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });

        let center = nalgebra::center(&min, &max);
        let half_extents = ((max - min) / 2.0).add_scalar(padding).map(|h| h.max(compare::EPSILON));
        Self::new(center, half_extents)
    }

    /// Center point
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Half-extents along each axis
    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }

    /// Minimum corner
    pub fn min(&self) -> Point3 {
        self.center - self.half_extents
    }

    /// Maximum corner
    pub fn max(&self) -> Point3 {
        self.center + self.half_extents
    }

    /// All eight corners
    pub fn corners(&self) -> [Point3; 8] {
        std::array::from_fn(|corner| {
            let sign = |bit: usize| if corner & bit == 0 { -1.0 } else { 1.0 };
            self.center
                + Vec3::new(
                    sign(1) * self.half_extents.x,
                    sign(2) * self.half_extents.y,
                    sign(4) * self.half_extents.z,
                )
        })
    }

    /// One of the eight child boxes obtained by halving every axis.
    ///
    /// Bit 0 of `octant` selects the +x half, bit 1 the +y half, bit 2 the +z half.
    pub fn octant(&self, octant: usize) -> Self {
        let quarter = self.half_extents / 2.0;
        let sign = |bit: usize| if octant & bit == 0 { -1.0 } else { 1.0 };
        let offset = Vec3::new(sign(1) * quarter.x, sign(2) * quarter.y, sign(4) * quarter.z);
        Self {
            center: self.center + offset,
            half_extents: quarter,
        }
    }

    fn min_on(&self, axis: usize) -> f64 {
        self.center.axis(axis) - self.half_extents.axis(axis)
    }

    fn max_on(&self, axis: usize) -> f64 {
        self.center.axis(axis) + self.half_extents.axis(axis)
    }

    /// True if the point is strictly inside the box on every axis
    pub fn contains_point(&self, point: &Point3) -> bool {
        (0..AXES).all(|axis| {
            let value = point.axis(axis);
            value > self.min_on(axis) && value < self.max_on(axis)
        })
    }

    /// True if every defining point of the polygon is strictly inside the box
    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.vertices().iter().all(|vertex| self.contains_point(vertex))
    }

    /// True if the polygon comes close enough to the box that the narrow
    /// phase could call it intersecting with something strictly inside.
    ///
    /// Touching counts, and the box is first grown by [`Self::narrow_phase_reach`].
    /// Implied by [`Self::contains_polygon`].
    pub fn overlaps_polygon(&self, polygon: &Polygon) -> bool {
        let grown = self.expanded(self.narrow_phase_reach(polygon));
        match polygon.shape() {
            Shape::Point(point) => grown.touches_point(point),
            Shape::Segment(segment) => {
                segment.endpoints().iter().any(|p| grown.touches_point(p))
                    || grown.intersects_segment(segment)
            }
            Shape::Triangle(triangle) => {
                triangle.vertices().iter().any(|p| grown.touches_point(p))
                    || triangle.edges().iter().any(|edge| grown.intersects_segment(edge))
                    || grown.intersects_triangle(triangle)
            }
        }
    }

    /// Farthest a point can sit from a shape of this box's size (or the
    /// polygon's) and still be reported on it.
    ///
    /// The on-segment test compares distance sums against the length `L`, so
    /// it accepts points up to `sqrt(EPSILON * L / 2)` away from a segment.
    pub fn narrow_phase_reach(&self, polygon: &Polygon) -> f64 {
        let vertices = polygon.vertices();
        let span = vertices
            .iter()
            .flat_map(|a| vertices.iter().map(move |b| (a - b).norm()))
            .fold(0.0, f64::max);
        let length = span.max(2.0 * self.half_extents.norm());
        compare::EPSILON + (compare::EPSILON * length / 2.0).sqrt()
    }

    /// Same center, every half-extent grown by `margin`
    fn expanded(&self, margin: f64) -> Self {
        Self {
            center: self.center,
            half_extents: self.half_extents.add_scalar(margin),
        }
    }

    /// Inclusive, tolerant point test
    fn touches_point(&self, point: &Point3) -> bool {
        (0..AXES).all(|axis| Interval::new(self.min_on(axis), self.max_on(axis)).contains(point.axis(axis)))
    }

    /// Slab test: true if the segment crosses or touches the box
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        let begin = segment.begin();
        let direction = segment.direction();

        let mut t_min = f64::NEG_INFINITY;
        let mut t_max = f64::INFINITY;

        for axis in 0..AXES {
            let origin = begin.axis(axis);
            let d = direction.axis(axis);
            let (lo, hi) = (self.min_on(axis), self.max_on(axis));

            if compare::equal(d, 0.0) {
                // Parallel to this slab: inside it for every t or for none
                if !Interval::new(lo, hi).contains(origin) {
                    return false;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t1 = (lo - origin) * inv;
            let mut t2 = (hi - origin) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_min > t_max {
                return false;
            }
        }

        compare::intervals_overlap(&Interval::new(t_min, t_max), &Interval::new(0.0, 1.0))
    }

    /// Separating-axis test: true if the triangle and the box share a point.
    ///
    /// Tries the three box face normals, the triangle normal, and the nine
    /// cross products of box axes with triangle edges.
    pub fn intersects_triangle(&self, triangle: &Triangle) -> bool {
        let vertices = triangle.vertices();

        for axis in 0..AXES {
            let (lo, hi) = vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.axis(axis)), hi.max(v.axis(axis)))
            });
            if !Interval::new(lo, hi).overlaps(&Interval::new(self.min_on(axis), self.max_on(axis))) {
                return false;
            }
        }

        if self.is_separated_along(&triangle.normal(), triangle) {
            return false;
        }

        let box_axes = [Vec3::x(), Vec3::y(), Vec3::z()];
        for edge in triangle.edges() {
            for box_axis in &box_axes {
                let axis = box_axis.cross(&edge.direction());
                if axis.is_null() {
                    continue;
                }
                if self.is_separated_along(&axis.normalize(), triangle) {
                    return false;
                }
            }
        }

        true
    }

    fn is_separated_along(&self, axis: &Vec3, triangle: &Triangle) -> bool {
        let project = |p: &Point3| axis.dot(&p.coords);
        let triangle_span = Interval::spanning(triangle.vertices().iter().map(project));
        let box_span = Interval::spanning(self.corners().iter().map(project));

        match (triangle_span, box_span) {
            (Some(t), Some(b)) => !t.overlaps(&b),
            _ => false,
        }
    }
}
