//! Math utilities and types
//!
//! Provides the double-precision point and vector types every geometric
//! predicate is built from. Coordinates are plain nalgebra values; the
//! tolerance-aware helpers live in [`Vec3Ext`] and [`PointExt`].

pub use nalgebra::Vector3;

use super::compare;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f64>;

/// Number of coordinate axes
pub const AXES: usize = 3;

/// Extension trait for Vec3 with tolerance-aware predicates
pub trait Vec3Ext {
    /// True if every component is zero within tolerance
    fn is_null(&self) -> bool;

    /// True if the two vectors point along the same line (either direction).
    ///
    /// The test is made on normalized vectors, so it is independent of the
    /// vectors' lengths. A null vector is collinear with everything.
    fn is_collinear(&self, other: &Vec3) -> bool;

    /// True if the two vectors are equal component-wise within tolerance
    fn approx_eq(&self, other: &Vec3) -> bool;

    /// Component along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1 or 2.
    fn axis(&self, axis: usize) -> f64;
}

impl Vec3Ext for Vec3 {
    fn is_null(&self) -> bool {
        compare::equal(self.x, 0.0) && compare::equal(self.y, 0.0) && compare::equal(self.z, 0.0)
    }

    fn is_collinear(&self, other: &Vec3) -> bool {
        if self.is_null() || other.is_null() {
            return true;
        }
        let a = self.normalize();
        let b = other.normalize();
        a.cross(&b).is_null()
    }

    fn approx_eq(&self, other: &Vec3) -> bool {
        compare::equal(self.x, other.x)
            && compare::equal(self.y, other.y)
            && compare::equal(self.z, other.z)
    }

    fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("invalid axis {axis}, expected 0, 1 or 2"),
        }
    }
}

/// Extension trait for Point3 with validity and tolerance-aware equality
pub trait PointExt {
    /// True if no coordinate is NaN or infinite
    fn is_valid(&self) -> bool;

    /// Equality within tolerance; an invalid point is never equal to anything
    fn approx_eq(&self, other: &Point3) -> bool;

    /// Euclidean distance, or `None` if either point is invalid
    fn distance_to(&self, other: &Point3) -> Option<f64>;

    /// Coordinate along an axis.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not 0, 1 or 2.
    fn axis(&self, axis: usize) -> f64;
}

impl PointExt for Point3 {
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn approx_eq(&self, other: &Point3) -> bool {
        self.is_valid() && other.is_valid() && self.coords.approx_eq(&other.coords)
    }

    fn distance_to(&self, other: &Point3) -> Option<f64> {
        if !self.is_valid() || !other.is_valid() {
            return None;
        }
        Some(nalgebra::distance(self, other))
    }

    fn axis(&self, axis: usize) -> f64 {
        self.coords.axis(axis)
    }
}
