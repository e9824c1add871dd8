//! # Collision Engine
//!
//! Finds every triangle in a 3D soup that touches at least one other
//! triangle, using an octree broad phase and exact narrow-phase tests.
//!
//! ## Features
//!
//! - **Degenerate input**: triangles collapsing to a segment or a point are
//!   normalized and tested with the matching predicate
//! - **Octree broad phase**: polygons sink into the deepest octant that
//!   fully contains them
//! - **Tolerant comparisons**: every predicate uses one absolute tolerance
//!   and counts touching as intersecting
//!
//! ## Quick Start
//!
//! ```rust
//! use collision_engine::prelude::*;
//!
//! let polygons = vec![
//!     Polygon::from_vertices(
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!         0,
//!     ),
//!     Polygon::from_vertices(
//!         Point3::new(0.2, 0.2, -1.0),
//!         Point3::new(0.2, 0.2, 1.0),
//!         Point3::new(0.4, 0.4, 0.0),
//!         1,
//!     ),
//! ];
//!
//! let bounds = AABB::enclosing(polygons.iter().flat_map(Polygon::vertices), 1.0).unwrap();
//! let tree = build_octree(polygons, bounds, 50);
//! let hits: Vec<usize> = find_intersecting(&tree).into_iter().collect();
//! assert_eq!(hits, vec![0, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::many_single_char_names)]

pub mod config;
pub mod foundation;
pub mod physics;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{CollisionConfig, Config, ConfigError},
        foundation::math::{Point3, PointExt, Vec3, Vec3Ext},
        physics::{
            collision::{Plane, Polygon, Segment, Shape, Triangle},
            detect, find_intersecting, find_intersecting_brute_force, CollisionReport,
        },
        spatial::{build_octree, BoundsError, Octree, OctreeConfig, AABB},
    };
}
