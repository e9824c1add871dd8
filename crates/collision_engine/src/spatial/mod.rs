//! Spatial partitioning for broad-phase culling

pub mod aabb;
pub mod octree;

pub use aabb::{BoundsError, AABB};
pub use octree::{build_octree, NodeId, Octree, OctreeConfig, OctreeNode, OctreeStats};
