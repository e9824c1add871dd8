//! Physics module - collision shapes and detection

pub mod collision;
pub mod collision_system;

pub use collision_system::{
    detect, find_intersecting, find_intersecting_brute_force, CollisionDetector, CollisionReport,
};
