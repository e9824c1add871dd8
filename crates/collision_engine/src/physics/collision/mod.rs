//! Collision detection primitives and polygon shapes

pub mod primitives;
pub mod shape;

pub use primitives::{Plane, Segment, Triangle};
pub use shape::{Polygon, Shape};
