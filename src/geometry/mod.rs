//! Planar geometry over dimensioned quantities.

mod pose;
mod vector2d;

pub use pose::Pose;
pub use vector2d::{Point, Vector2D};
