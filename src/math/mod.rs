pub mod distance_2d;
pub mod intersect_2d;
pub mod orientation;

pub use intersect_2d::{segment_intersection, LineIntersection};
pub use orientation::{orientation_index, quadrant, signed_area, Orientation, Quadrant};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;
