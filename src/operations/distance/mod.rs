mod distance_op;
mod distance_to_point;
mod facet;
mod hausdorff;
mod point_pair_distance;

pub use distance_op::DistanceOp;
pub use distance_to_point::{compute_distance, DistanceToPoint};
pub use hausdorff::{DiscreteHausdorffDistance, HausdorffParams, MAX_SUBDIVISIONS};
pub use point_pair_distance::PointPairDistance;
