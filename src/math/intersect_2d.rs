use nalgebra::Vector3;

use super::distance_2d::point_segment_distance;
use super::orientation::orientation_index;
use crate::geometry::{Coordinate, Envelope};

/// Outcome of intersecting two closed line segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// The segments are disjoint.
    None,
    /// The segments meet in exactly one point.
    Point(Coordinate),
    /// The segments are collinear and share the sub-segment between the two
    /// coordinates.
    Collinear(Coordinate, Coordinate),
}

impl LineIntersection {
    /// Returns `true` unless the segments are disjoint.
    #[must_use]
    pub fn has_intersection(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Intersects segment `p1 -> p2` with segment `q1 -> q2`.
///
/// Side tests are exact. When an endpoint of one segment lies on the other,
/// that endpoint is returned verbatim rather than a computed value, so
/// touches at shared vertices are reported with bit-identical coordinates.
/// Proper crossings are computed in coordinates normalised around the
/// overlap of the two envelopes; if rounding pushes the result outside
/// either envelope, the endpoint nearest the other segment is used instead.
#[must_use]
pub fn segment_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> LineIntersection {
    if !Envelope::of_segment(p1, p2).intersects(&Envelope::of_segment(q1, q2)) {
        return LineIntersection::None;
    }

    let pq1 = orientation_index(p1, p2, q1).sign();
    let pq2 = orientation_index(p1, p2, q2).sign();
    if pq1 * pq2 > 0 {
        return LineIntersection::None;
    }

    let qp1 = orientation_index(q1, q2, p1).sign();
    let qp2 = orientation_index(q1, q2, p2).sign();
    if qp1 * qp2 > 0 {
        return LineIntersection::None;
    }

    if pq1 == 0 && pq2 == 0 && qp1 == 0 && qp2 == 0 {
        return collinear_intersection(p1, p2, q1, q2);
    }

    if pq1 == 0 || pq2 == 0 || qp1 == 0 || qp2 == 0 {
        let point = if p1.equals_2d(q1) || p1.equals_2d(q2) {
            *p1
        } else if p2.equals_2d(q1) || p2.equals_2d(q2) {
            *p2
        } else if pq1 == 0 {
            *q1
        } else if pq2 == 0 {
            *q2
        } else if qp1 == 0 {
            *p1
        } else {
            *p2
        };
        return LineIntersection::Point(point);
    }

    LineIntersection::Point(proper_intersection(p1, p2, q1, q2))
}

fn collinear_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> LineIntersection {
    let env_p = Envelope::of_segment(p1, p2);
    let env_q = Envelope::of_segment(q1, q2);
    let p1q1p2 = env_p.contains_point(q1);
    let p1q2p2 = env_p.contains_point(q2);
    let q1p1q2 = env_q.contains_point(p1);
    let q1p2q2 = env_q.contains_point(p2);

    let (a, b) = if p1q1p2 && p1q2p2 {
        (q1, q2)
    } else if q1p1q2 && q1p2q2 {
        (p1, p2)
    } else if p1q1p2 && q1p1q2 {
        (q1, p1)
    } else if p1q1p2 && q1p2q2 {
        (q1, p2)
    } else if p1q2p2 && q1p1q2 {
        (q2, p1)
    } else if p1q2p2 && q1p2q2 {
        (q2, p2)
    } else {
        return LineIntersection::None;
    };

    if a.equals_2d(b) {
        LineIntersection::Point(*a)
    } else {
        LineIntersection::Collinear(*a, *b)
    }
}

fn proper_intersection(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Coordinate {
    let env_p = Envelope::of_segment(p1, p2);
    let env_q = Envelope::of_segment(q1, q2);
    let norm_x = (env_p.min_x.max(env_q.min_x) + env_p.max_x.min(env_q.max_x)) / 2.0;
    let norm_y = (env_p.min_y.max(env_q.min_y) + env_p.max_y.min(env_q.max_y)) / 2.0;

    // Lines and their meet in homogeneous coordinates.
    let homogeneous = |c: &Coordinate| Vector3::new(c.x - norm_x, c.y - norm_y, 1.0);
    let line_p = homogeneous(p1).cross(&homogeneous(p2));
    let line_q = homogeneous(q1).cross(&homogeneous(q2));
    let meet = line_p.cross(&line_q);

    let x = meet.x / meet.z + norm_x;
    let y = meet.y / meet.z + norm_y;
    let candidate = Coordinate::new(x, y);

    if x.is_finite()
        && y.is_finite()
        && env_p.contains_point(&candidate)
        && env_q.contains_point(&candidate)
    {
        candidate
    } else {
        nearest_endpoint(p1, p2, q1, q2)
    }
}

/// The endpoint of either segment that lies closest to the other segment.
fn nearest_endpoint(
    p1: &Coordinate,
    p2: &Coordinate,
    q1: &Coordinate,
    q2: &Coordinate,
) -> Coordinate {
    let candidates = [
        (p1, point_segment_distance(p1, q1, q2)),
        (p2, point_segment_distance(p2, q1, q2)),
        (q1, point_segment_distance(q1, p1, p2)),
        (q2, point_segment_distance(q2, p1, p2)),
    ];
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    *best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn crossing_diagonals() {
        let result = segment_intersection(&c(0.0, 0.0), &c(10.0, 10.0), &c(0.0, 10.0), &c(10.0, 0.0));
        let LineIntersection::Point(p) = result else {
            panic!("expected a point, got {result:?}");
        };
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn disjoint_envelopes() {
        let result = segment_intersection(&c(0.0, 0.0), &c(1.0, 0.0), &c(2.0, 2.0), &c(3.0, 3.0));
        assert_eq!(result, LineIntersection::None);
        assert!(!result.has_intersection());
    }

    #[test]
    fn same_side_no_intersection() {
        let result = segment_intersection(&c(0.0, 0.0), &c(4.0, 0.0), &c(1.0, 1.0), &c(3.0, 2.0));
        assert_eq!(result, LineIntersection::None);
    }

    #[test]
    fn shared_endpoint_is_returned_exactly() {
        let shared = c(0.1, 0.7);
        let result = segment_intersection(&c(-3.3, 2.9), &shared, &shared, &c(5.5, -1.25));
        assert_eq!(result, LineIntersection::Point(shared));
    }

    #[test]
    fn endpoint_touching_interior() {
        let result = segment_intersection(&c(0.0, 0.0), &c(10.0, 0.0), &c(5.0, 0.0), &c(5.0, 5.0));
        assert_eq!(result, LineIntersection::Point(c(5.0, 0.0)));
    }

    #[test]
    fn collinear_partial_overlap() {
        let result = segment_intersection(&c(0.0, 0.0), &c(6.0, 0.0), &c(4.0, 0.0), &c(10.0, 0.0));
        assert_eq!(result, LineIntersection::Collinear(c(4.0, 0.0), c(6.0, 0.0)));
    }

    #[test]
    fn collinear_containment() {
        let result = segment_intersection(&c(0.0, 0.0), &c(10.0, 0.0), &c(2.0, 0.0), &c(3.0, 0.0));
        assert_eq!(result, LineIntersection::Collinear(c(2.0, 0.0), c(3.0, 0.0)));
    }

    #[test]
    fn collinear_touch_at_single_point() {
        let result = segment_intersection(&c(0.0, 0.0), &c(1.0, 0.0), &c(1.0, 0.0), &c(2.0, 0.0));
        assert_eq!(result, LineIntersection::Point(c(1.0, 0.0)));
    }

    #[test]
    fn collinear_disjoint() {
        let result = segment_intersection(&c(0.0, 0.0), &c(1.0, 0.0), &c(2.0, 0.0), &c(3.0, 0.0));
        assert_eq!(result, LineIntersection::None);
    }
}
