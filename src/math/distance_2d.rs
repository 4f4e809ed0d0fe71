use super::intersect_2d::{segment_intersection, LineIntersection};
use super::orientation::{orientation_index, Orientation};
use crate::geometry::{Coordinate, Envelope};

/// Returns the point of segment `a -> b` closest to `p`.
///
/// The projection is taken in the XY plane and clamped to the segment, not
/// the infinite line. `z` is interpolated along the segment when both ends
/// carry it. A zero-length segment returns `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> Coordinate {
    let ab = b.to_point2() - a.to_point2();
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return *a;
    }
    let ap = p.to_point2() - a.to_point2();
    let t = (ap.dot(&ab) / len_sq).clamp(0.0, 1.0);
    if t <= 0.0 {
        *a
    } else if t >= 1.0 {
        *b
    } else {
        a.lerp(b, t)
    }
}

/// Returns the minimum distance from `p` to the segment `a -> b`.
#[must_use]
pub fn point_segment_distance(p: &Coordinate, a: &Coordinate, b: &Coordinate) -> f64 {
    p.distance(&closest_point_on_segment(p, a, b))
}

/// Returns the closest pair of points between segments `a0 -> a1` and
/// `b0 -> b1`, the first lying on segment A and the second on segment B.
#[must_use]
pub fn closest_points_between_segments(
    a0: &Coordinate,
    a1: &Coordinate,
    b0: &Coordinate,
    b1: &Coordinate,
) -> (Coordinate, Coordinate) {
    match segment_intersection(a0, a1, b0, b1) {
        LineIntersection::Point(p) | LineIntersection::Collinear(p, _) => return (p, p),
        LineIntersection::None => {}
    }

    let candidates = [
        (*a0, closest_point_on_segment(a0, b0, b1)),
        (*a1, closest_point_on_segment(a1, b0, b1)),
        (closest_point_on_segment(b0, a0, a1), *b0),
        (closest_point_on_segment(b1, a0, a1), *b1),
    ];
    let mut best = candidates[0];
    let mut best_dist = best.0.distance(&best.1);
    for &(pa, pb) in &candidates[1..] {
        let dist = pa.distance(&pb);
        if dist < best_dist {
            best = (pa, pb);
            best_dist = dist;
        }
    }
    best
}

/// Location of a point relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingLocation {
    Interior,
    Boundary,
    Exterior,
}

/// Locates `p` relative to a closed ring using a crossing-number test.
///
/// The ring must repeat its first coordinate at the end. Points on any ring
/// segment are reported as [`RingLocation::Boundary`].
#[must_use]
pub fn locate_in_ring(p: &Coordinate, ring: &[Coordinate]) -> RingLocation {
    if ring.len() < 2 || !Envelope::of_points(ring).contains_point(p) {
        return RingLocation::Exterior;
    }

    let mut crossings = 0usize;
    for pair in ring.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if Envelope::of_segment(a, b).contains_point(p)
            && orientation_index(a, b, p) == Orientation::Collinear
        {
            return RingLocation::Boundary;
        }
        // Half-open rule on y so shared vertices are counted once.
        if (a.y > p.y) != (b.y > p.y) {
            let orientation = orientation_index(a, b, p);
            let upward = b.y > a.y;
            if (upward && orientation == Orientation::CounterClockwise)
                || (!upward && orientation == Orientation::Clockwise)
            {
                crossings += 1;
            }
        }
    }

    if crossings % 2 == 1 {
        RingLocation::Interior
    } else {
        RingLocation::Exterior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    // ── point_segment_distance tests ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_segment_distance(&c(1.0, 1.0), &c(0.0, 0.0), &c(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn segment_dist_clamps_to_endpoint() {
        // Projection onto the infinite line would give 0; the segment gives 1.
        let d = point_segment_distance(&c(-1.0, 0.0), &c(0.0, 0.0), &c(2.0, 0.0));
        assert_abs_diff_eq!(d, 1.0, epsilon = 1e-12);
        let d = point_segment_distance(&c(5.0, 4.0), &c(0.0, 0.0), &c(2.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn interior_projection_interpolates_z() {
        let a = Coordinate::new_xyz(0.0, 0.0, 0.0);
        let b = Coordinate::new_xyz(10.0, 0.0, 4.0);
        let p = closest_point_on_segment(&c(5.0, 2.0), &a, &b);
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 2.0, epsilon = 1e-12);
        // Without z on the segment the projection stays 2D.
        let p = closest_point_on_segment(&c(5.0, 2.0), &c(0.0, 0.0), &c(10.0, 0.0));
        assert_eq!(p, c(5.0, 0.0));
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_segment_distance(&c(3.0, 4.0), &c(0.0, 0.0), &c(0.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-12);
    }

    // ── closest_points_between_segments tests ──

    #[test]
    fn crossing_segments_have_zero_distance() {
        let (pa, pb) =
            closest_points_between_segments(&c(0.0, 0.0), &c(2.0, 2.0), &c(0.0, 2.0), &c(2.0, 0.0));
        assert_eq!(pa, pb);
        assert_abs_diff_eq!(pa.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_segments() {
        let (pa, pb) =
            closest_points_between_segments(&c(0.0, 0.0), &c(4.0, 0.0), &c(5.0, 3.0), &c(9.0, 3.0));
        assert_eq!(pa, c(4.0, 0.0));
        assert_eq!(pb, c(5.0, 3.0));
    }

    // ── locate_in_ring tests ──

    fn square() -> Vec<Coordinate> {
        vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 4.0), c(0.0, 0.0)]
    }

    #[test]
    fn ring_interior_boundary_exterior() {
        let ring = square();
        assert_eq!(locate_in_ring(&c(2.0, 2.0), &ring), RingLocation::Interior);
        assert_eq!(locate_in_ring(&c(4.0, 1.0), &ring), RingLocation::Boundary);
        assert_eq!(locate_in_ring(&c(0.0, 0.0), &ring), RingLocation::Boundary);
        assert_eq!(locate_in_ring(&c(5.0, 2.0), &ring), RingLocation::Exterior);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Diamond: the rays pass through the vertices (4, 0) and (3, 1).
        let ring = vec![c(2.0, 0.0), c(3.0, 1.0), c(4.0, 0.0), c(3.0, -1.0), c(2.0, 0.0)];
        assert_eq!(locate_in_ring(&c(3.0, 0.0), &ring), RingLocation::Interior);
        assert_eq!(locate_in_ring(&c(2.5, 1.0), &ring), RingLocation::Exterior);
    }
}
