use std::cmp::Ordering;

use slotmap::Key;

use crate::geometry::Coordinate;
use crate::math::{orientation_index, quadrant, Orientation};

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in an edge graph.
    pub struct HalfEdgeId;
}

/// One directed half of a graph edge.
///
/// `sym` is the opposite half. `next` is the following edge along the
/// face on the left; the edges leaving a vertex form a ring in CCW order
/// reached by `sym.next`.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    origin: Coordinate,
    sym: HalfEdgeId,
    next: HalfEdgeId,
}

impl HalfEdge {
    pub(crate) fn new(origin: Coordinate) -> Self {
        Self {
            origin,
            sym: HalfEdgeId::null(),
            next: HalfEdgeId::null(),
        }
    }

    /// The vertex this half-edge leaves from.
    #[must_use]
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The opposite half-edge.
    #[must_use]
    pub fn sym(&self) -> HalfEdgeId {
        self.sym
    }

    /// The following half-edge.
    #[must_use]
    pub fn next(&self) -> HalfEdgeId {
        self.next
    }

    pub(crate) fn is_linked(&self) -> bool {
        !self.sym.is_null()
    }

    pub(crate) fn set_sym(&mut self, sym: HalfEdgeId) {
        self.sym = sym;
    }

    pub(crate) fn set_next(&mut self, next: HalfEdgeId) {
        self.next = next;
    }
}

/// Orders two edge directions leaving the same origin by angle, CCW from
/// the positive X axis.
///
/// Directions are compared by quadrant first; within a quadrant `a` is
/// greater when `a_dest` lies to the left of the ray towards `b_dest`.
/// Edges along the same ray are ordered by length, shorter first, so only
/// identical destinations compare `Equal`.
pub(crate) fn compare_angular_direction(
    origin: &Coordinate,
    a_dest: &Coordinate,
    b_dest: &Coordinate,
) -> Ordering {
    let (adx, ady) = (a_dest.x - origin.x, a_dest.y - origin.y);
    let (bdx, bdy) = (b_dest.x - origin.x, b_dest.y - origin.y);
    if adx == bdx && ady == bdy {
        return Ordering::Equal;
    }
    match quadrant(adx, ady).cmp(&quadrant(bdx, bdy)) {
        Ordering::Equal => match orientation_index(origin, b_dest, a_dest) {
            Orientation::CounterClockwise => Ordering::Greater,
            Orientation::Clockwise => Ordering::Less,
            Orientation::Collinear => {
                (adx * adx + ady * ady).total_cmp(&(bdx * bdx + bdy * bdy))
            }
        },
        other => other,
    }
}
