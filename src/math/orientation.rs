use crate::geometry::Coordinate;

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// Returns `-1`, `0` or `1` for clockwise, collinear and counter-clockwise.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::Clockwise => -1,
            Self::Collinear => 0,
            Self::CounterClockwise => 1,
        }
    }
}

/// Computes the orientation of `q` relative to the directed line `p1 -> p2`.
///
/// Uses adaptive-precision arithmetic, so the sign is exact for all finite
/// inputs.
#[must_use]
pub fn orientation_index(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> Orientation {
    let det = signed_area(p1, p2, q);
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Twice the signed area of the triangle `(p1, p2, q)`, computed robustly.
///
/// Positive when `q` lies to the left of `p1 -> p2`.
#[must_use]
pub fn signed_area(p1: &Coordinate, p2: &Coordinate, q: &Coordinate) -> f64 {
    robust::orient2d(
        robust::Coord { x: p1.x, y: p1.y },
        robust::Coord { x: p2.x, y: p2.y },
        robust::Coord { x: q.x, y: q.y },
    )
}

/// Quadrant of a direction vector, numbered counter-clockwise from +X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Quadrant {
    NorthEast = 0,
    NorthWest = 1,
    SouthWest = 2,
    SouthEast = 3,
}

/// Returns the quadrant of the direction `(dx, dy)`.
///
/// Axis-aligned directions fall into the quadrant counter-clockwise of
/// them, except `-Y` which is `SouthEast`.
#[must_use]
pub fn quadrant(dx: f64, dy: f64) -> Quadrant {
    if dx >= 0.0 {
        if dy >= 0.0 {
            Quadrant::NorthEast
        } else {
            Quadrant::SouthEast
        }
    } else if dy >= 0.0 {
        Quadrant::NorthWest
    } else {
        Quadrant::SouthWest
    }
}
