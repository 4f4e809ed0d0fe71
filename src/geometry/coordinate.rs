use std::fmt;

use crate::error::GeometryError;
use crate::math::Point2;

/// A position with optional elevation (`z`) and measure (`m`).
///
/// Absent ordinates are stored as NaN. Equality treats two NaN ordinates as
/// equal, so coordinates without `z`/`m` compare by their X and Y values.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Coordinate {
    /// Creates a 2D coordinate; `z` and `m` are absent.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: f64::NAN,
            m: f64::NAN,
        }
    }

    /// Creates a 3D coordinate; `m` is absent.
    #[must_use]
    pub const fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, m: f64::NAN }
    }

    /// Number of ordinates present, counting X and Y always.
    #[must_use]
    pub fn axis_count(&self) -> usize {
        if !self.m.is_nan() {
            4
        } else if !self.z.is_nan() {
            3
        } else {
            2
        }
    }

    /// Returns `true` if X or Y is NaN.
    #[must_use]
    pub fn has_nan_xy(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Returns an error if X or Y is NaN.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NanCoordinate`] for a NaN X or Y ordinate.
    pub fn require_xy(&self) -> Result<(), GeometryError> {
        if self.has_nan_xy() {
            return Err(GeometryError::NanCoordinate {
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }

    /// Exact comparison of the X and Y ordinates.
    #[must_use]
    pub fn equals_2d(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Euclidean distance in the XY plane.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        nalgebra::distance(&self.to_point2(), &other.to_point2())
    }

    /// Euclidean distance including `z` when both coordinates carry it.
    #[must_use]
    pub fn distance_3d(&self, other: &Self) -> f64 {
        if self.z.is_nan() || other.z.is_nan() {
            return self.distance(other);
        }
        let dz = self.z - other.z;
        self.distance(other).hypot(dz)
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at
    /// `t = 1`), including `z` when both ends carry it.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
            m: f64::NAN,
        }
    }

    /// Converts to a nalgebra point, dropping `z` and `m`.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Bit pattern of the XY ordinates, usable as a hash key.
    ///
    /// `-0.0` is folded onto `0.0` so the key agrees with [`Self::equals_2d`].
    #[must_use]
    pub(crate) fn key_2d(&self) -> (u64, u64) {
        let fold = |v: f64| if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() };
        (fold(self.x), fold(self.y))
    }
}

fn same_ordinate(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        same_ordinate(self.x, other.x)
            && same_ordinate(self.y, other.y)
            && same_ordinate(self.z, other.z)
            && same_ordinate(self.m, other.m)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Coordinate {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.z.is_nan() {
            write!(f, "({} {})", self.x, self.y)
        } else {
            write!(f, "({} {} {})", self.x, self.y, self.z)
        }
    }
}
