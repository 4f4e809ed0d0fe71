use crate::geometry::Coordinate;

/// Accumulates the best pair of points seen so far and their distance.
///
/// Distance uses `z` when both points carry it. A pair is installed only if
/// none is stored yet or it strictly improves on the stored one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointPairDistance {
    pair: Option<(Coordinate, Coordinate)>,
    distance: f64,
}

impl PointPairDistance {
    /// Creates an unset accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears back to unset.
    pub fn initialize(&mut self) {
        *self = Self::default();
    }

    /// Stores `(a, b)` unconditionally.
    pub fn set(&mut self, a: Coordinate, b: Coordinate) {
        self.distance = a.distance_3d(&b);
        self.pair = Some((a, b));
    }

    /// Stores `(a, b)` if unset or closer than the current pair.
    pub fn set_minimum(&mut self, a: Coordinate, b: Coordinate) {
        let distance = a.distance_3d(&b);
        if self.pair.is_none() || distance < self.distance {
            self.pair = Some((a, b));
            self.distance = distance;
        }
    }

    /// Stores `(a, b)` if unset or farther than the current pair.
    pub fn set_maximum(&mut self, a: Coordinate, b: Coordinate) {
        let distance = a.distance_3d(&b);
        if self.pair.is_none() || distance > self.distance {
            self.pair = Some((a, b));
            self.distance = distance;
        }
    }

    /// Merges `other` with minimum semantics. An unset `other` is ignored.
    pub fn set_minimum_from(&mut self, other: &Self) {
        if let Some((a, b)) = other.pair {
            self.set_minimum(a, b);
        }
    }

    /// Merges `other` with maximum semantics. An unset `other` is ignored.
    pub fn set_maximum_from(&mut self, other: &Self) {
        if let Some((a, b)) = other.pair {
            self.set_maximum(a, b);
        }
    }

    /// Returns `true` once a pair has been stored.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.pair.is_some()
    }

    /// Distance between the stored pair.
    #[must_use]
    pub fn distance(&self) -> Option<f64> {
        self.pair.map(|_| self.distance)
    }

    /// The stored pair.
    #[must_use]
    pub fn coordinates(&self) -> Option<(Coordinate, Coordinate)> {
        self.pair
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn starts_unset() {
        let ppd = PointPairDistance::new();
        assert!(!ppd.is_set());
        assert!(ppd.distance().is_none());
        assert!(ppd.coordinates().is_none());
    }

    #[test]
    fn first_minimum_always_installs() {
        let mut ppd = PointPairDistance::new();
        ppd.set_minimum(c(0.0, 0.0), c(100.0, 0.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 100.0);
        ppd.set_minimum(c(0.0, 0.0), c(200.0, 0.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 100.0);
        ppd.set_minimum(c(0.0, 0.0), c(3.0, 4.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 5.0);
        assert_eq!(ppd.coordinates(), Some((c(0.0, 0.0), c(3.0, 4.0))));

        ppd.initialize();
        assert!(!ppd.is_set());
        ppd.set_minimum(c(0.0, 0.0), c(50.0, 0.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 50.0);
    }

    #[test]
    fn equal_distance_keeps_first_pair() {
        let mut ppd = PointPairDistance::new();
        ppd.set_minimum(c(0.0, 0.0), c(1.0, 0.0));
        ppd.set_minimum(c(0.0, 0.0), c(0.0, 1.0));
        assert_eq!(ppd.coordinates().unwrap().1, c(1.0, 0.0));
    }

    #[test]
    fn maximum_and_merge() {
        let mut max = PointPairDistance::new();
        max.set_maximum(c(0.0, 0.0), c(1.0, 0.0));
        max.set_maximum(c(0.0, 0.0), c(0.5, 0.0));
        assert_abs_diff_eq!(max.distance().unwrap(), 1.0);

        let mut other = PointPairDistance::new();
        other.set(c(0.0, 0.0), c(7.0, 0.0));
        max.set_maximum_from(&other);
        assert_abs_diff_eq!(max.distance().unwrap(), 7.0);

        let mut min = PointPairDistance::new();
        min.set_minimum_from(&PointPairDistance::new());
        assert!(!min.is_set());
        min.set_minimum_from(&other);
        assert_abs_diff_eq!(min.distance().unwrap(), 7.0);
    }

    #[test]
    fn uses_z_when_both_points_carry_it() {
        let mut ppd = PointPairDistance::new();
        ppd.set(Coordinate::new_xyz(0.0, 0.0, 0.0), Coordinate::new_xyz(0.0, 0.0, 2.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 2.0);
        ppd.set(Coordinate::new(0.0, 0.0), Coordinate::new_xyz(0.0, 0.0, 2.0));
        assert_abs_diff_eq!(ppd.distance().unwrap(), 0.0);
    }
}
