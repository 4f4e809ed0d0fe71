use super::facet::{facets, Facet};
use super::PointPairDistance;
use crate::error::Result;
use crate::geometry::{Coordinate, Geometry};
use crate::math::distance_2d::closest_point_on_segment;

/// Computes the minimum distance from a point to the vertices and segments
/// of a geometry.
///
/// Polygons are measured to their rings, so a point inside a polygon gets
/// the distance to the nearest ring, not zero. The resulting pair holds the
/// closest point on the geometry first, then the query point.
pub struct DistanceToPoint<'a> {
    geometry: &'a Geometry,
    point: Coordinate,
}

impl<'a> DistanceToPoint<'a> {
    /// Creates a new `DistanceToPoint` query.
    #[must_use]
    pub fn new(geometry: &'a Geometry, point: Coordinate) -> Self {
        Self { geometry, point }
    }

    /// Executes the query. The result is unset for an empty geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the point or any vertex has a NaN X or Y.
    pub fn execute(&self) -> Result<PointPairDistance> {
        let mut result = PointPairDistance::new();
        compute_distance(self.geometry, &self.point, &mut result)?;
        Ok(result)
    }
}

/// Folds the distance from `point` to `geometry` into `result` with
/// minimum semantics.
///
/// # Errors
///
/// Returns an error if the point or any vertex has a NaN X or Y.
pub fn compute_distance(
    geometry: &Geometry,
    point: &Coordinate,
    result: &mut PointPairDistance,
) -> Result<()> {
    point.require_xy()?;
    nearest_facet_point(&facets(geometry)?, point, result);
    Ok(())
}

/// Folds the distance from `point` to each facet into `result`.
pub(crate) fn nearest_facet_point(facets: &[Facet], point: &Coordinate, result: &mut PointPairDistance) {
    for facet in facets {
        match *facet {
            Facet::Point(p) => result.set_minimum(p, *point),
            Facet::Segment(a, b) => {
                result.set_minimum(closest_point_on_segment(point, &a, &b), *point);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::LineString;
    use approx::assert_abs_diff_eq;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn projection_is_clamped_to_segment() {
        let line = Geometry::line_string(&[(0.0, 0.0), (10.0, 0.0)]);
        let result = DistanceToPoint::new(&line, c(13.0, 4.0)).execute().unwrap();
        assert_abs_diff_eq!(result.distance().unwrap(), 5.0, epsilon = 1e-12);
        assert_eq!(result.coordinates().unwrap(), (c(10.0, 0.0), c(13.0, 4.0)));

        let result = DistanceToPoint::new(&line, c(4.0, -3.0)).execute().unwrap();
        assert_abs_diff_eq!(result.distance().unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn three_dimensional_line_measures_with_z_everywhere() {
        let line = Geometry::LineString(LineString::new(vec![
            Coordinate::new_xyz(0.0, 0.0, 0.0),
            Coordinate::new_xyz(10.0, 0.0, 0.0),
        ]));
        for x in [0.0, 5.0, 10.0] {
            let query = Coordinate::new_xyz(x, 0.0, 3.0);
            let result = DistanceToPoint::new(&line, query).execute().unwrap();
            assert_abs_diff_eq!(result.distance().unwrap(), 3.0, epsilon = 1e-12);
        }
        let query = Coordinate::new_xyz(5.0, 4.0, 3.0);
        let result = DistanceToPoint::new(&line, query).execute().unwrap();
        assert_abs_diff_eq!(result.distance().unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn polygon_measures_to_nearest_ring() {
        let polygon = Geometry::polygon(
            &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)],
            &[&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)]],
        )
        .unwrap();
        let inside = DistanceToPoint::new(&polygon, c(2.0, 5.0)).execute().unwrap();
        assert_abs_diff_eq!(inside.distance().unwrap(), 2.0, epsilon = 1e-12);
        let in_hole = DistanceToPoint::new(&polygon, c(5.0, 5.0)).execute().unwrap();
        assert_abs_diff_eq!(in_hole.distance().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn collections_and_points() {
        let geometry = Geometry::GeometryCollection(vec![
            Geometry::point(100.0, 100.0),
            Geometry::MultiLineString(vec![LineString::from_xy(&[(0.0, 5.0), (10.0, 5.0)])]),
        ]);
        let result = DistanceToPoint::new(&geometry, c(99.0, 100.0)).execute().unwrap();
        assert_abs_diff_eq!(result.distance().unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_geometry_is_unset() {
        let result = DistanceToPoint::new(&Geometry::Point(None), c(0.0, 0.0))
            .execute()
            .unwrap();
        assert!(!result.is_set());
    }

    #[test]
    fn nan_query_point_is_an_error() {
        let line = Geometry::line_string(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(DistanceToPoint::new(&line, c(f64::NAN, 0.0)).execute().is_err());
    }
}
