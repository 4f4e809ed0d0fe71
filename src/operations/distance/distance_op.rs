use super::facet::{facets, Facet};
use super::PointPairDistance;
use crate::error::Result;
use crate::geometry::{Coordinate, Geometry, Part};
use crate::math::distance_2d::{
    closest_point_on_segment, closest_points_between_segments, locate_in_ring, RingLocation,
};

/// Minimum distance between two geometries.
///
/// Every point and segment of one geometry is compared with every point and
/// segment of the other, so the cost is the product of their sizes. A
/// geometry with a point inside a polygon of the other is at distance zero.
pub struct DistanceOp<'a> {
    a: &'a Geometry,
    b: &'a Geometry,
}

impl<'a> DistanceOp<'a> {
    /// Creates a new `DistanceOp` query.
    #[must_use]
    pub fn new(a: &'a Geometry, b: &'a Geometry) -> Self {
        Self { a, b }
    }

    /// The nearest points, first on `a` then on `b`. Unset if either
    /// geometry is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex has a NaN X or Y.
    pub fn nearest_points(&self) -> Result<PointPairDistance> {
        let facets_a = facets(self.a)?;
        let facets_b = facets(self.b)?;
        let mut result = PointPairDistance::new();
        if facets_a.is_empty() || facets_b.is_empty() {
            return Ok(result);
        }

        if let Some(p) = point_inside_polygon(self.a, self.b) {
            result.set(p, p);
            return Ok(result);
        }
        if let Some(p) = point_inside_polygon(self.b, self.a) {
            result.set(p, p);
            return Ok(result);
        }

        for fa in &facets_a {
            for fb in &facets_b {
                let (pa, pb) = match (*fa, *fb) {
                    (Facet::Point(pa), Facet::Point(pb)) => (pa, pb),
                    (Facet::Point(pa), Facet::Segment(b0, b1)) => {
                        (pa, closest_point_on_segment(&pa, &b0, &b1))
                    }
                    (Facet::Segment(a0, a1), Facet::Point(pb)) => {
                        (closest_point_on_segment(&pb, &a0, &a1), pb)
                    }
                    (Facet::Segment(a0, a1), Facet::Segment(b0, b1)) => {
                        closest_points_between_segments(&a0, &a1, &b0, &b1)
                    }
                };
                result.set_minimum(pa, pb);
                if result.distance() == Some(0.0) {
                    return Ok(result);
                }
            }
        }
        Ok(result)
    }

    /// The minimum distance, or `None` if either geometry is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex has a NaN X or Y.
    pub fn distance(&self) -> Result<Option<f64>> {
        Ok(self.nearest_points()?.distance())
    }

    /// Returns `true` if the geometries are within `distance` of each other.
    ///
    /// # Errors
    ///
    /// Returns an error if any vertex has a NaN X or Y.
    pub fn is_within_distance(&self, distance: f64) -> Result<bool> {
        if self.a.envelope().is_empty() || self.b.envelope().is_empty() {
            return Ok(false);
        }
        Ok(self.distance()?.is_some_and(|d| d <= distance))
    }
}

/// A vertex of `points_from` lying inside or on a polygon of `polygons_in`.
///
/// One vertex per part is tested; a part that is not inside but crosses the
/// polygon is caught by the segment comparison instead.
fn point_inside_polygon(points_from: &Geometry, polygons_in: &Geometry) -> Option<Coordinate> {
    let polygons: Vec<Part<'_>> = polygons_in
        .parts()
        .into_iter()
        .filter(|part| matches!(part, Part::Polygon(_)))
        .collect();
    if polygons.is_empty() {
        return None;
    }

    points_from
        .parts()
        .into_iter()
        .filter_map(|part| part.ring(0)?.coordinates.first().copied())
        .find(|p| polygons.iter().any(|polygon| is_in_polygon(p, *polygon)))
}

fn is_in_polygon(p: &Coordinate, polygon: Part<'_>) -> bool {
    let mut rings = polygon.rings();
    let Some(shell) = rings.next() else {
        return false;
    };
    if shell.is_empty() || locate_in_ring(p, shell.coordinates) == RingLocation::Exterior {
        return false;
    }
    rings.all(|hole| locate_in_ring(p, hole.coordinates) != RingLocation::Interior)
}
