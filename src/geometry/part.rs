use super::{Coordinate, Geometry, LineString, LinearRing, Polygon};

/// A borrowed atomic member of a geometry.
#[derive(Debug, Clone, Copy)]
pub enum Part<'a> {
    /// A point; the slice holds zero (empty point) or one coordinate.
    Point(&'a [Coordinate]),
    LineString(&'a LineString),
    LinearRing(&'a LinearRing),
    Polygon(&'a Polygon),
}

/// A borrowed vertex sequence of a part.
#[derive(Debug, Clone, Copy)]
pub struct Ring<'a> {
    pub coordinates: &'a [Coordinate],
    /// `true` if the sequence wraps around (first vertex equals last).
    pub closed: bool,
}

impl<'a> Ring<'a> {
    /// Number of segments between adjacent vertices.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    fn of_ring(ring: &'a LinearRing) -> Self {
        Self {
            coordinates: ring.coordinates(),
            closed: !ring.is_empty(),
        }
    }
}

impl<'a> Part<'a> {
    /// Number of rings: a polygon's shell and holes, otherwise one.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        match self {
            Self::Polygon(polygon) => polygon.ring_count(),
            _ => 1,
        }
    }

    /// Ring `index` of this part.
    #[must_use]
    pub fn ring(&self, index: usize) -> Option<Ring<'a>> {
        match *self {
            Self::Point(coordinates) => (index == 0).then_some(Ring {
                coordinates,
                closed: false,
            }),
            Self::LineString(line) => (index == 0).then(|| Ring {
                coordinates: line.coordinates(),
                closed: line.is_closed(),
            }),
            Self::LinearRing(ring) => (index == 0).then(|| Ring::of_ring(ring)),
            Self::Polygon(polygon) => polygon.ring(index).map(Ring::of_ring),
        }
    }

    /// Iterates the rings in order.
    pub fn rings(self) -> impl Iterator<Item = Ring<'a>> {
        (0..self.ring_count()).filter_map(move |i| self.ring(i))
    }

    /// Returns `true` for line strings and linear rings.
    #[must_use]
    pub fn is_lineal(&self) -> bool {
        matches!(self, Self::LineString(_) | Self::LinearRing(_))
    }
}

pub(crate) fn collect_parts<'a>(geometry: &'a Geometry, out: &mut Vec<Part<'a>>) {
    match geometry {
        Geometry::GeometryCollection(members) => {
            for member in members {
                collect_parts(member, out);
            }
        }
        Geometry::MultiPoint(points) => {
            out.extend(points.iter().map(|p| Part::Point(std::slice::from_ref(p))));
        }
        Geometry::MultiLineString(lines) => out.extend(lines.iter().map(Part::LineString)),
        Geometry::MultiPolygon(polygons) => out.extend(polygons.iter().map(Part::Polygon)),
        single => out.extend(single.part(0)),
    }
}

/// Returns the vertex at `id`, or `None` if the position does not exist.
#[must_use]
pub fn vertex_at(geometry: &Geometry, id: super::VertexId) -> Option<Coordinate> {
    geometry
        .part(id.part)?
        .ring(id.ring)?
        .coordinates
        .get(id.vertex)
        .copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::VertexId;

    #[test]
    fn polygon_part_exposes_shell_then_holes() {
        let shell = [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
        let hole = [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)];
        let geometry = Geometry::polygon(&shell, &[&hole]).unwrap();
        let part = geometry.part(0).unwrap();
        assert_eq!(part.ring_count(), 2);
        let rings: Vec<Ring<'_>> = part.rings().collect();
        assert!(rings.iter().all(|r| r.closed));
        assert_eq!(rings[1].segment_count(), 3);
        assert!(!part.is_lineal());
    }

    #[test]
    fn open_line_ring_is_not_closed() {
        let geometry = Geometry::line_string(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let ring = geometry.part(0).unwrap().ring(0).unwrap();
        assert!(!ring.closed);
        assert_eq!(ring.segment_count(), 2);
        assert!(geometry.part(0).unwrap().ring(1).is_none());
    }

    #[test]
    fn vertex_lookup_by_position() {
        let geometry = Geometry::MultiPoint(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
        let id = VertexId {
            part: 1,
            ring: 0,
            vertex: 0,
        };
        assert_eq!(vertex_at(&geometry, id), Some(Coordinate::new(3.0, 4.0)));
        assert_eq!(vertex_at(&geometry, VertexId { part: 2, ..id }), None);
        assert_eq!(vertex_at(&geometry, VertexId { vertex: 1, ..id }), None);
    }

    #[test]
    fn empty_point_has_an_empty_ring() {
        let geometry = Geometry::Point(None);
        let ring = geometry.part(0).unwrap().ring(0).unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.segment_count(), 0);
    }
}
