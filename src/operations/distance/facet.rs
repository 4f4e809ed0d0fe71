use crate::error::Result;
use crate::geometry::{Coordinate, Geometry, Part};

/// The smallest pieces distance is measured against.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Facet {
    Point(Coordinate),
    Segment(Coordinate, Coordinate),
}

/// Splits a geometry into points and segments, rejecting NaN vertices.
///
/// A line with a single vertex contributes that vertex as a point.
pub(crate) fn facets(geometry: &Geometry) -> Result<Vec<Facet>> {
    let mut out = Vec::new();
    for part in geometry.parts() {
        for ring in part.rings() {
            for c in ring.coordinates {
                c.require_xy()?;
            }
            if matches!(part, Part::Point(_)) || ring.coordinates.len() == 1 {
                out.extend(ring.coordinates.iter().copied().map(Facet::Point));
            } else {
                out.extend(
                    ring.coordinates
                        .windows(2)
                        .map(|pair| Facet::Segment(pair[0], pair[1])),
                );
            }
        }
    }
    Ok(out)
}
