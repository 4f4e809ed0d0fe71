use std::collections::HashSet;

use tracing::{debug, trace};

use super::validation_error::GeometryValidationError;
use crate::error::Result;
use crate::geometry::{Coordinate, Envelope, Geometry, Part, SegmentId, VertexId};
use crate::index::SpatialIndexBuilder;
use crate::math::{segment_intersection, LineIntersection};

/// Options for [`IsSimple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplicityOptions {
    /// Stop at the first detected condition. Default: false
    pub short_circuit: bool,
}

impl SimplicityOptions {
    /// Collect every condition.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self::default()
    }

    /// Stop at the first condition.
    #[must_use]
    pub fn first_error() -> Self {
        Self {
            short_circuit: true,
        }
    }

    /// Set the short-circuit option.
    #[must_use]
    pub const fn with_short_circuit(mut self, short_circuit: bool) -> Self {
        self.short_circuit = short_circuit;
        self
    }
}

/// Checks whether a geometry is simple in the OGC sense.
///
/// Points are simple unless two coincide. Lines are simple unless they
/// intersect themselves or each other anywhere except:
/// - the shared vertex of consecutive segments,
/// - the closing vertex of a closed line,
/// - the endpoints of two distinct open lines.
///
/// Each polygon ring is checked on its own; collection members are checked
/// independently.
pub struct IsSimple<'a> {
    geometry: &'a Geometry,
    options: SimplicityOptions,
}

impl<'a> IsSimple<'a> {
    /// Creates a new `IsSimple` check with default options.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            options: SimplicityOptions::default(),
        }
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: SimplicityOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the check and returns the detected conditions in traversal
    /// order. An empty list means the geometry is simple.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment index cannot be built.
    pub fn execute(&self) -> Result<Vec<GeometryValidationError>> {
        let mut checker = Checker::new(self.options.short_circuit);
        checker.check_geometry(self.geometry, 0)?;
        debug!(
            geometry_type = %self.geometry.geometry_type(),
            errors = checker.errors.len(),
            "simplicity check finished"
        );
        Ok(checker.errors)
    }

    /// Returns `true` if the geometry is simple, stopping at the first
    /// condition found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment index cannot be built.
    pub fn is_simple(&self) -> Result<bool> {
        let mut checker = Checker::new(true);
        checker.check_geometry(self.geometry, 0)?;
        Ok(checker.errors.is_empty())
    }
}

/// A vertex sequence checked as one line.
struct Line<'a> {
    part: usize,
    ring: usize,
    coordinates: &'a [Coordinate],
    closed: bool,
}

/// A non-degenerate segment of a [`Line`].
struct SegmentRecord {
    id: SegmentId,
    start: Coordinate,
    end: Coordinate,
    /// Index of the line within the checked group.
    line: usize,
    /// Position among the line's non-degenerate segments.
    ordinal: usize,
}

impl SegmentRecord {
    fn envelope(&self) -> Envelope {
        Envelope::of_segment(&self.start, &self.end)
    }

    fn has_endpoint(&self, p: &Coordinate) -> bool {
        self.start.equals_2d(p) || self.end.equals_2d(p)
    }

    fn same_endpoints(&self, other: &Self) -> bool {
        (self.start.equals_2d(&other.start) && self.end.equals_2d(&other.end))
            || (self.start.equals_2d(&other.end) && self.end.equals_2d(&other.start))
    }

    /// Returns `true` if a collinear `other` lies entirely on this segment.
    fn contains(&self, other: &Self) -> bool {
        let env = self.envelope();
        env.contains_point(&other.start) && env.contains_point(&other.end)
    }
}

struct Checker {
    short_circuit: bool,
    errors: Vec<GeometryValidationError>,
}

impl Checker {
    fn new(short_circuit: bool) -> Self {
        Self {
            short_circuit,
            errors: Vec::new(),
        }
    }

    fn is_done(&self) -> bool {
        self.short_circuit && !self.errors.is_empty()
    }

    fn report(&mut self, error: GeometryValidationError) {
        trace!(%error, "geometry is not simple");
        self.errors.push(error);
    }

    fn check_geometry(&mut self, geometry: &Geometry, first_part: usize) -> Result<()> {
        match geometry {
            Geometry::Point(_) | Geometry::MultiPoint(_) => {
                self.check_points(&geometry.parts(), first_part);
                Ok(())
            }
            Geometry::LineString(_) | Geometry::LinearRing(_) | Geometry::MultiLineString(_) => {
                let lines: Vec<Line<'_>> = geometry
                    .parts()
                    .into_iter()
                    .enumerate()
                    .filter_map(|(i, part)| {
                        part.ring(0).map(|ring| Line {
                            part: first_part + i,
                            ring: 0,
                            coordinates: ring.coordinates,
                            closed: ring.closed,
                        })
                    })
                    .collect();
                self.check_lines(&lines)
            }
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {
                for (i, part) in geometry.parts().into_iter().enumerate() {
                    for (r, ring) in part.rings().enumerate() {
                        if self.is_done() {
                            return Ok(());
                        }
                        let line = Line {
                            part: first_part + i,
                            ring: r,
                            coordinates: ring.coordinates,
                            closed: ring.closed,
                        };
                        self.check_lines(std::slice::from_ref(&line))?;
                    }
                }
                Ok(())
            }
            Geometry::GeometryCollection(members) => {
                let mut offset = first_part;
                for member in members {
                    if self.is_done() {
                        break;
                    }
                    self.check_geometry(member, offset)?;
                    offset += member.part_count();
                }
                Ok(())
            }
        }
    }

    fn check_points(&mut self, parts: &[Part<'_>], first_part: usize) {
        let mut seen = HashSet::new();
        for (i, part) in parts.iter().enumerate() {
            let Part::Point(coordinates) = part else {
                continue;
            };
            let Some(point) = coordinates.first() else {
                continue;
            };
            let vertex = VertexId {
                part: first_part + i,
                ring: 0,
                vertex: 0,
            };
            if point.has_nan_xy() {
                self.report(GeometryValidationError::CoordinateNaN {
                    point: *point,
                    vertex,
                });
            } else if !seen.insert(point.key_2d()) {
                self.report(GeometryValidationError::DuplicateVertex {
                    point: *point,
                    vertex,
                });
            }
            if self.is_done() {
                return;
            }
        }
    }

    fn check_lines(&mut self, lines: &[Line<'_>]) -> Result<()> {
        if self.check_nan(lines) {
            return Ok(());
        }

        let mut records = Vec::new();
        let mut segment_counts = Vec::with_capacity(lines.len());
        for (line_index, line) in lines.iter().enumerate() {
            let mut ordinal = 0;
            for (s, pair) in line.coordinates.windows(2).enumerate() {
                let id = SegmentId {
                    part: line.part,
                    ring: line.ring,
                    segment: s,
                };
                if pair[0].equals_2d(&pair[1]) {
                    self.report(GeometryValidationError::DuplicateVertex {
                        point: pair[0],
                        vertex: id.start_vertex(),
                    });
                    if self.is_done() {
                        return Ok(());
                    }
                    continue;
                }
                records.push(SegmentRecord {
                    id,
                    start: pair[0],
                    end: pair[1],
                    line: line_index,
                    ordinal,
                });
                ordinal += 1;
            }
            segment_counts.push(ordinal);
        }

        let mut builder = SpatialIndexBuilder::with_capacity(records.len());
        for record in &records {
            builder.insert(record.envelope());
        }
        let index = builder.build()?;

        let mut reported_vertices = HashSet::new();
        for (i, a) in records.iter().enumerate() {
            for j in index.query(&a.envelope()) {
                // Each pair is evaluated once, from its lower-ordered segment.
                if j <= i {
                    continue;
                }
                let b = &records[j];
                let Some(error) = classify(lines, &segment_counts, a, b) else {
                    continue;
                };
                if matches!(error, GeometryValidationError::SelfIntersectionVertex { .. })
                    && !reported_vertices.insert(error.point().key_2d())
                {
                    continue;
                }
                self.report(error);
                if self.is_done() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Reports every NaN vertex; returns `true` if any was found.
    fn check_nan(&mut self, lines: &[Line<'_>]) -> bool {
        let mut found = false;
        for line in lines {
            for (v, point) in line.coordinates.iter().enumerate() {
                if point.has_nan_xy() {
                    found = true;
                    self.report(GeometryValidationError::CoordinateNaN {
                        point: *point,
                        vertex: VertexId {
                            part: line.part,
                            ring: line.ring,
                            vertex: v,
                        },
                    });
                    if self.is_done() {
                        return true;
                    }
                }
            }
        }
        found
    }
}

fn classify(
    lines: &[Line<'_>],
    segment_counts: &[usize],
    a: &SegmentRecord,
    b: &SegmentRecord,
) -> Option<GeometryValidationError> {
    let segments = (a.id, b.id);
    if a.same_endpoints(b) {
        return Some(GeometryValidationError::SelfOverlapSegment {
            point: a.start,
            end: a.end,
            segments,
        });
    }

    match segment_intersection(&a.start, &a.end, &b.start, &b.end) {
        LineIntersection::None => None,
        LineIntersection::Collinear(point, end) => {
            if a.contains(b) || b.contains(a) {
                Some(GeometryValidationError::SelfOverlapSegment {
                    point,
                    end,
                    segments,
                })
            } else {
                Some(GeometryValidationError::SelfOverlapLineSegment {
                    point,
                    end,
                    segments,
                })
            }
        }
        LineIntersection::Point(point) => {
            if is_allowed_touch(lines, segment_counts, a, b, &point) {
                None
            } else if a.has_endpoint(&point) || b.has_endpoint(&point) {
                Some(GeometryValidationError::SelfIntersectionVertex { point, segments })
            } else {
                Some(GeometryValidationError::SelfIntersectionPoint { point, segments })
            }
        }
    }
}

/// Touches permitted under the endpoint boundary rule. `a` precedes `b` in
/// segment order.
fn is_allowed_touch(
    lines: &[Line<'_>],
    segment_counts: &[usize],
    a: &SegmentRecord,
    b: &SegmentRecord,
    p: &Coordinate,
) -> bool {
    if a.line == b.line {
        if b.ordinal == a.ordinal + 1 && a.end.equals_2d(p) {
            return true;
        }
        let last = segment_counts[a.line] - 1;
        return lines[a.line].closed && a.ordinal == 0 && b.ordinal == last && a.start.equals_2d(p);
    }

    let is_line_endpoint = |record: &SegmentRecord| {
        let last = segment_counts[record.line] - 1;
        (record.ordinal == 0 && record.start.equals_2d(p))
            || (record.ordinal == last && record.end.equals_2d(p))
    };
    !lines[a.line].closed && !lines[b.line].closed && is_line_endpoint(a) && is_line_endpoint(b)
}
