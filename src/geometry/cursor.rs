use super::part::{Part, Ring};
use super::{Coordinate, Geometry};
use crate::error::{GeometryError, Result};

/// Position of a vertex: atomic part, ring within the part, vertex within
/// the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    pub part: usize,
    pub ring: usize,
    pub vertex: usize,
}

/// Position of a segment; segment `i` joins vertices `i` and `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId {
    pub part: usize,
    pub ring: usize,
    pub segment: usize,
}

impl SegmentId {
    /// Position of the segment's start vertex.
    #[must_use]
    pub fn start_vertex(&self) -> VertexId {
        VertexId {
            part: self.part,
            ring: self.ring,
            vertex: self.segment,
        }
    }

    /// Position of the segment's end vertex.
    #[must_use]
    pub fn end_vertex(&self) -> VertexId {
        VertexId {
            vertex: self.segment + 1,
            ..self.start_vertex()
        }
    }
}

/// A vertex visited by a [`VertexCursor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub coordinate: Coordinate,
}

/// A segment visited by a [`SegmentCursor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub id: SegmentId,
    pub start: Coordinate,
    pub end: Coordinate,
}

#[derive(Debug, Clone, Copy)]
struct Position<'a> {
    id: VertexId,
    part: Part<'a>,
    ring: Ring<'a>,
}

/// A forward cursor over the vertices of a geometry.
///
/// Parts are visited in declaration order, a polygon's shell before its
/// holes, and each ring from vertex 0. The cursor starts before the first
/// vertex. Cloning forks an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct VertexCursor<'a> {
    geometry: &'a Geometry,
    position: Option<Position<'a>>,
    exhausted: bool,
}

impl<'a> VertexCursor<'a> {
    /// Creates a cursor positioned before the first vertex.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            geometry,
            position: None,
            exhausted: false,
        }
    }

    /// Creates a cursor positioned at `id`, or `None` if it does not exist.
    #[must_use]
    pub fn at(geometry: &'a Geometry, id: VertexId) -> Option<Self> {
        let part = geometry.part(id.part)?;
        let ring = part.ring(id.ring)?;
        (id.vertex < ring.coordinates.len()).then_some(Self {
            geometry,
            position: Some(Position { id, part, ring }),
            exhausted: false,
        })
    }

    /// The vertex under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<Coordinate> {
        self.position
            .and_then(|p| p.ring.coordinates.get(p.id.vertex).copied())
    }

    /// The position under the cursor.
    #[must_use]
    pub fn vertex_id(&self) -> Option<VertexId> {
        self.position.map(|p| p.id)
    }

    /// Returns `true` if another vertex follows the current one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.exhausted && self.next_position().is_some()
    }

    /// Moves to the next vertex and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CursorExhausted`] once past the last vertex.
    pub fn advance(&mut self) -> Result<Coordinate> {
        if !self.exhausted {
            if let Some(next) = self.next_position() {
                self.position = Some(next);
                return Ok(next.ring.coordinates[next.id.vertex]);
            }
            self.exhausted = true;
        }
        Err(GeometryError::CursorExhausted.into())
    }

    /// Returns `true` if the cursor is on the first vertex of its ring.
    #[must_use]
    pub fn is_from(&self) -> bool {
        self.position.is_some_and(|p| p.id.vertex == 0)
    }

    /// Returns `true` if the cursor is on the last vertex of its ring.
    #[must_use]
    pub fn is_to(&self) -> bool {
        self.position
            .is_some_and(|p| p.id.vertex + 1 == p.ring.coordinates.len())
    }

    /// A cursor on the following vertex of the same ring.
    ///
    /// Closed rings wrap from the last vertex to vertex 1 (vertex 0 repeats
    /// the last one). Returns `None` at the end of an open line.
    #[must_use]
    pub fn line_next(&self) -> Option<Self> {
        let p = self.position?;
        let len = p.ring.coordinates.len();
        let vertex = if p.id.vertex + 1 < len {
            p.id.vertex + 1
        } else if p.ring.closed && len > 1 {
            1
        } else {
            return None;
        };
        Some(self.fork_at(p, vertex))
    }

    /// A cursor on the preceding vertex of the same ring.
    ///
    /// Closed rings wrap from vertex 0 to the vertex before the closing one.
    /// Returns `None` at the start of an open line.
    #[must_use]
    pub fn line_previous(&self) -> Option<Self> {
        let p = self.position?;
        let len = p.ring.coordinates.len();
        let vertex = if p.id.vertex > 0 {
            p.id.vertex - 1
        } else if p.ring.closed && len > 1 {
            len - 2
        } else {
            return None;
        };
        Some(self.fork_at(p, vertex))
    }

    fn fork_at(&self, p: Position<'a>, vertex: usize) -> Self {
        Self {
            geometry: self.geometry,
            position: Some(Position {
                id: VertexId { vertex, ..p.id },
                ..p
            }),
            exhausted: false,
        }
    }

    fn next_position(&self) -> Option<Position<'a>> {
        let (part_index, ring_index) = match self.position {
            Some(p) if p.id.vertex + 1 < p.ring.coordinates.len() => {
                return Some(Position {
                    id: VertexId {
                        vertex: p.id.vertex + 1,
                        ..p.id
                    },
                    ..p
                });
            }
            Some(p) => (p.id.part, p.id.ring + 1),
            None => (0, 0),
        };

        let mut part_index = part_index;
        let mut ring_index = ring_index;
        let mut part = match self.position {
            Some(p) if p.id.part == part_index => Some(p.part),
            _ => self.geometry.part(part_index),
        };
        while let Some(current) = part {
            while let Some(ring) = current.ring(ring_index) {
                if !ring.is_empty() {
                    return Some(Position {
                        id: VertexId {
                            part: part_index,
                            ring: ring_index,
                            vertex: 0,
                        },
                        part: current,
                        ring,
                    });
                }
                ring_index += 1;
            }
            part_index += 1;
            ring_index = 0;
            part = self.geometry.part(part_index);
        }
        None
    }
}

impl Iterator for VertexCursor<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let coordinate = self.advance().ok()?;
        let id = self.vertex_id()?;
        Some(Vertex { id, coordinate })
    }
}

impl std::iter::FusedIterator for VertexCursor<'_> {}

/// A forward cursor over the segments of every ring of a geometry, in the
/// same order as [`VertexCursor`].
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a> {
    vertices: VertexCursor<'a>,
    previous: Option<Vertex>,
}

impl<'a> SegmentCursor<'a> {
    /// Creates a cursor positioned before the first segment.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self {
            vertices: VertexCursor::new(geometry),
            previous: None,
        }
    }

    /// Returns `true` if the last yielded segment is the first of its ring.
    #[must_use]
    pub fn is_line_start(&self) -> bool {
        self.vertices.vertex_id().is_some_and(|id| id.vertex == 1)
    }

    /// Returns `true` if the last yielded segment is the last of its ring.
    #[must_use]
    pub fn is_line_end(&self) -> bool {
        self.vertices.vertex_id().is_some_and(|id| id.vertex > 0) && self.vertices.is_to()
    }
}

impl Iterator for SegmentCursor<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let vertex = self.vertices.next()?;
            let Some(previous) = self.previous.replace(vertex) else {
                continue;
            };
            if previous.id.part == vertex.id.part && previous.id.ring == vertex.id.ring {
                return Some(Segment {
                    id: SegmentId {
                        part: vertex.id.part,
                        ring: vertex.id.ring,
                        segment: previous.id.vertex,
                    },
                    start: previous.coordinate,
                    end: vertex.coordinate,
                });
            }
        }
    }
}

impl std::iter::FusedIterator for SegmentCursor<'_> {}
