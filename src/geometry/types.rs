use std::fmt;

use super::part::{collect_parts, Part};
use super::{Coordinate, Envelope, SegmentCursor, VertexCursor};
use crate::error::GeometryError;

/// An ordered sequence of coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    coordinates: Vec<Coordinate>,
}

impl LineString {
    /// Creates a line string from its vertices.
    #[must_use]
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }

    /// Creates a 2D line string from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().copied().map(Coordinate::from).collect())
    }

    /// Returns the vertices.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` if the line has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns `true` if the line has at least two vertices and its first and
    /// last vertices are equal in 2D.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        is_closed(&self.coordinates)
    }
}

fn is_closed(coordinates: &[Coordinate]) -> bool {
    match (coordinates.first(), coordinates.last()) {
        (Some(first), Some(last)) if coordinates.len() >= 2 => first.equals_2d(last),
        _ => false,
    }
}

/// A closed line string: either empty or at least four vertices with the
/// first equal to the last.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LinearRing {
    coordinates: Vec<Coordinate>,
}

impl LinearRing {
    /// Minimum vertex count of a non-empty ring.
    pub const MIN_VERTICES: usize = 4;

    /// Creates a ring, validating closure and vertex count.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRing`] if a non-empty ring has fewer
    /// than four vertices or is not closed.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self, GeometryError> {
        if !coordinates.is_empty() {
            if coordinates.len() < Self::MIN_VERTICES {
                return Err(GeometryError::InvalidRing(format!(
                    "{} vertices, at least {} required",
                    coordinates.len(),
                    Self::MIN_VERTICES
                )));
            }
            if !is_closed(&coordinates) {
                return Err(GeometryError::InvalidRing(
                    "first and last vertices differ".to_owned(),
                ));
            }
        }
        Ok(Self { coordinates })
    }

    /// Creates a 2D ring from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`LinearRing::new`].
    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(points.iter().copied().map(Coordinate::from).collect())
    }

    /// Returns the vertices, including the closing vertex.
    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// A polygon: one exterior shell and any number of holes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    shell: LinearRing,
    holes: Vec<LinearRing>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    #[must_use]
    pub fn new(shell: LinearRing, holes: Vec<LinearRing>) -> Self {
        Self { shell, holes }
    }

    /// Returns the exterior ring.
    #[must_use]
    pub fn shell(&self) -> &LinearRing {
        &self.shell
    }

    /// Returns the interior rings in declaration order.
    #[must_use]
    pub fn holes(&self) -> &[LinearRing] {
        &self.holes
    }

    /// Number of rings, shell included.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        1 + self.holes.len()
    }

    /// Ring `index`: `0` is the shell, `1..` are the holes.
    #[must_use]
    pub fn ring(&self, index: usize) -> Option<&LinearRing> {
        if index == 0 {
            Some(&self.shell)
        } else {
            self.holes.get(index - 1)
        }
    }

    /// Iterates the shell, then each hole.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing> {
        std::iter::once(&self.shell).chain(&self.holes)
    }

    /// Returns `true` if the shell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shell.is_empty()
    }
}

/// Type tag of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryType {
    Point,
    LineString,
    LinearRing,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::LinearRing => "LinearRing",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

/// An immutable planar geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Option<Coordinate>),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(Vec<Coordinate>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// A 2D point.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self::Point(Some(Coordinate::new(x, y)))
    }

    /// A 2D line string from `(x, y)` pairs.
    #[must_use]
    pub fn line_string(points: &[(f64, f64)]) -> Self {
        Self::LineString(LineString::from_xy(points))
    }

    /// A 2D polygon from `(x, y)` rings.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRing`] if any ring is invalid.
    pub fn polygon(shell: &[(f64, f64)], holes: &[&[(f64, f64)]]) -> Result<Self, GeometryError> {
        let shell = LinearRing::from_xy(shell)?;
        let holes = holes
            .iter()
            .map(|hole| LinearRing::from_xy(hole))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Polygon(Polygon::new(shell, holes)))
    }

    /// Returns the type tag.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::LineString(_) => GeometryType::LineString,
            Self::LinearRing(_) => GeometryType::LinearRing,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
            Self::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns `true` if the geometry has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(point) => point.is_none(),
            Self::LineString(line) => line.is_empty(),
            Self::LinearRing(ring) => ring.is_empty(),
            Self::Polygon(polygon) => polygon.is_empty(),
            Self::MultiPoint(points) => points.is_empty(),
            Self::MultiLineString(lines) => lines.iter().all(LineString::is_empty),
            Self::MultiPolygon(polygons) => polygons.iter().all(Polygon::is_empty),
            Self::GeometryCollection(members) => members.iter().all(Self::is_empty),
        }
    }

    /// The largest number of ordinates carried by any vertex (at least 2).
    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.vertices()
            .map(|v| v.coordinate.axis_count())
            .max()
            .unwrap_or(2)
    }

    /// Bounding box of all vertices.
    #[must_use]
    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::empty();
        for part in self.parts() {
            for ring in part.rings() {
                env.expand_to_include_envelope(&Envelope::of_points(ring.coordinates));
            }
        }
        env
    }

    /// Number of atomic parts (points, lines, rings and polygons), counting
    /// the members of nested collections depth-first.
    #[must_use]
    pub fn part_count(&self) -> usize {
        match self {
            Self::Point(_) | Self::LineString(_) | Self::LinearRing(_) | Self::Polygon(_) => 1,
            Self::MultiPoint(points) => points.len(),
            Self::MultiLineString(lines) => lines.len(),
            Self::MultiPolygon(polygons) => polygons.len(),
            Self::GeometryCollection(members) => members.iter().map(Self::part_count).sum(),
        }
    }

    /// Atomic part `index` in depth-first order.
    #[must_use]
    pub fn part(&self, index: usize) -> Option<Part<'_>> {
        match self {
            Self::Point(point) => (index == 0).then(|| Part::Point(point.as_slice())),
            Self::LineString(line) => (index == 0).then_some(Part::LineString(line)),
            Self::LinearRing(ring) => (index == 0).then_some(Part::LinearRing(ring)),
            Self::Polygon(polygon) => (index == 0).then_some(Part::Polygon(polygon)),
            Self::MultiPoint(points) => points
                .get(index)
                .map(|p| Part::Point(std::slice::from_ref(p))),
            Self::MultiLineString(lines) => lines.get(index).map(Part::LineString),
            Self::MultiPolygon(polygons) => polygons.get(index).map(Part::Polygon),
            Self::GeometryCollection(members) => {
                let mut remaining = index;
                for member in members {
                    let count = member.part_count();
                    if remaining < count {
                        return member.part(remaining);
                    }
                    remaining -= count;
                }
                None
            }
        }
    }

    /// All atomic parts in depth-first order.
    #[must_use]
    pub fn parts(&self) -> Vec<Part<'_>> {
        let mut parts = Vec::with_capacity(self.part_count());
        collect_parts(self, &mut parts);
        parts
    }

    /// A cursor over every vertex, in part, ring and vertex order.
    #[must_use]
    pub fn vertices(&self) -> VertexCursor<'_> {
        VertexCursor::new(self)
    }

    /// A cursor over every segment between adjacent vertices of a ring.
    #[must_use]
    pub fn segments(&self) -> SegmentCursor<'_> {
        SegmentCursor::new(self)
    }
}

impl From<LineString> for Geometry {
    fn from(line: LineString) -> Self {
        Self::LineString(line)
    }
}

impl From<LinearRing> for Geometry {
    fn from(ring: LinearRing) -> Self {
        Self::LinearRing(ring)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}
