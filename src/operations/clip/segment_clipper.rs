use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Coordinate, Envelope};
use crate::math::signed_area;

/// Clips lines and rings against a convex region bounded by directed edges.
///
/// A point is inside when it lies strictly to the left of every edge, so
/// the region is traversed counter-clockwise. Clipping is applied one edge
/// at a time, each pass feeding the next.
#[derive(Debug, Clone)]
pub struct SegmentClipper {
    edges: Vec<(Coordinate, Coordinate)>,
}

impl SegmentClipper {
    /// A clipper keeping the half-plane to the left of `p1 -> p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if either point has a NaN X or Y, or if the points
    /// are equal.
    pub fn half_plane(p1: Coordinate, p2: Coordinate) -> Result<Self> {
        Ok(Self {
            edges: vec![clip_edge(p1, p2)?],
        })
    }

    /// A clipper keeping the inside of a rectangle.
    ///
    /// Edges are applied bottom, right, top, left; in that order each edge
    /// has the rectangle on its left.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is NaN or the rectangle has zero width
    /// or height.
    pub fn rectangle(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        if min_x > max_x || min_y > max_y {
            return Err(GeometryError::Degenerate(format!(
                "rectangle bounds ({min_x}, {min_y}) - ({max_x}, {max_y}) are inverted"
            ))
            .into());
        }
        let corners = [
            Coordinate::new(min_x, min_y),
            Coordinate::new(max_x, min_y),
            Coordinate::new(max_x, max_y),
            Coordinate::new(min_x, max_y),
        ];
        let edges = (0..4)
            .map(|i| clip_edge(corners[i], corners[(i + 1) % 4]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { edges })
    }

    /// A clipper keeping the inside of `envelope`.
    ///
    /// # Errors
    ///
    /// See [`SegmentClipper::rectangle`].
    pub fn envelope(envelope: &Envelope) -> Result<Self> {
        Self::rectangle(envelope.min_x, envelope.min_y, envelope.max_x, envelope.max_y)
    }

    /// Clips `line`, returning the vertices of the part kept.
    ///
    /// A non-empty result is closed by repeating its first vertex. An input
    /// entirely outside yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex has a NaN X or Y.
    pub fn clip(&self, line: &[Coordinate]) -> Result<Vec<Coordinate>> {
        for c in line {
            c.require_xy()?;
        }
        let mut current = line.to_vec();
        for (p1, p2) in &self.edges {
            if current.is_empty() {
                break;
            }
            current = clip_against(&current, p1, p2);
        }
        debug!(input = line.len(), output = current.len(), "clipped line");
        Ok(current)
    }
}

/// Clips `line` against the half-plane left of `p1 -> p2`.
///
/// # Errors
///
/// Returns an error if a coordinate has a NaN X or Y, or if `p1` equals
/// `p2`.
pub fn clip_half_plane(line: &[Coordinate], p1: Coordinate, p2: Coordinate) -> Result<Vec<Coordinate>> {
    SegmentClipper::half_plane(p1, p2)?.clip(line)
}

/// Clips `ring` against the rectangle `[min_x, max_x] x [min_y, max_y]`.
///
/// # Errors
///
/// Returns an error if a coordinate is NaN or the rectangle is degenerate.
pub fn clip_rectangle(
    ring: &[Coordinate],
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Result<Vec<Coordinate>> {
    SegmentClipper::rectangle(min_x, min_y, max_x, max_y)?.clip(ring)
}

fn clip_edge(p1: Coordinate, p2: Coordinate) -> Result<(Coordinate, Coordinate)> {
    p1.require_xy()?;
    p2.require_xy()?;
    if p1.equals_2d(&p2) {
        return Err(GeometryError::Degenerate(format!("clip edge has equal endpoints {p1}")).into());
    }
    Ok((p1, p2))
}

fn clip_against(line: &[Coordinate], e1: &Coordinate, e2: &Coordinate) -> Vec<Coordinate> {
    let side = |p: &Coordinate| signed_area(e1, e2, p);
    let mut out = Vec::with_capacity(line.len() + 2);

    if let Some(first) = line.first() {
        if side(first) > 0.0 {
            out.push(*first);
        }
    }
    for pair in line.windows(2) {
        let (p1, p2) = (&pair[0], &pair[1]);
        let (s1, s2) = (side(p1), side(p2));
        match (s1 > 0.0, s2 > 0.0) {
            (false, true) => {
                out.push(crossing(p1, p2, s1, s2));
                out.push(*p2);
            }
            (true, true) => out.push(*p2),
            (true, false) => out.push(crossing(p1, p2, s1, s2)),
            (false, false) => {}
        }
    }

    if let (Some(first), Some(last)) = (out.first().copied(), out.last()) {
        if out.len() == 1 || !first.equals_2d(last) {
            out.push(first);
        }
    }
    out
}

/// Where `p1 -> p2` meets the clip line, given the signed areas of its ends
/// on opposite sides (one may be zero).
fn crossing(p1: &Coordinate, p2: &Coordinate, s1: f64, s2: f64) -> Coordinate {
    if s1 == 0.0 {
        return *p1;
    }
    if s2 == 0.0 {
        return *p2;
    }
    p1.lerp(p2, s1 / (s1 - s2))
}
