use std::cmp::Ordering;
use std::collections::HashMap;

use slotmap::SlotMap;
use tracing::trace;

use super::half_edge::{compare_angular_direction, HalfEdge, HalfEdgeId};
use crate::error::{Result, TopologyError};
use crate::geometry::{Coordinate, Geometry};

/// A planar graph of half-edge pairs keyed by vertex coordinate.
///
/// The graph owns every half-edge it creates; ids stay valid for the
/// graph's lifetime. Edges are never removed, so the graph is discarded
/// as a unit.
#[derive(Debug, Default)]
pub struct EdgeGraph {
    edges: SlotMap<HalfEdgeId, HalfEdge>,
    vertex_map: HashMap<(u64, u64), HalfEdgeId>,
}

impl EdgeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the edge `origin -> dest` and returns the half-edge leaving
    /// `origin`.
    ///
    /// A zero-length edge is ignored and yields `None`. Adding an edge that
    /// already exists in either direction returns the existing half-edge
    /// for this direction.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate has a NaN X or Y.
    pub fn add_edge(&mut self, origin: Coordinate, dest: Coordinate) -> Result<Option<HalfEdgeId>> {
        origin.require_xy()?;
        dest.require_xy()?;
        if origin.equals_2d(&dest) {
            return Ok(None);
        }

        let origin_edge = self.vertex_edge(&origin);
        if let Some(adjacent) = origin_edge {
            if let Some(existing) = self.find(adjacent, &dest)? {
                return Ok(Some(existing));
            }
        }

        let e = self.create_pair(origin, dest)?;
        let sym = self.edge(e)?.sym();
        match origin_edge {
            Some(adjacent) => self.insert(adjacent, e)?,
            None => {
                self.vertex_map.insert(origin.key_2d(), e);
            }
        }
        match self.vertex_edge(&dest) {
            Some(adjacent) => self.insert(adjacent, sym)?,
            None => {
                self.vertex_map.insert(dest.key_2d(), sym);
            }
        }
        trace!(%origin, %dest, "added half-edge pair");
        Ok(Some(e))
    }

    /// Adds every segment of every line and ring of `geometry`.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex has a NaN X or Y.
    pub fn add_geometry(&mut self, geometry: &Geometry) -> Result<()> {
        for segment in geometry.segments() {
            self.add_edge(segment.start, segment.end)?;
        }
        Ok(())
    }

    /// Returns the half-edge data for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `id` is not in this graph.
    pub fn edge(&self, id: HalfEdgeId) -> std::result::Result<&HalfEdge, TopologyError> {
        self.edges.get(id).ok_or(TopologyError::EdgeNotFound)
    }

    /// All half-edges, two per graph edge.
    pub fn edges(&self) -> impl Iterator<Item = HalfEdgeId> + '_ {
        self.edges.keys()
    }

    /// Number of half-edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_map.len()
    }

    /// A half-edge leaving `vertex`, if the vertex is in the graph.
    #[must_use]
    pub fn vertex_edge(&self, vertex: &Coordinate) -> Option<HalfEdgeId> {
        self.vertex_map.get(&vertex.key_2d()).copied()
    }

    /// The half-edge `origin -> dest`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is internally inconsistent.
    pub fn find_edge(&self, origin: &Coordinate, dest: &Coordinate) -> Result<Option<HalfEdgeId>> {
        match self.vertex_edge(origin) {
            Some(e) => Ok(self.find(e, dest)?),
            None => Ok(None),
        }
    }

    // --- Half-edge navigation ---

    /// Origin vertex of `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn origin(&self, e: HalfEdgeId) -> std::result::Result<Coordinate, TopologyError> {
        Ok(self.edge(e)?.origin())
    }

    /// Destination vertex of `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn dest(&self, e: HalfEdgeId) -> std::result::Result<Coordinate, TopologyError> {
        self.origin(self.sym(e)?)
    }

    /// Opposite half of `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn sym(&self, e: HalfEdgeId) -> std::result::Result<HalfEdgeId, TopologyError> {
        Ok(self.edge(e)?.sym())
    }

    /// Half-edge following `e`, leaving its destination.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn next(&self, e: HalfEdgeId) -> std::result::Result<HalfEdgeId, TopologyError> {
        Ok(self.edge(e)?.next())
    }

    /// Next half-edge CCW around the origin of `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn o_next(&self, e: HalfEdgeId) -> std::result::Result<HalfEdgeId, TopologyError> {
        self.next(self.sym(e)?)
    }

    /// The half-edge whose `next` is `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn prev(&self, e: HalfEdgeId) -> std::result::Result<HalfEdgeId, TopologyError> {
        let mut curr = e;
        loop {
            let o_next = self.o_next(curr)?;
            if o_next == e {
                return self.sym(curr);
            }
            curr = o_next;
        }
    }

    /// Number of edges leaving the origin of `e`.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn degree(&self, e: HalfEdgeId) -> std::result::Result<usize, TopologyError> {
        let mut degree = 0;
        let mut curr = e;
        loop {
            degree += 1;
            curr = self.o_next(curr)?;
            if curr == e {
                return Ok(degree);
            }
        }
    }

    /// Number of edges at `vertex`, or zero if it is not in the graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is internally inconsistent.
    pub fn vertex_degree(&self, vertex: &Coordinate) -> std::result::Result<usize, TopologyError> {
        self.vertex_edge(vertex).map_or(Ok(0), |e| self.degree(e))
    }

    /// The edge leaving the origin of `e` towards `dest`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn find(
        &self,
        e: HalfEdgeId,
        dest: &Coordinate,
    ) -> std::result::Result<Option<HalfEdgeId>, TopologyError> {
        let mut curr = e;
        loop {
            if self.dest(curr)?.equals_2d(dest) {
                return Ok(Some(curr));
            }
            curr = self.o_next(curr)?;
            if curr == e {
                return Ok(None);
            }
        }
    }

    /// Returns `true` if the edges around the origin of `e` are in strictly
    /// increasing CCW order starting from the lowest one.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EdgeNotFound`] if `e` is not in this graph.
    pub fn is_edges_sorted(&self, e: HalfEdgeId) -> std::result::Result<bool, TopologyError> {
        let lowest = self.find_lowest(e)?;
        let mut curr = lowest;
        loop {
            let next = self.o_next(curr)?;
            if next == lowest {
                return Ok(true);
            }
            if self.compare_edges(next, curr)? != Ordering::Greater {
                return Ok(false);
            }
            curr = next;
        }
    }

    fn find_lowest(&self, e: HalfEdgeId) -> std::result::Result<HalfEdgeId, TopologyError> {
        let mut lowest = e;
        let mut curr = self.o_next(e)?;
        while curr != e {
            if self.compare_edges(curr, lowest)? == Ordering::Less {
                lowest = curr;
            }
            curr = self.o_next(curr)?;
        }
        Ok(lowest)
    }

    /// Angular comparison of two edges leaving the same origin.
    fn compare_edges(
        &self,
        a: HalfEdgeId,
        b: HalfEdgeId,
    ) -> std::result::Result<Ordering, TopologyError> {
        let origin = self.origin(a)?;
        Ok(compare_angular_direction(&origin, &self.dest(a)?, &self.dest(b)?))
    }

    // --- Construction ---

    fn create_pair(&mut self, origin: Coordinate, dest: Coordinate) -> Result<HalfEdgeId> {
        let e0 = self.edges.insert(HalfEdge::new(origin));
        let e1 = self.edges.insert(HalfEdge::new(dest));
        self.link_pair(e0, e1)?;
        Ok(e0)
    }

    /// Links two fresh half-edges as a mutual pair, each the other's `sym`
    /// and `next`.
    pub(crate) fn link_pair(
        &mut self,
        e0: HalfEdgeId,
        e1: HalfEdgeId,
    ) -> std::result::Result<(), TopologyError> {
        if self.edge(e0)?.is_linked() || self.edge(e1)?.is_linked() {
            return Err(TopologyError::AlreadyLinked);
        }
        for (e, other) in [(e0, e1), (e1, e0)] {
            let half = self.edges.get_mut(e).ok_or(TopologyError::EdgeNotFound)?;
            half.set_sym(other);
            half.set_next(other);
        }
        Ok(())
    }

    /// Splices `e_add` into the origin ring of `e`, keeping CCW order.
    fn insert(&mut self, e: HalfEdgeId, e_add: HalfEdgeId) -> std::result::Result<(), TopologyError> {
        let prev = if self.o_next(e)? == e {
            e
        } else {
            self.insertion_edge(e, e_add)?
        };
        self.insert_after(prev, e_add)
    }

    /// The edge in the ring of `e` after which `e_add` belongs.
    fn insertion_edge(
        &self,
        e: HalfEdgeId,
        e_add: HalfEdgeId,
    ) -> std::result::Result<HalfEdgeId, TopologyError> {
        let mut prev = e;
        loop {
            let next = self.o_next(prev)?;
            let add_vs_prev = self.compare_edges(e_add, prev)?;
            let add_vs_next = self.compare_edges(e_add, next)?;
            if self.compare_edges(next, prev)? == Ordering::Greater {
                if add_vs_prev != Ordering::Less && add_vs_next != Ordering::Greater {
                    return Ok(prev);
                }
            } else if add_vs_next != Ordering::Greater || add_vs_prev != Ordering::Less {
                // The ring wraps past the positive X axis between prev and next.
                return Ok(prev);
            }
            prev = next;
            if prev == e {
                return Err(TopologyError::EdgeNotFound);
            }
        }
    }

    fn insert_after(
        &mut self,
        e: HalfEdgeId,
        e_add: HalfEdgeId,
    ) -> std::result::Result<(), TopologyError> {
        let save = self.o_next(e)?;
        let e_sym = self.sym(e)?;
        let add_sym = self.sym(e_add)?;
        self.edges
            .get_mut(e_sym)
            .ok_or(TopologyError::EdgeNotFound)?
            .set_next(e_add);
        self.edges
            .get_mut(add_sym)
            .ok_or(TopologyError::EdgeNotFound)?
            .set_next(save);
        Ok(())
    }
}
