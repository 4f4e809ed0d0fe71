//! Half-edge planar graph.
//!
//! Half-edges live in a slotmap arena owned by [`EdgeGraph`] and refer to
//! each other by [`HalfEdgeId`], so the cyclic `sym`/`next` structure needs
//! no shared ownership.

pub mod edge_graph;
pub mod half_edge;

pub use edge_graph::EdgeGraph;
pub use half_edge::{HalfEdge, HalfEdgeId};
