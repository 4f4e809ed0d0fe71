//! Bounding-box candidate lookup.
//!
//! A thin adapter over a packed static R-tree. Items are inserted with their
//! envelope and identified by insertion order; queries may return items whose
//! envelopes merely touch the query box but never miss an overlapping one.

use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::error::{OperationError, Result};
use crate::geometry::Envelope;

/// Collects item envelopes before the index is packed.
#[derive(Debug, Default)]
pub struct SpatialIndexBuilder {
    boxes: Vec<Envelope>,
}

impl SpatialIndexBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
        }
    }

    /// Adds an item and returns its id (the insertion index).
    pub fn insert(&mut self, bbox: Envelope) -> usize {
        self.boxes.push(bbox);
        self.boxes.len() - 1
    }

    /// Number of inserted items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if nothing was inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Packs the inserted envelopes into a queryable index.
    ///
    /// Items with an empty envelope are kept out of the tree and never
    /// returned by a query.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Failed`] if the underlying tree cannot be
    /// built.
    pub fn build(self) -> Result<SpatialIndex> {
        let ids: Vec<usize> = self
            .boxes
            .iter()
            .enumerate()
            .filter(|(_, bbox)| !bbox.is_empty())
            .map(|(id, _)| id)
            .collect();

        let mut builder = StaticAABB2DIndexBuilder::new(ids.len());
        for &id in &ids {
            let bbox = &self.boxes[id];
            builder.add(bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y);
        }
        let tree = builder
            .build()
            .map_err(|e| OperationError::Failed(format!("spatial index build: {e}")))?;

        Ok(SpatialIndex {
            tree,
            ids,
            item_count: self.boxes.len(),
        })
    }
}

/// A packed, immutable index over item envelopes.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: StaticAABB2DIndex<f64>,
    /// Maps tree positions back to insertion ids.
    ids: Vec<usize>,
    item_count: usize,
}

impl SpatialIndex {
    /// Ids of all items whose envelope intersects `bbox`, in ascending order.
    #[must_use]
    pub fn query(&self, bbox: &Envelope) -> Vec<usize> {
        if bbox.is_empty() || self.ids.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<usize> = self
            .tree
            .query(bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y)
            .into_iter()
            .map(|i| self.ids[i])
            .collect();
        hits.sort_unstable();
        hits
    }

    /// Number of items inserted, including ones with empty envelopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if the index holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn query_returns_overlapping_items_sorted() {
        let mut builder = SpatialIndexBuilder::new();
        let a = builder.insert(Envelope::new(0.0, 0.0, 1.0, 1.0));
        let b = builder.insert(Envelope::new(5.0, 5.0, 6.0, 6.0));
        let c = builder.insert(Envelope::new(0.5, 0.5, 2.0, 2.0));
        let index = builder.build().unwrap();

        assert_eq!(index.len(), 3);
        assert_eq!(index.query(&Envelope::new(0.8, 0.8, 0.9, 0.9)), vec![a, c]);
        assert_eq!(index.query(&Envelope::new(5.5, 5.5, 5.5, 5.5)), vec![b]);
        assert!(index.query(&Envelope::new(10.0, 10.0, 11.0, 11.0)).is_empty());
    }

    #[test]
    fn touching_boxes_are_candidates() {
        let mut builder = SpatialIndexBuilder::with_capacity(2);
        builder.insert(Envelope::new(0.0, 0.0, 1.0, 0.0));
        builder.insert(Envelope::new(1.0, 0.0, 2.0, 0.0));
        let index = builder.build().unwrap();
        assert_eq!(index.query(&Envelope::new(1.0, 0.0, 1.0, 0.0)), vec![0, 1]);
    }

    #[test]
    fn empty_envelopes_are_never_returned() {
        let mut builder = SpatialIndexBuilder::new();
        builder.insert(Envelope::empty());
        let real = builder.insert(Envelope::new(0.0, 0.0, 1.0, 1.0));
        let index = builder.build().unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.query(&Envelope::new(-100.0, -100.0, 100.0, 100.0)),
            vec![real]
        );
    }

    #[test]
    fn empty_index() {
        let index = SpatialIndexBuilder::new().build().unwrap();
        assert!(index.is_empty());
        assert!(index.query(&Envelope::new(0.0, 0.0, 1.0, 1.0)).is_empty());
    }
}
