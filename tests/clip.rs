#![allow(clippy::unwrap_used)]

mod common;

use common::{coords, init_tracing, square_ring};
use geotopo::geometry::Envelope;
use geotopo::operations::clip::{clip_rectangle, SegmentClipper};

#[test]
fn containing_rectangle_keeps_ring() {
    init_tracing();
    let ring = coords(&square_ring(0.0, 1.0));
    assert_eq!(clip_rectangle(&ring, -0.5, -0.5, 1.5, 1.5).unwrap(), ring);
}

#[test]
fn disjoint_rectangle_removes_ring() {
    init_tracing();
    let ring = coords(&square_ring(0.0, 1.0));
    assert!(clip_rectangle(&ring, 3.0, 3.0, 4.0, 4.0).unwrap().is_empty());
    assert!(clip_rectangle(&ring, -4.0, 0.0, -3.0, 1.0).unwrap().is_empty());
}

#[test]
fn clipper_is_reusable() {
    init_tracing();
    let clipper = SegmentClipper::envelope(&Envelope::new(0.0, 0.0, 2.0, 2.0)).unwrap();
    let inside = coords(&square_ring(0.5, 1.5));
    let straddling = coords(&square_ring(1.0, 3.0));
    assert_eq!(clipper.clip(&inside).unwrap(), inside);
    let clipped = clipper.clip(&straddling).unwrap();
    assert_eq!(clipped.first(), clipped.last());
    assert!(clipped.iter().all(|p| p.x <= 2.0 && p.y <= 2.0));
}
