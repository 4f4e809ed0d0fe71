mod segment_clipper;

pub use segment_clipper::{clip_half_plane, clip_rectangle, SegmentClipper};
