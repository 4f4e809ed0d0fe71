pub mod coordinate;
pub mod cursor;
pub mod envelope;
pub mod part;
pub mod types;

pub use coordinate::Coordinate;
pub use cursor::{Segment, SegmentCursor, SegmentId, Vertex, VertexCursor, VertexId};
pub use envelope::Envelope;
pub use part::{vertex_at, Part, Ring};
pub use types::{Geometry, GeometryType, LineString, LinearRing, Polygon};
