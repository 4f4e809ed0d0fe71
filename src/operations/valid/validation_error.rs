use thiserror::Error;

use crate::geometry::{Coordinate, SegmentId, VertexId};

/// A reason a geometry is not simple, located at the offending point.
///
/// These are detected conditions, returned as values; they are not
/// propagated as errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryValidationError {
    /// Two consecutive vertices of a line, or two points of a multi-point,
    /// are equal.
    #[error("duplicate vertex at {point}")]
    DuplicateVertex { point: Coordinate, vertex: VertexId },

    /// Two segments meet at a vertex that is not an allowed touch.
    #[error("self-intersection at vertex {point}")]
    SelfIntersectionVertex {
        point: Coordinate,
        segments: (SegmentId, SegmentId),
    },

    /// Two segments cross at a point interior to both.
    #[error("self-intersection at {point}")]
    SelfIntersectionPoint {
        point: Coordinate,
        segments: (SegmentId, SegmentId),
    },

    /// One segment lies entirely on another.
    #[error("segment overlap from {point} to {end}")]
    SelfOverlapSegment {
        point: Coordinate,
        end: Coordinate,
        segments: (SegmentId, SegmentId),
    },

    /// Two collinear segments partially overlap.
    #[error("partial segment overlap from {point} to {end}")]
    SelfOverlapLineSegment {
        point: Coordinate,
        end: Coordinate,
        segments: (SegmentId, SegmentId),
    },

    /// A vertex has a NaN X or Y ordinate.
    #[error("NaN coordinate at vertex {vertex:?}")]
    CoordinateNaN { point: Coordinate, vertex: VertexId },
}

impl GeometryValidationError {
    /// The point the condition is located at.
    #[must_use]
    pub fn point(&self) -> Coordinate {
        match self {
            Self::DuplicateVertex { point, .. }
            | Self::SelfIntersectionVertex { point, .. }
            | Self::SelfIntersectionPoint { point, .. }
            | Self::SelfOverlapSegment { point, .. }
            | Self::SelfOverlapLineSegment { point, .. }
            | Self::CoordinateNaN { point, .. } => *point,
        }
    }

    /// The segments involved, for intersection and overlap conditions.
    #[must_use]
    pub fn segments(&self) -> Option<(SegmentId, SegmentId)> {
        match self {
            Self::SelfIntersectionVertex { segments, .. }
            | Self::SelfIntersectionPoint { segments, .. }
            | Self::SelfOverlapSegment { segments, .. }
            | Self::SelfOverlapLineSegment { segments, .. } => Some(*segments),
            Self::DuplicateVertex { .. } | Self::CoordinateNaN { .. } => None,
        }
    }

    /// The vertex involved, for duplicate and NaN conditions.
    #[must_use]
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            Self::DuplicateVertex { vertex, .. } | Self::CoordinateNaN { vertex, .. } => {
                Some(*vertex)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_messages() {
        let vertex = VertexId {
            part: 0,
            ring: 0,
            vertex: 1,
        };
        let err = GeometryValidationError::DuplicateVertex {
            point: Coordinate::new(0.0, 0.0),
            vertex,
        };
        assert_eq!(err.point(), Coordinate::new(0.0, 0.0));
        assert_eq!(err.vertex(), Some(vertex));
        assert!(err.segments().is_none());
        assert_eq!(err.to_string(), "duplicate vertex at (0 0)");

        let segment = SegmentId {
            part: 0,
            ring: 0,
            segment: 0,
        };
        let crossing = GeometryValidationError::SelfIntersectionPoint {
            point: Coordinate::new(5.0, 5.0),
            segments: (segment, SegmentId { segment: 2, ..segment }),
        };
        assert_eq!(crossing.segments().unwrap().1.segment, 2);
        assert!(crossing.vertex().is_none());
    }
}
