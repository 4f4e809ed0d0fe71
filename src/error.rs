use thiserror::Error;

/// Top-level error type for the geotopo kernel.
#[derive(Debug, Error)]
pub enum GeotopoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised by geometry construction and traversal.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("coordinate ({x}, {y}) has a NaN ordinate where a value is required")]
    NanCoordinate { x: f64, y: f64 },

    #[error("invalid linear ring: {0}")]
    InvalidRing(String),

    #[error("cursor advanced past the last vertex")]
    CursorExhausted,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised by the half-edge graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("half-edge pair is already linked")]
    AlreadyLinked,

    #[error("half-edge not found in graph")]
    EdgeNotFound,
}

/// Errors related to kernel operations.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`GeotopoError`].
pub type Result<T> = std::result::Result<T, GeotopoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_errors_convert_into_top_level() {
        let err: GeotopoError = GeometryError::CursorExhausted.into();
        assert!(matches!(
            err,
            GeotopoError::Geometry(GeometryError::CursorExhausted)
        ));
        assert_eq!(err.to_string(), "cursor advanced past the last vertex");
    }

    #[test]
    fn nan_coordinate_message_names_the_point() {
        let err = GeometryError::NanCoordinate {
            x: 1.0,
            y: f64::NAN,
        };
        assert!(err.to_string().contains("(1, NaN)"));
    }
}
