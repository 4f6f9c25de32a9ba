use thiserror::Error;

/// Top-level error type for the CSG evaluator.
#[derive(Debug, Error)]
pub enum CsgError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length ray direction")]
    ZeroDirection,
}

/// Errors related to building regions and geometries.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown boolean operation: {0:?}")]
    UnknownOperation(String),
}

/// A query point fell outside a geometry's declared bounds.
///
/// Never returned as an error. Queries still answer; the condition is
/// only logged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("point ({x}, {y}) lies outside domain [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
pub struct UnboundedDomain {
    pub x: f64,
    pub y: f64,
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

/// Convenience type alias for results using [`CsgError`].
pub type Result<T> = std::result::Result<T, CsgError>;
