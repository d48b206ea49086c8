//! Error types for curve decomposition and SVG export

use thiserror::Error;

/// Errors raised while decomposing curves or exporting scenes
#[derive(Debug, Error)]
pub enum BezierError {
    /// Only cubic curves can be split into cubic bezier segments
    #[error("unsupported curve degree {0}, expected 3")]
    UnsupportedDegree(usize),

    /// Knot vector and control points do not describe a valid curve
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    /// A shape cannot be exported (e.g. negative radius)
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Output file name rejected before writing
    #[error("invalid file name: {0}")]
    InvalidFileName(String),

    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type BezierResult<T> = Result<T, BezierError>;
