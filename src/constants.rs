//! Numeric tolerances and export defaults shared across the crate.

/// The only degree the decomposer accepts.
pub const SUPPORTED_DEGREE: usize = 3;

/// Number of control points in one bezier segment of the supported degree.
pub const SEGMENT_ORDER: usize = SUPPORTED_DEGREE + 1;

/// Absolute tolerance used when comparing points for continuity.
pub const POINT_TOLERANCE: f64 = 1e-9;

pub const DEFAULT_MARGIN: f64 = 10.0;
pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_STROKE: &str = "black";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_FILL: &str = "none";
pub const DEFAULT_POINT_RADIUS: f64 = 2.0;

/// File extension written by the exporter.
pub const SVG_EXTENSION: &str = "svg";
