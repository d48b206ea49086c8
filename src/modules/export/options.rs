//! Export configuration

use crate::constants::{
    DEFAULT_FILL, DEFAULT_MARGIN, DEFAULT_POINT_RADIUS, DEFAULT_SCALE, DEFAULT_STROKE,
    DEFAULT_STROKE_WIDTH,
};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// How a scene is placed on the canvas and styled.
///
/// Every field is optional in JSON and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Empty space around the drawing, in canvas units
    pub margin: f64,
    /// Canvas units per world unit
    pub scale: f64,
    /// Turn world Y-up into SVG Y-down
    pub flip_y: bool,
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    /// Radius of the dot drawn for point shapes
    pub point_radius: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            scale: DEFAULT_SCALE,
            flip_y: false,
            stroke: DEFAULT_STROKE.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill: DEFAULT_FILL.to_string(),
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }
}

impl ExportOptions {
    pub fn validate(&self) -> BezierResult<()> {
        if !(self.scale > 0.0 && self.scale.is_finite()) {
            return Err(BezierError::InvalidGeometry(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            return Err(BezierError::InvalidGeometry(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}
