//! Load scenes, shapes and curves from JSON.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!     "options": {"flip_y": true, "margin": 5},
//!     "layers": [
//!         {
//!             "name": "outline",
//!             "shapes": [
//!                 {"type": "line", "start": {"x": 0, "y": 0}, "end": {"x": 10, "y": 0}},
//!                 {"type": "nurbs", "degree": 3,
//!                  "knots": [0, 0, 0, 0, 1, 1, 1, 1],
//!                  "control_points": [{"x": 0, "y": 0}, {"x": 3, "y": 4},
//!                                     {"x": 7, "y": 4}, {"x": 10, "y": 0}]}
//!             ]
//!         }
//!     ]
//! }
//! ```
//!
//! `options` and every field inside it may be omitted. A curve without
//! `knots` gets a clamped uniform knot vector.

use crate::data::{NurbsCurve, Scene, Shape};
use crate::error::BezierResult;
use crate::modules::export::options::ExportOptions;
use log::debug;
use std::fs;
use std::path::Path;

/// Parse from a JSON document
pub trait FromJson: Sized {
    fn from_json(data: &str) -> BezierResult<Self>;

    fn from_json_file(path: impl AsRef<Path>) -> BezierResult<Self> {
        let data = fs::read_to_string(path.as_ref())?;
        Self::from_json(&data)
    }
}

impl FromJson for Scene {
    fn from_json(data: &str) -> BezierResult<Self> {
        let scene: Scene = serde_json::from_str(data)?;
        scene.options.validate()?;
        debug!(
            "parsed scene with {} layers and {} shapes",
            scene.layers.len(),
            scene.shapes().count()
        );
        Ok(scene)
    }
}

impl FromJson for ExportOptions {
    fn from_json(data: &str) -> BezierResult<Self> {
        let options: ExportOptions = serde_json::from_str(data)?;
        options.validate()?;
        Ok(options)
    }
}

impl FromJson for Shape {
    fn from_json(data: &str) -> BezierResult<Self> {
        let shape: Shape = serde_json::from_str(data)?;
        shape.validate()?;
        Ok(shape)
    }
}

impl FromJson for NurbsCurve {
    fn from_json(data: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}
