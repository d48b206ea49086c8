//! Parsing module for scenes and curves
//!
//! Now supported format:
//! - JSON:
//!     shapes are objects tagged by `"type"`, e.g.
//!     `{"type": "circle", "center": {"x": 0, "y": 0}, "radius": 2}`.
//!     See the `json` module for the full scene layout.

pub mod json;
