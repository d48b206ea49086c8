//! Export shapes and curves to SVG
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - `M`/`L`/`C` commands for curves
//! - [SVG documents](svg/index.html) - whole scenes, one group per layer
//!
//! Scenes are moved onto the canvas by a [`viewport::Viewport`] before being written.

pub mod options;
pub mod svg;
pub mod svg_path;
pub mod viewport;

pub use options::ExportOptions;
pub use viewport::Viewport;
