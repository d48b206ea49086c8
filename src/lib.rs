// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::bbox::BoundingBox;
pub use data::curve::BezierCurve;
pub use data::nurbs::{BSplineCurve, NurbsCurve};
pub use data::point::Point;
pub use data::segment::BezierSegment;
pub use data::shape::{CurveSegment, Layer, Scene, Shape};
pub use error::{BezierError, BezierResult};
pub use modules::decompose::decompose;
