//! Geometry values: points, bezier segments, B-spline curves and exportable shapes.

pub mod bbox;
pub mod curve;
pub mod macros;
pub mod nurbs;
pub mod point;
pub mod segment;
pub mod shape;

pub use bbox::BoundingBox;
pub use curve::BezierCurve;
pub use nurbs::{BSplineCurve, NurbsCurve};
pub use point::Point;
pub use segment::BezierSegment;
pub use shape::{Circle, CurveSegment, Ellipse, Layer, Line, PolyCurve, Polygon, Scene, Shape};
