//! Exportable shapes and the scene that groups them into layers.
//!
//! Shapes form a closed set; every consumer matches on all variants.

use crate::data::bbox::BoundingBox;
use crate::data::nurbs::{BSplineCurve, NurbsCurve};
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use crate::modules::export::options::ExportOptions;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Ellipse with its first axis along `x_axis` (any length) and the second perpendicular to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub x_axis: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    /// Unit direction of the first axis projected onto the XY plane
    pub fn axis_direction(&self) -> Vector2<f64> {
        Vector2::new(self.x_axis.x, self.x_axis.y)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| Vector2::new(1.0, 0.0))
    }

    /// Rotation of the first axis from +X, in degrees
    pub fn rotation_degrees(&self) -> f64 {
        let u = self.axis_direction();
        u.y.atan2(u.x).to_degrees()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    #[serde(default = "closed_by_default")]
    pub closed: bool,
}

fn closed_by_default() -> bool {
    true
}

/// One piece of a composite curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveSegment {
    Line(Line),
    Nurbs(NurbsCurve),
}

impl CurveSegment {
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Line(line) => Some(line.start),
            Self::Nurbs(curve) => curve.control_points().first().copied(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Line(line) => BoundingBox::from_points(&[line.start, line.end]),
            Self::Nurbs(curve) => BoundingBox::from_points(curve.control_points()),
        }
    }
}

/// A composite curve: segments joined end to end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyCurve {
    pub segments: Vec<CurveSegment>,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Point(Point),
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Polygon(Polygon),
    Nurbs(NurbsCurve),
    PolyCurve(PolyCurve),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Polygon(_) => "polygon",
            Self::Nurbs(_) => "nurbs",
            Self::PolyCurve(_) => "poly_curve",
        }
    }

    /// Reject shapes that cannot be drawn at all
    pub fn validate(&self) -> BezierResult<()> {
        let invalid = |reason: String| Err(BezierError::InvalidGeometry(reason));
        match self {
            Self::Circle(c) if !(c.radius >= 0.0 && c.radius.is_finite()) => {
                invalid(format!("circle radius {} is not a finite non-negative number", c.radius))
            }
            Self::Ellipse(e)
                if !(e.radius_x >= 0.0
                    && e.radius_y >= 0.0
                    && e.radius_x.is_finite()
                    && e.radius_y.is_finite()) =>
            {
                invalid(format!(
                    "ellipse radii ({}, {}) are not finite non-negative numbers",
                    e.radius_x, e.radius_y
                ))
            }
            Self::Polygon(p) if p.vertices.len() < 2 => invalid(format!(
                "polygon needs at least 2 vertices, got {}",
                p.vertices.len()
            )),
            Self::PolyCurve(pc) if pc.segments.is_empty() => {
                invalid("poly curve has no segments".to_string())
            }
            Self::Nurbs(curve) => curve.check_knot_multiplicities(),
            Self::PolyCurve(pc) => pc.segments.iter().try_for_each(|segment| match segment {
                CurveSegment::Nurbs(curve) => curve.check_knot_multiplicities(),
                CurveSegment::Line(_) => Ok(()),
            }),
            _ => Ok(()),
        }
    }

    /// Box around the shape in the XY plane.
    ///
    /// Curves use their control points, which bound the curve by the convex hull property.
    pub fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Point(p) => BoundingBox::from_points(&[*p]),
            Self::Line(line) => BoundingBox::from_points(&[line.start, line.end]),
            Self::Circle(c) => BoundingBox::around(c.center, c.radius, c.radius),
            Self::Ellipse(e) => {
                let u = e.axis_direction();
                let v = Vector2::new(-u.y, u.x);
                let half_width = (e.radius_x * u.x).hypot(e.radius_y * v.x);
                let half_height = (e.radius_x * u.y).hypot(e.radius_y * v.y);
                BoundingBox::around(e.center, half_width, half_height)
            }
            Self::Polygon(p) => BoundingBox::from_points(&p.vertices),
            Self::Nurbs(curve) => BoundingBox::from_points(curve.control_points()),
            Self::PolyCurve(pc) => pc
                .segments
                .iter()
                .fold(BoundingBox::empty(), |bbox, s| bbox.union(&s.bounding_box())),
        }
    }
}

/// A named group of shapes, exported as one SVG group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default)]
    pub name: Option<String>,
    pub shapes: Vec<Shape>,
}

impl Layer {
    pub fn new(name: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            name: Some(name.into()),
            shapes,
        }
    }

    pub fn unnamed(shapes: Vec<Shape>) -> Self {
        Self { name: None, shapes }
    }
}

/// Everything written into one SVG document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub options: ExportOptions,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self {
            options: ExportOptions::default(),
            layers,
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.layers.iter().flat_map(|layer| layer.shapes.iter())
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.shapes()
            .fold(BoundingBox::empty(), |bbox, s| bbox.union(&s.bounding_box()))
    }
}
