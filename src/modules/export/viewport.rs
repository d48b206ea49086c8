//! Mapping from world coordinates onto the SVG canvas.
//!
//! The drawing's bounding box is scaled, optionally mirrored in Y, and moved so
//! that its top-left corner lands at `(margin, margin)`. Z is carried along
//! untouched and ignored by the SVG output.

use crate::data::{BoundingBox, Circle, CurveSegment, Ellipse, Line, Point, PolyCurve, Polygon, Shape};
use crate::modules::export::options::ExportOptions;
use nalgebra::{Matrix3, Point2, Vector2};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    matrix: Matrix3<f64>,
    scale: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Fit a canvas around `bbox`. An empty box yields a canvas of just the margins.
    pub fn fit(bbox: &BoundingBox, options: &ExportOptions) -> Self {
        let (min, max) = if bbox.is_empty() {
            (Point::default(), Point::default())
        } else {
            (bbox.min, bbox.max)
        };
        let s = options.scale;
        let margin = options.margin;

        let (scale_y, anchor_y) = if options.flip_y {
            (-s, max.y)
        } else {
            (s, min.y)
        };

        let matrix = Matrix3::new_translation(&Vector2::new(margin, margin))
            * Matrix3::new_nonuniform_scaling(&Vector2::new(s, scale_y))
            * Matrix3::new_translation(&Vector2::new(-min.x, -anchor_y));

        Self {
            matrix,
            scale: s,
            width: (max.x - min.x) * s + 2.0 * margin,
            height: (max.y - min.y) * s + 2.0 * margin,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn map_point(&self, p: Point) -> Point {
        let q = self.matrix.transform_point(&Point2::new(p.x, p.y));
        Point::new_3d(q.x, q.y, p.z)
    }

    /// Map a direction: scaling and mirroring apply, translation does not
    pub fn map_vector(&self, v: Point) -> Point {
        let w = self.matrix.transform_vector(&Vector2::new(v.x, v.y));
        Point::new_3d(w.x, w.y, v.z)
    }

    pub fn map_length(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Move a shape onto the canvas.
    ///
    /// Curves map their control points, which is exact because the map is affine.
    pub fn map_shape(&self, shape: &Shape) -> Shape {
        let mp = |p: Point| self.map_point(p);
        match shape {
            Shape::Point(p) => Shape::Point(mp(*p)),
            Shape::Line(line) => Shape::Line(self.map_line(line)),
            Shape::Circle(c) => Shape::Circle(Circle {
                center: mp(c.center),
                radius: self.map_length(c.radius),
            }),
            Shape::Ellipse(e) => Shape::Ellipse(Ellipse {
                center: mp(e.center),
                x_axis: self.map_vector(e.x_axis),
                radius_x: self.map_length(e.radius_x),
                radius_y: self.map_length(e.radius_y),
            }),
            Shape::Polygon(p) => Shape::Polygon(Polygon {
                vertices: p.vertices.iter().copied().map(mp).collect(),
                closed: p.closed,
            }),
            Shape::Nurbs(curve) => Shape::Nurbs(curve.map_points(mp)),
            Shape::PolyCurve(pc) => Shape::PolyCurve(PolyCurve {
                segments: pc
                    .segments
                    .iter()
                    .map(|segment| match segment {
                        CurveSegment::Line(line) => CurveSegment::Line(self.map_line(line)),
                        CurveSegment::Nurbs(curve) => CurveSegment::Nurbs(curve.map_points(mp)),
                    })
                    .collect(),
                closed: pc.closed,
            }),
        }
    }

    fn map_line(&self, line: &Line) -> Line {
        Line {
            start: self.map_point(line.start),
            end: self.map_point(line.end),
        }
    }
}
