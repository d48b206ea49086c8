//! SVG path data for curves
//!
//! A curve becomes one `M` command for its first point followed by `L` or `C`
//! commands; cubic B-splines are decomposed into Bezier segments first.
//!
//! # Examples
//!
//! ## Exporting a chain of Bezier segments
//!
//! ```rust
//! use nurbs_svg::{cubic, curve, modules::export::svg_path::ToSvgPath};
//!
//! let path = curve!([
//!     cubic!([(10, 20), (20, 30), (30, 40), (40, 50)]),
//!     cubic!([(40, 50), (50, 60), (60, 70), (70, 80)])
//! ]);
//!
//! assert_eq!(
//!     path.to_svg_path().unwrap(),
//!     "M10,20 C20,30,30,40,40,50 C50,60,60,70,70,80"
//! );
//! ```
//!
//! ## Exporting a B-spline curve
//!
//! ```rust
//! use nurbs_svg::{nurbs, modules::export::svg_path::ToSvgPath};
//!
//! let spline = nurbs!(3, [0, 0, 0, 0, 0.5, 1, 1, 1, 1], [(0, 0), (1, 2), (2, 2), (3, 0), (4, 1)]);
//!
//! assert_eq!(
//!     spline.to_svg_path().unwrap(),
//!     "M0,0 C1,2,1.5,2,2,1.5 C2.5,1,3,0,4,1"
//! );
//! ```

use crate::constants::POINT_TOLERANCE;
use crate::data::{BSplineCurve, BezierCurve, BezierSegment, CurveSegment, NurbsCurve, Point, PolyCurve};
use crate::error::{BezierError, BezierResult};
use crate::modules::decompose::decompose_to_curve;
use log::warn;

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string
    fn to_svg_path(&self) -> BezierResult<String>;
}

/// Accumulates path commands, remembering the pen position
#[derive(Debug, Default)]
pub struct PathData {
    data: String,
    current: Option<Point>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.command('M', &[p]);
        self.current = Some(p);
    }

    pub fn line_to(&mut self, p: Point) {
        if self.current.is_none() {
            self.move_to(p);
            return;
        }
        self.command('L', &[p]);
        self.current = Some(p);
    }

    /// Append a cubic; starts a new subpath when the pen is not at the segment start
    pub fn cubic_to(&mut self, segment: &BezierSegment) {
        self.continue_from(segment.start());
        self.command('C', &segment.points[1..]);
        self.current = Some(segment.end());
    }

    pub fn close(&mut self) {
        if self.current.is_some() {
            self.data.push('Z');
        }
    }

    pub fn append_bezier_curve(&mut self, curve: &BezierCurve) {
        for segment in &curve.segments {
            self.cubic_to(segment);
        }
    }

    /// Cubic curves are decomposed; linear curves run through their control points
    pub fn append_nurbs(&mut self, curve: &NurbsCurve) -> BezierResult<()> {
        curve.check_knot_multiplicities()?;
        match curve.degree() {
            1 => {
                let (first, rest) = curve
                    .control_points()
                    .split_first()
                    .ok_or_else(|| BezierError::InvalidCurve("curve has no control points".to_string()))?;
                self.continue_from(*first);
                for p in rest {
                    self.line_to(*p);
                }
            }
            _ => self.append_bezier_curve(&decompose_to_curve(curve)?),
        }
        Ok(())
    }

    pub fn append_poly_curve(&mut self, curve: &PolyCurve) -> BezierResult<()> {
        for segment in &curve.segments {
            match segment {
                CurveSegment::Line(line) => {
                    self.continue_from(line.start);
                    self.line_to(line.end);
                }
                CurveSegment::Nurbs(nurbs) => self.append_nurbs(nurbs)?,
            }
        }
        if curve.closed {
            self.close();
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_string(self) -> String {
        self.data
    }

    /// Move the pen to `p` unless it is already there
    fn continue_from(&mut self, p: Point) {
        match self.current {
            Some(current) if current.approx_eq(&p, POINT_TOLERANCE) => {}
            Some(current) => {
                warn!(
                    "gap between ({}, {}) and ({}, {}), starting a new subpath",
                    current.x, current.y, p.x, p.y
                );
                self.move_to(p);
            }
            None => self.move_to(p),
        }
    }

    fn command(&mut self, name: char, points: &[Point]) {
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        self.data.push(name);
        let coords: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        self.data.push_str(&coords.join(","));
    }
}

impl ToSvgPath for BezierCurve {
    /// A chain ending where it started is closed with `Z`
    fn to_svg_path(&self) -> BezierResult<String> {
        let mut path = PathData::new();
        path.append_bezier_curve(self);
        if self.is_closed(POINT_TOLERANCE) {
            path.close();
        }
        Ok(path.into_string())
    }
}

impl ToSvgPath for NurbsCurve {
    fn to_svg_path(&self) -> BezierResult<String> {
        let mut path = PathData::new();
        path.append_nurbs(self)?;
        Ok(path.into_string())
    }
}

impl ToSvgPath for PolyCurve {
    fn to_svg_path(&self) -> BezierResult<String> {
        let mut path = PathData::new();
        path.append_poly_curve(self)?;
        Ok(path.into_string())
    }
}
