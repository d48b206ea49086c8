//! Non-rational B-spline curves ("NURBS" with unit weights).
//!
//! A curve of degree `p` with `n + 1` control points carries `n + p + 2` knots.
//! Curves exported as paths are expected to be clamped: the first and last
//! `p + 1` knots repeat, so the curve passes through its end control points.
//!
//! # Example
//!
//! ```rust
//! use nurbs_svg::{pt, NurbsCurve};
//!
//! let curve = NurbsCurve::new(
//!     3,
//!     vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0],
//!     vec![pt!(0, 0), pt!(1, 2), pt!(3, 2), pt!(4, 0)],
//! )
//! .unwrap();
//!
//! assert_eq!(curve.point_at(0.0), pt!(0, 0));
//! assert_eq!(curve.point_at(1.0), pt!(4, 0));
//! ```

use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};

/// Read access to a B-spline curve: what the decomposer needs from a curve type
pub trait BSplineCurve {
    fn degree(&self) -> usize;
    fn knots(&self) -> &[f64];
    fn control_points(&self) -> &[Point];
}

/// A non-rational B-spline curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNurbsCurve")]
pub struct NurbsCurve {
    degree: usize,
    knots: Vec<f64>,
    control_points: Vec<Point>,
}

/// Wire form of a curve; a missing knot vector means "clamped uniform"
#[derive(Deserialize)]
struct RawNurbsCurve {
    degree: usize,
    #[serde(default)]
    knots: Option<Vec<f64>>,
    control_points: Vec<Point>,
}

impl TryFrom<RawNurbsCurve> for NurbsCurve {
    type Error = BezierError;

    fn try_from(raw: RawNurbsCurve) -> BezierResult<Self> {
        match raw.knots {
            Some(knots) => NurbsCurve::new(raw.degree, knots, raw.control_points),
            None => NurbsCurve::clamped_uniform(raw.degree, raw.control_points),
        }
    }
}

impl NurbsCurve {
    /// Create a curve, checking that degree, knots and control points agree,
    /// that the knot vector is non-decreasing and clamped, and that no interior
    /// knot repeats more than `degree` times.
    pub fn new(degree: usize, knots: Vec<f64>, control_points: Vec<Point>) -> BezierResult<Self> {
        if degree == 0 {
            return Err(BezierError::InvalidCurve(
                "degree must be at least 1".to_string(),
            ));
        }
        if control_points.len() <= degree {
            return Err(BezierError::InvalidCurve(format!(
                "a degree {} curve needs at least {} control points, got {}",
                degree,
                degree + 1,
                control_points.len()
            )));
        }
        if knots.len() != control_points.len() + degree + 1 {
            return Err(BezierError::InvalidCurve(format!(
                "expected {} knots, got {}",
                control_points.len() + degree + 1,
                knots.len()
            )));
        }
        if knots.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(BezierError::InvalidCurve(
                "knot vector must be non-decreasing".to_string(),
            ));
        }
        let curve = Self::new_unchecked(degree, knots, control_points);
        curve.check_knot_multiplicities()?;
        Ok(curve)
    }

    /// Create a curve without any consistency check
    pub fn new_unchecked(degree: usize, knots: Vec<f64>, control_points: Vec<Point>) -> Self {
        Self {
            degree,
            knots,
            control_points,
        }
    }

    /// Create a curve over `[0, spans]` with clamped ends and unit-spaced interior knots
    pub fn clamped_uniform(degree: usize, control_points: Vec<Point>) -> BezierResult<Self> {
        if degree == 0 || control_points.len() <= degree {
            return Err(BezierError::InvalidCurve(format!(
                "cannot build a degree {} curve from {} control points",
                degree,
                control_points.len()
            )));
        }
        let spans = control_points.len() - degree;
        let knots = std::iter::repeat(0.0)
            .take(degree)
            .chain((0..=spans).map(|i| i as f64))
            .chain(std::iter::repeat(spans as f64).take(degree))
            .collect();
        Self::new(degree, knots, control_points)
    }

    /// The parameter range `[U[p], U[n + 1]]` the curve is defined over
    pub fn domain(&self) -> (f64, f64) {
        (
            self.knots[self.degree],
            self.knots[self.control_points.len()],
        )
    }

    /// True when both ends repeat their knot value `degree + 1` times
    pub fn is_clamped(&self) -> bool {
        let order = self.degree + 1;
        if self.knots.len() < order {
            return false;
        }
        let head = &self.knots[..order];
        let tail = &self.knots[self.knots.len() - order..];
        head.iter().all(|&u| u == head[0]) && tail.iter().all(|&u| u == tail[0])
    }

    /// Check that both ends repeat exactly `degree + 1` times and that no
    /// interior knot repeats more than `degree` times
    pub fn check_knot_multiplicities(&self) -> BezierResult<()> {
        if !self.is_clamped() {
            return Err(BezierError::InvalidCurve(format!(
                "knot vector {:?} is not clamped",
                self.knots
            )));
        }

        let mut runs: Vec<(f64, usize)> = Vec::new();
        for &u in &self.knots {
            match runs.last_mut() {
                Some((value, count)) if *value == u => *count += 1,
                _ => runs.push((u, 1)),
            }
        }

        if runs.len() < 2 {
            return Err(BezierError::InvalidCurve(
                "knot vector spans an empty domain".to_string(),
            ));
        }

        let order = self.degree + 1;
        let ends = [runs[0], runs[runs.len() - 1]];
        if let Some((value, count)) = ends.into_iter().find(|&(_, count)| count != order) {
            return Err(BezierError::InvalidCurve(format!(
                "end knot {} repeats {} times, expected {}",
                value, count, order
            )));
        }
        if let Some((value, count)) = runs[1..runs.len() - 1]
            .iter()
            .find(|&&(_, count)| count > self.degree)
        {
            return Err(BezierError::InvalidCurve(format!(
                "interior knot {} repeats {} times, at most {} allowed",
                value, count, self.degree
            )));
        }
        Ok(())
    }

    /// Distinct knot values inside the domain, in increasing order.
    ///
    /// For a clamped curve consecutive breakpoints bound one polynomial piece.
    pub fn breakpoints(&self) -> Vec<f64> {
        let mut values: Vec<f64> = self.knots[self.degree..=self.control_points.len()].to_vec();
        values.dedup();
        values
    }

    /// Evaluate the curve at `t` with de Boor's algorithm.
    ///
    /// `t` is clamped into the domain.
    pub fn point_at(&self, t: f64) -> Point {
        let p = self.degree;
        let (lo, hi) = self.domain();
        let t = t.clamp(lo, hi);
        let span = self.span_index(t);

        let mut d: Vec<Point> = self.control_points[span - p..=span].to_vec();
        for r in 1..=p {
            // descending so d[j - 1] still holds the previous level
            for j in (r..=p).rev() {
                let left = self.knots[j + span - p];
                let right = self.knots[j + 1 + span - r];
                let alpha = if right > left {
                    (t - left) / (right - left)
                } else {
                    0.0
                };
                d[j] = d[j - 1].lerp(&d[j], alpha);
            }
        }
        d[p]
    }

    /// Index `k` of the knot span with `U[k] <= t < U[k + 1]`, restricted to `[p, n]`
    fn span_index(&self, t: f64) -> usize {
        let n = self.control_points.len() - 1;
        if t >= self.knots[n + 1] {
            return n;
        }
        let span = self.knots.partition_point(|&u| u <= t).saturating_sub(1);
        span.clamp(self.degree, n)
    }

    /// Apply `f` to every control point. Exact for affine maps.
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            degree: self.degree,
            knots: self.knots.clone(),
            control_points: self.control_points.iter().copied().map(f).collect(),
        }
    }
}

impl BSplineCurve for NurbsCurve {
    fn degree(&self) -> usize {
        self.degree
    }

    fn knots(&self) -> &[f64] {
        &self.knots
    }

    fn control_points(&self) -> &[Point] {
        &self.control_points
    }
}
