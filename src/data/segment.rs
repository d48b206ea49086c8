//! Bezier segment: one cubic piece of a decomposed curve

use crate::constants::SEGMENT_ORDER;
use crate::data::point::Point;
use serde::{Deserialize, Serialize};

/// A cubic bezier segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// Control points: start anchor, handle 1, handle 2, end anchor
    pub points: [Point; SEGMENT_ORDER],
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[SEGMENT_ORDER - 1]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        let [p1, p2, p3, p4] = self.points;
        let t1 = 1.0 - t;

        // B(t) = (1-t)^3 * p1 + 3(1-t)^2 * t * p2 + 3(1-t) * t^2 * p3 + t^3 * p4
        p1 * t1.powi(3) + p2 * (3.0 * t1.powi(2) * t) + p3 * (3.0 * t1 * t.powi(2)) + p4 * t.powi(3)
    }

    /// Generate a series of points along the bezier curve
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        if num_points < 2 {
            return vec![self.start(); num_points];
        }
        (0..num_points)
            .map(|i| {
                let t = i as f64 / (num_points - 1) as f64;
                self.point_at(t)
            })
            .collect()
    }
}

impl From<[Point; SEGMENT_ORDER]> for BezierSegment {
    fn from(points: [Point; SEGMENT_ORDER]) -> Self {
        Self { points }
    }
}
