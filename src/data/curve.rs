//! A Bezier curve: a chain of cubic Bezier segments.

use crate::data::point::Point;
use crate::data::segment::BezierSegment;
use serde::{Deserialize, Serialize};

/// A Bezier curve consisting of zero or more cubic segments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BezierCurve {
    pub segments: Vec<BezierSegment>,
}

impl BezierCurve {
    /// Create a new bezier curve from a list of segments
    pub fn new(segments: Vec<BezierSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(BezierSegment::start)
    }

    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(BezierSegment::end)
    }

    /// True when every segment starts where the previous one ends
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|pair| pair[0].end().approx_eq(&pair[1].start(), tolerance))
    }

    /// True when the curve ends where it starts
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.start(), self.end()) {
            (Some(start), Some(end)) => start.approx_eq(&end, tolerance),
            _ => false,
        }
    }
}
