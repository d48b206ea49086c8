//! This module provides convenient macros for creating points, segments, and curves.

/// Macro for creating a Point, with an optional z coordinate
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point::new_3d($x as f64, $y as f64, $z as f64)
    };
}

/// Macro for creating a cubic bezier segment
#[macro_export]
macro_rules! cubic {
    ([$($point:expr),*]) => {{
        let points = [$($point),*];
        assert_eq!(points.len(), 4, "Cubic bezier requires exactly 4 points");
        $crate::data::BezierSegment::new(
            $crate::pt!(points[0].0, points[0].1),
            $crate::pt!(points[1].0, points[1].1),
            $crate::pt!(points[2].0, points[2].1),
            $crate::pt!(points[3].0, points[3].1),
        )
    }};
}

/// Macro for creating a clamped B-spline curve from a degree, knots and (x, y) tuples
///
/// Panics on an inconsistent knot vector; intended for tests and literals.
#[macro_export]
macro_rules! nurbs {
    ($degree:expr, [$($knot:expr),*], [$(($x:expr, $y:expr)),*]) => {{
        $crate::data::NurbsCurve::new(
            $degree,
            vec![$($knot as f64),*],
            vec![$($crate::pt!($x, $y)),*],
        )
        .expect("invalid curve literal")
    }};
}

/// Macro for creating a Bezier curve from segments
#[macro_export]
macro_rules! curve {
    // Create from a list of segments
    ([$($segment:expr),*]) => {{
        let segments = vec![$($segment),*];
        $crate::data::BezierCurve::new(segments)
    }};

    // Create from an existing vector of segments
    ($segments:expr) => {
        $crate::data::BezierCurve::new($segments)
    };
}
