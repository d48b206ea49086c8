//! Split clamped cubic B-spline curves into cubic Bezier segments
//!
//! Every interior knot is raised to multiplicity 3 by knot insertion, at which
//! point each knot span of the curve is an independent cubic Bezier arc.
//!
//! # Example
//!
//! ```rust
//! use nurbs_svg::{modules::decompose::decompose, pt, NurbsCurve};
//!
//! let curve = NurbsCurve::new(
//!     3,
//!     vec![0.0, 0.0, 0.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0],
//!     vec![pt!(0, 0), pt!(1, 2), pt!(2, 2), pt!(3, 0), pt!(4, 1)],
//! )
//! .unwrap();
//!
//! let segments = decompose(&curve).unwrap();
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].end(), segments[1].start());
//! ```

pub mod knot_refinement;

pub use knot_refinement::{decompose, decompose_to_curve};
