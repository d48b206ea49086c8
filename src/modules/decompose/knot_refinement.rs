//! Bezier decomposition by knot refinement (Boehm insertion, one knot span at a time).

use crate::constants::{SEGMENT_ORDER, SUPPORTED_DEGREE};
use crate::data::{BSplineCurve, BezierCurve, BezierSegment, Point};
use crate::error::{BezierError, BezierResult};
use log::debug;

/// Decompose a clamped cubic B-spline curve into cubic Bezier segments, in parameter order.
///
/// Fails with [`BezierError::UnsupportedDegree`] for any degree other than 3,
/// before doing any work.
///
/// # Preconditions
///
/// Not checked here (see [`crate::NurbsCurve::new`] for a checked constructor):
/// the knot vector is non-decreasing, clamped with multiplicity 4 at both ends,
/// no interior knot repeats more than 3 times, and
/// `knots.len() == control_points.len() + 4`. Other inputs give unspecified results.
pub fn decompose<C: BSplineCurve + ?Sized>(curve: &C) -> BezierResult<Vec<BezierSegment>> {
    let p = curve.degree();
    if p != SUPPORTED_DEGREE {
        return Err(BezierError::UnsupportedDegree(p));
    }

    let knots = curve.knots();
    let points = curve.control_points();
    debug_assert!(points.len() > p, "too few control points");
    debug_assert_eq!(knots.len(), points.len() + p + 1, "knot count mismatch");

    let n = points.len() - 1;
    let m = n + p + 1;

    // one row per knot span between the clamped ends
    let mut rows: Vec<[Point; SEGMENT_ORDER]> = vec![[Point::default(); SEGMENT_ORDER]; m - 2 * p];
    rows[0].copy_from_slice(&points[..=p]);

    let mut alphas = [0.0; SUPPORTED_DEGREE];
    let mut a = p;
    let mut b = p + 1;
    let mut nb = 0;
    let mut insertions = 0;

    while b < m {
        let i = b;
        while b < m && knots[b + 1] == knots[b] {
            b += 1;
        }
        let mult = b - i + 1;

        if mult < p {
            let numer = knots[b] - knots[a];
            for j in (mult + 1..=p).rev() {
                alphas[j - mult - 1] = numer / (knots[a + j] - knots[a]);
            }

            let r = p - mult;
            for j in 1..=r {
                let save = r - j;
                let s = mult + j;

                // descending k: row[k - 1] must still hold the previous round's value
                let row = &mut rows[nb];
                for k in (s..=p).rev() {
                    row[k] = row[k - 1].lerp(&row[k], alphas[k - s]);
                }
                let boundary = row[p];

                if b < m {
                    rows[nb + 1][save] = boundary;
                }
            }
            insertions += r;
        }

        nb += 1;
        if b < m {
            for j in p.saturating_sub(mult)..=p {
                rows[nb][j] = points[b - p + j];
            }
            a = b;
            b += 1;
        }
    }

    rows.truncate(nb);
    debug!(
        "decomposed cubic curve with {} knots into {} bezier segments ({} knot insertions)",
        knots.len(),
        rows.len(),
        insertions
    );

    Ok(rows.into_iter().map(BezierSegment::from).collect())
}

/// Same as [`decompose`], wrapped as a [`BezierCurve`]
pub fn decompose_to_curve<C: BSplineCurve + ?Sized>(curve: &C) -> BezierResult<BezierCurve> {
    decompose(curve).map(BezierCurve::new)
}
