use approx::assert_abs_diff_eq;
use nurbs_svg::{decompose, BSplineCurve, BezierCurve, BezierError, NurbsCurve, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const TOLERANCE: f64 = 1e-9;

/// A clamped curve with random control points and random interior knots,
/// some of them repeated up to the curve degree
fn random_curve(rng: &mut StdRng, degree: usize) -> NurbsCurve {
    let normal = Normal::new(0.0, 50.0).unwrap();
    let distinct: usize = rng.gen_range(0..6);

    let mut interior: Vec<f64> = Vec::new();
    let mut breaks: Vec<f64> = (0..distinct).map(|_| rng.gen_range(0.05..0.95)).collect();
    breaks.sort_by(|a, b| a.partial_cmp(b).unwrap());
    breaks.dedup();
    for knot in breaks {
        let multiplicity = rng.gen_range(1..=degree);
        interior.extend(std::iter::repeat(knot).take(multiplicity));
    }

    let mut knots = vec![0.0; degree + 1];
    knots.extend(&interior);
    knots.extend(vec![1.0; degree + 1]);

    let control_points = (0..knots.len() - degree - 1)
        .map(|_| {
            Point::new_3d(
                normal.sample(rng),
                normal.sample(rng),
                normal.sample(rng),
            )
        })
        .collect();

    NurbsCurve::new(degree, knots, control_points).unwrap()
}

#[test]
fn test_random_curves_decompose_faithfully() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let curve = random_curve(&mut rng, 3);
        let segments = decompose(&curve).unwrap();
        let breaks = curve.breakpoints();
        let points = curve.control_points();

        // one segment per distinct interior knot, plus one
        assert_eq!(segments.len(), breaks.len() - 1);

        // endpoints are the end control points
        assert_eq!(segments[0].start(), points[0]);
        assert_eq!(segments[segments.len() - 1].end(), points[points.len() - 1]);

        // adjacent segments meet
        assert!(BezierCurve::new(segments.clone()).is_continuous(TOLERANCE));

        // and trace the same curve as de Boor evaluation
        for (segment, span) in segments.iter().zip(breaks.windows(2)) {
            for step in 0..=8 {
                let local = step as f64 / 8.0;
                let expected = curve.point_at(span[0] + (span[1] - span[0]) * local);
                let actual = segment.point_at(local);
                assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-7);
                assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-7);
                assert_abs_diff_eq!(actual.z, expected.z, epsilon = 1e-7);
            }
        }
    }
}

#[test]
fn test_input_curve_is_not_modified() {
    let mut rng = StdRng::seed_from_u64(11);
    let curve = random_curve(&mut rng, 3);
    let before = curve.clone();

    decompose(&curve).unwrap();

    assert_eq!(curve, before);
}

#[test]
fn test_random_non_cubic_curves_are_rejected() {
    let mut rng = StdRng::seed_from_u64(3);

    for degree in [1, 2, 4, 5] {
        let curve = random_curve(&mut rng, degree);
        match decompose(&curve) {
            Err(BezierError::UnsupportedDegree(d)) => assert_eq!(d, degree),
            other => panic!("Expected UnsupportedDegree({}), got {:?}", degree, other),
        }
    }
}
