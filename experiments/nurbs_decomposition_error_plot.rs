// Measure how far the decomposed bezier segments drift from de Boor evaluation
// as the number of interior knots grows, and plot the worst case per knot count.

use log::info;
use nurbs_svg::{decompose, NurbsCurve, Point};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const OUT_FILE: &str = "nurbs-decomposition-error.png";
const MAX_INTERIOR_KNOTS: usize = 40;
const CURVES_PER_COUNT: usize = 50;
const SAMPLES_PER_SEGMENT: usize = 16;

fn random_curve(rng: &mut StdRng, interior_knots: usize) -> NurbsCurve {
    let normal = Normal::new(0.0, 100.0).unwrap();

    let mut interior: Vec<f64> = (0..interior_knots).map(|_| rng.gen_range(0.01..0.99)).collect();
    interior.sort_by(|a, b| a.total_cmp(b));

    let mut knots = vec![0.0; 4];
    knots.extend(interior);
    knots.extend([1.0; 4]);

    let control_points = (0..knots.len() - 4)
        .map(|_| Point::new(normal.sample(rng), normal.sample(rng)))
        .collect();

    NurbsCurve::new_unchecked(3, knots, control_points)
}

/// Largest distance between the bezier segments and the curve they came from
fn max_deviation(curve: &NurbsCurve) -> Result<f64, Box<dyn std::error::Error>> {
    let segments = decompose(curve)?;
    let breaks = curve.breakpoints();

    let mut worst: f64 = 0.0;
    for (segment, span) in segments.iter().zip(breaks.windows(2)) {
        let samples = segment.sample_points(SAMPLES_PER_SEGMENT + 1);
        for (step, sample) in samples.iter().enumerate() {
            let local = step as f64 / SAMPLES_PER_SEGMENT as f64;
            let expected = curve.point_at(span[0] + (span[1] - span[0]) * local);
            worst = worst.max(sample.distance(&expected));
        }
    }
    Ok(worst)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut rng = StdRng::seed_from_u64(42);

    let mut worst_by_count = Vec::with_capacity(MAX_INTERIOR_KNOTS + 1);
    for count in 0..=MAX_INTERIOR_KNOTS {
        let mut worst: f64 = 0.0;
        for _ in 0..CURVES_PER_COUNT {
            let curve = random_curve(&mut rng, count);
            worst = worst.max(max_deviation(&curve)?);
        }
        info!("{} interior knots: max deviation {:e}", count, worst);
        worst_by_count.push((count, worst));
    }

    let y_max = worst_by_count
        .iter()
        .map(|&(_, worst)| worst)
        .fold(f64::MIN_POSITIVE, f64::max)
        * 1.1;

    let root = BitMapBackend::new(OUT_FILE, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Bezier decomposition vs de Boor evaluation",
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0..MAX_INTERIOR_KNOTS, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("interior knots")
        .y_desc("max deviation")
        .y_label_formatter(&|y| format!("{:.1e}", y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(worst_by_count.iter().copied(), &RED))?
        .label(format!("worst of {} random curves", CURVES_PER_COUNT))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("plot written to {}", OUT_FILE);
    Ok(())
}
