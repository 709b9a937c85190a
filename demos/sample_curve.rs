//! Print a Bezier as a uniform polyline and as arc-length spaced points.
//!
//! Usage: sample_curve [x0 y0 x1 y1 x2 y2 x3 y3] (inches)

use fieldcurve::curve::sampling::{polyline, resample_by_length};
use fieldcurve::curve::{CubicBezier, Curve};
use fieldcurve::geometry::Point;
use fieldcurve::units::Length;
use fieldcurve::units::defs::PER_INCH;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let coords: Vec<f64> = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| miette::miette!("invalid coordinate: {e}"))?;
    let coords = match coords.len() {
        0 => vec![0.0, 0.0, 10.0, 0.0, 0.0, 10.0, 24.0, 24.0],
        8 => coords,
        n => miette::bail!("expected 8 coordinates, got {n}"),
    };

    let points: [Point; 4] =
        std::array::from_fn(|i| Point::from_inches(coords[2 * i], coords[2 * i + 1]));
    let curve = CubicBezier::from(points);

    println!("length: {:.3} in", curve.total_length().to_inches());

    println!("\n== polyline (t, x, y, curvature) ==");
    for (i, p) in polyline(&curve, 10).iter().enumerate() {
        let t = i as f64 / 10.0;
        let v = p.to_inches();
        println!(
            "{t:.1}\t{:8.3}\t{:8.3}\t{:8.5} 1/in",
            v.x,
            v.y,
            curve.curvature(t).convert(PER_INCH)
        );
    }

    println!("\n== every 4 in along the path ==");
    for p in resample_by_length(&curve, Length::from_inches(4.0))? {
        let v = p.to_inches();
        println!("{:8.3}\t{:8.3}", v.x, v.y);
    }

    Ok(())
}
