//! Turning curves into point lists for drawing and path following.

use crate::errors::NumericError;
use crate::geometry::Point;
use crate::units::Length;

use super::Curve;

/// Upper bound on the points [`resample_by_length`] will produce.
pub const MAX_SAMPLES: usize = 1 << 20;

/// `segments + 1` points at uniform parameter steps (at least one segment).
pub fn polyline<C: Curve + ?Sized>(curve: &C, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| curve.f(i as f64 / segments as f64))
        .collect()
}

/// Points spaced `spacing` apart along the curve, plus the exact end point.
///
/// Each inversion starts from the previous parameter, so Newton usually
/// converges in a couple of steps. `spacing` must be finite and positive,
/// and small enough to stay under [`MAX_SAMPLES`] points.
pub fn resample_by_length<C: Curve + ?Sized>(
    curve: &C,
    spacing: Length,
) -> Result<Vec<Point>, NumericError> {
    NumericError::check_positive(spacing.raw())?;

    let total = curve.total_length();
    let [start, end] = curve.endpoints();
    // Steps strictly inside the curve; the end point is appended separately.
    let steps = ((total / spacing).raw() - 1e-9).ceil().max(1.0);
    if steps.is_nan() || steps >= MAX_SAMPLES as f64 {
        return Err(NumericError::TooManySamples { limit: MAX_SAMPLES });
    }
    let steps = steps as usize;

    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);
    let mut t = 0.0;
    for k in 1..steps {
        t = curve.parameter_at_length_from(spacing * k as f64, t);
        points.push(curve.f(t));
    }
    points.push(end);
    Ok(points)
}
