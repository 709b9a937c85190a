//! Cubic Bezier curves.
//!
//! The four control points are converted once per edit into monomial
//! coefficients, so each sample is a short Horner evaluation instead of a
//! Bernstein blend.

use crate::geometry::Point;
use crate::log::debug;
use crate::units::Length;

use super::{Curve, SolverConfig};

/// Position basis: rows give the t³, t², t and constant coefficients.
const POSITION_BASIS: [[f64; 4]; 4] = [
    [-1.0, 3.0, -3.0, 1.0],
    [3.0, -6.0, 3.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0],
];

/// First-derivative basis: t², t and constant rows.
const VELOCITY_BASIS: [[f64; 4]; 3] = [
    [-3.0, 9.0, -9.0, 3.0],
    [6.0, -12.0, 6.0, 0.0],
    [-3.0, 3.0, 0.0, 0.0],
];

/// Second-derivative basis: t and constant rows.
const ACCELERATION_BASIS: [[f64; 4]; 2] = [[-6.0, 18.0, -18.0, 6.0], [6.0, -12.0, 6.0, 0.0]];

fn contract<const R: usize>(basis: [[f64; 4]; R], points: &[Point; 4]) -> [Point; R] {
    basis.map(|row| {
        row.iter()
            .zip(points)
            .fold(Point::zero(), |acc, (&k, &p)| acc + p * k)
    })
}

/// Derived state rebuilt from the control points.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Coefficients {
    position: [Point; 4],
    velocity: [Point; 3],
    acceleration: [Point; 2],
}

impl Coefficients {
    fn from_points(points: &[Point; 4]) -> Self {
        Coefficients {
            position: contract(POSITION_BASIS, points),
            velocity: contract(VELOCITY_BASIS, points),
            acceleration: contract(ACCELERATION_BASIS, points),
        }
    }
}

/// A cubic Bezier defined by start, two interior controls and end.
///
/// Coefficients and the cached total length always match the control
/// points: every edit builds a complete replacement and swaps it in with a
/// single assignment.
///
/// ```
/// use fieldcurve::curve::{CubicBezier, Curve};
/// use fieldcurve::geometry::Point;
///
/// let curve = CubicBezier::new(
///     Point::from_inches(0.0, 0.0),
///     Point::from_inches(10.0, 0.0),
///     Point::from_inches(0.0, 10.0),
///     Point::from_inches(24.0, 24.0),
/// );
/// assert_eq!(curve.f(1.0), Point::from_inches(24.0, 24.0));
/// let t = curve.parameter_at_length(curve.total_length());
/// assert!((t - 1.0).abs() < 1e-3);
/// ```
#[derive(Clone, Debug)]
pub struct CubicBezier {
    points: [Point; 4],
    coefficients: Coefficients,
    length: Length,
    config: SolverConfig,
}

impl CubicBezier {
    pub fn new(start: Point, control0: Point, control1: Point, end: Point) -> Self {
        Self::from_points([start, control0, control1, end])
    }

    /// Control points in order: start, control 0, control 1, end.
    pub fn from_points(points: [Point; 4]) -> Self {
        Self::with_config(points, SolverConfig::default())
    }

    pub fn with_config(points: [Point; 4], config: SolverConfig) -> Self {
        let mut curve = CubicBezier {
            points,
            coefficients: Coefficients::from_points(&points),
            length: Length::zero(),
            config,
        };
        curve.length = curve.arc_length(1.0);
        debug!(
            length_in = curve.length.to_inches(),
            "rebuilt bezier coefficients"
        );
        curve
    }

    /// Control points in order: start, control 0, control 1, end.
    pub fn control_points(&self) -> [Point; 4] {
        self.points
    }

    /// Replace all four control points.
    ///
    /// Identical input is a no-op returning `false`. Otherwise coefficients
    /// and cached length are rebuilt together and `true` is returned.
    pub fn update_control_points(&mut self, points: [Point; 4]) -> bool {
        if points == self.points {
            return false;
        }
        *self = self.with_control_points(points);
        true
    }

    /// A new curve with these control points and the same solver settings.
    pub fn with_control_points(&self, points: [Point; 4]) -> CubicBezier {
        CubicBezier::with_config(points, self.config.clone())
    }

    /// A copy of this curve with different solver settings.
    pub fn with_solver(&self, config: SolverConfig) -> CubicBezier {
        CubicBezier::with_config(self.points, config)
    }
}

impl From<[Point; 4]> for CubicBezier {
    fn from(points: [Point; 4]) -> Self {
        CubicBezier::from_points(points)
    }
}

impl PartialEq for CubicBezier {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points && self.config == other.config
    }
}

impl Curve for CubicBezier {
    fn endpoints(&self) -> [Point; 2] {
        [self.points[0], self.points[3]]
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn f(&self, t: f64) -> Point {
        if t == 0.0 {
            return self.points[0];
        }
        if t == 1.0 {
            return self.points[3];
        }
        let [c0, c1, c2, c3] = self.coefficients.position;
        ((c0 * t + c1) * t + c2) * t + c3
    }

    fn df(&self, t: f64) -> Point {
        let [d0, d1, d2] = self.coefficients.velocity;
        (d0 * t + d1) * t + d2
    }

    fn ddf(&self, t: f64) -> Point {
        let [e0, e1] = self.coefficients.acceleration;
        e0 * t + e1
    }

    fn total_length(&self) -> Length {
        self.length
    }

    fn update_endpoints(&mut self, start: Point, end: Point) -> bool {
        let [_, control0, control1, _] = self.points;
        self.update_control_points([start, control0, control1, end])
    }
}
