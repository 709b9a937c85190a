//! Parametric planar curves.
//!
//! A curve maps a parameter `t` in [0, 1] to a field position. Every curve
//! can report its derivatives, signed curvature and cumulative arc length, and
//! can invert an arc length back to a parameter.
//!
//! [`AnyCurve`] dispatches statically over the known variants; use
//! `Box<dyn Curve>` where a renderer needs an open set.

mod bezier;
pub mod config;
mod line;
mod model;
pub mod sampling;

pub use bezier::CubicBezier;
pub use config::{GaussLegendre, SolverConfig};
pub use line::LineSegment;
pub use model::{BezierModel, ControlIndex};

use enum_dispatch::enum_dispatch;

use crate::geometry::{Point, Pose};
use crate::log::warn;
use crate::units::{Curvature, Length};

/// A parametric curve over `t` in [0, 1].
///
/// Sampling methods do not clamp `t`; values outside the unit interval
/// extrapolate.
#[enum_dispatch]
pub trait Curve {
    /// Start and end points.
    fn endpoints(&self) -> [Point; 2];

    /// Solver settings used by the arc-length defaults.
    fn config(&self) -> &SolverConfig;

    /// Position at `t`.
    fn f(&self, t: f64) -> Point;

    /// First derivative with respect to `t`.
    fn df(&self, t: f64) -> Point;

    /// Second derivative with respect to `t`.
    fn ddf(&self, t: f64) -> Point;

    /// Magnitude of the first derivative.
    fn speed(&self, t: f64) -> Length {
        self.df(t).magnitude()
    }

    /// Signed curvature, positive when turning counter-clockwise.
    fn curvature(&self, t: f64) -> Curvature {
        self.curvature_with_df(t, self.df(t))
    }

    /// Signed curvature reusing an already evaluated `df(t)`.
    ///
    /// Returns zero when the cubed speed falls below the configured threshold.
    fn curvature_with_df(&self, t: f64, df: Point) -> Curvature {
        let speed_cubed = df.magnitude().cube();
        if speed_cubed < self.config().min_speed_cubed {
            return Curvature::zero();
        }
        df.cross(self.ddf(t)) / speed_cubed
    }

    /// Arc length from the start to `t`, by Gauss-Legendre quadrature.
    fn arc_length(&self, t: f64) -> Length {
        self.config().quadrature.integrate(t, |u| self.speed(u))
    }

    fn total_length(&self) -> Length {
        self.arc_length(1.0)
    }

    /// Parameter at which the arc length reaches `target`, starting Newton's
    /// method from `guess`.
    ///
    /// Best effort: the iterate is clamped to [0, 1] after every step and
    /// the last one is returned once the iteration cap is hit, so the result
    /// is an approximation rather than an exact root.
    fn parameter_at_length_from(&self, target: Length, guess: f64) -> f64 {
        let config = self.config();
        let mut t = if guess.is_finite() {
            guess.clamp(0.0, 1.0)
        } else {
            0.5
        };

        for _ in 0..config.max_iterations {
            let residual = self.arc_length(t) - target;
            if residual.abs() < config.tolerance {
                return t;
            }
            let speed = self.speed(t);
            t = if speed > Length::zero() {
                (t - (residual / speed).raw()).clamp(0.0, 1.0)
            } else if residual > Length::zero() {
                // zero speed: the Newton step is unbounded
                0.0
            } else {
                1.0
            };
        }

        let residual = self.arc_length(t) - target;
        if residual.abs() >= config.tolerance {
            warn!(
                target_m = target.raw(),
                residual_m = residual.raw(),
                t,
                "arc-length inversion hit the iteration cap"
            );
        }
        t
    }

    /// [`Curve::parameter_at_length_from`] starting at `t = 0.5`.
    fn parameter_at_length(&self, target: Length) -> f64 {
        self.parameter_at_length_from(target, 0.5)
    }

    /// Position and tangent heading at `t`.
    fn pose_at(&self, t: f64) -> Pose {
        Pose::new(self.f(t), self.df(t).theta())
    }

    /// Replace the endpoints and rebuild any derived state.
    ///
    /// Returns `false`, doing nothing, when both endpoints are unchanged.
    fn update_endpoints(&mut self, start: Point, end: Point) -> bool;
}

/// The closed set of curve variants.
#[enum_dispatch(Curve)]
#[derive(Clone, Debug)]
pub enum AnyCurve {
    CubicBezier,
    LineSegment,
}
