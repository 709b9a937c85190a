//! Straight segments.

use crate::geometry::Point;
use crate::units::{Curvature, Length};

use super::{Curve, SolverConfig};

/// A straight segment, parameterized at constant speed.
///
/// Arc length and its inverse are closed-form.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
    config: SolverConfig,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self::with_config(start, end, SolverConfig::default())
    }

    pub fn with_config(start: Point, end: Point, config: SolverConfig) -> Self {
        LineSegment { start, end, config }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

impl Curve for LineSegment {
    fn endpoints(&self) -> [Point; 2] {
        [self.start, self.end]
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn f(&self, t: f64) -> Point {
        if t == 0.0 {
            return self.start;
        }
        if t == 1.0 {
            return self.end;
        }
        self.start.lerp(self.end, t)
    }

    fn df(&self, _t: f64) -> Point {
        self.end - self.start
    }

    fn ddf(&self, _t: f64) -> Point {
        Point::zero()
    }

    fn curvature(&self, _t: f64) -> Curvature {
        Curvature::zero()
    }

    fn curvature_with_df(&self, _t: f64, _df: Point) -> Curvature {
        Curvature::zero()
    }

    fn arc_length(&self, t: f64) -> Length {
        self.start.distance_to(self.end) * t
    }

    /// Closed form; `guess` is ignored and the result is clamped to [0, 1].
    fn parameter_at_length_from(&self, target: Length, _guess: f64) -> f64 {
        let length = self.start.distance_to(self.end);
        if length == Length::zero() {
            return 0.0;
        }
        (target / length).raw().clamp(0.0, 1.0)
    }

    fn update_endpoints(&mut self, start: Point, end: Point) -> bool {
        if start == self.start && end == self.end {
            return false;
        }
        self.start = start;
        self.end = end;
        true
    }
}
