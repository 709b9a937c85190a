//! Numerical solver settings for arc length and its inverse.

use std::borrow::Cow;

use crate::errors::QuadratureError;
use crate::units::{Length, Quantity, Volume};

/// Default solver constants.
pub mod defaults {
    use crate::units::{Length, Quantity, Volume};

    /// Five-point Gauss-Legendre nodes on [-1, 1].
    pub const GAUSS_LEGENDRE_5_NODES: [f64; 5] = [
        -0.906_179_845_938_664,
        -0.538_469_310_105_683_1,
        0.0,
        0.538_469_310_105_683_1,
        0.906_179_845_938_664,
    ];

    /// Weights matching [`GAUSS_LEGENDRE_5_NODES`].
    pub const GAUSS_LEGENDRE_5_WEIGHTS: [f64; 5] = [
        0.236_926_885_056_189_1,
        0.478_628_670_499_366_5,
        0.568_888_888_888_888_9,
        0.478_628_670_499_366_5,
        0.236_926_885_056_189_1,
    ];

    /// Newton iteration cap for arc-length inversion.
    pub const MAX_ITERATIONS: u32 = 20;

    /// Newton stops once the arc-length residual is below this (0.01 in).
    pub const TOLERANCE: Length = Quantity::from_base(0.01 * 0.0254);

    /// Below this cubed speed curvature is reported as zero.
    pub const MIN_SPEED_CUBED: Volume = Quantity::from_base(1e-6);
}

/// A Gauss-Legendre quadrature rule on [-1, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct GaussLegendre {
    nodes: Cow<'static, [f64]>,
    weights: Cow<'static, [f64]>,
}

impl GaussLegendre {
    /// The five-point rule, exact for polynomials up to degree nine.
    pub const FIVE_POINT: GaussLegendre = GaussLegendre {
        nodes: Cow::Borrowed(&defaults::GAUSS_LEGENDRE_5_NODES),
        weights: Cow::Borrowed(&defaults::GAUSS_LEGENDRE_5_WEIGHTS),
    };

    /// Build a custom rule.
    ///
    /// The rule must be non-empty, have one weight per node, contain only
    /// finite values, and keep every node inside [-1, 1].
    pub fn new(nodes: Vec<f64>, weights: Vec<f64>) -> Result<Self, QuadratureError> {
        if nodes.is_empty() {
            return Err(QuadratureError::Empty);
        }
        if nodes.len() != weights.len() {
            return Err(QuadratureError::LengthMismatch {
                nodes: nodes.len(),
                weights: weights.len(),
            });
        }
        for (index, (&node, &weight)) in nodes.iter().zip(&weights).enumerate() {
            if !node.is_finite() || !weight.is_finite() {
                return Err(QuadratureError::NonFinite { index });
            }
            if !(-1.0..=1.0).contains(&node) {
                return Err(QuadratureError::NodeOutOfRange { index, node });
            }
        }
        Ok(GaussLegendre {
            nodes: Cow::Owned(nodes),
            weights: Cow::Owned(weights),
        })
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Integral of `integrand` over the parameter interval [0, upper].
    ///
    /// Nodes are mapped from [-1, 1] with `upper/2 * (1 + x)`.
    pub fn integrate<D>(&self, upper: f64, integrand: impl Fn(f64) -> Quantity<D>) -> Quantity<D> {
        let half = upper / 2.0;
        let sum: Quantity<D> = self
            .nodes
            .iter()
            .zip(self.weights.iter())
            .map(|(&x, &w)| integrand(half * (1.0 + x)) * w)
            .sum();
        sum * half
    }
}

impl Default for GaussLegendre {
    fn default() -> Self {
        Self::FIVE_POINT
    }
}

/// Settings shared by the arc-length integrator and its Newton inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    pub quadrature: GaussLegendre,
    pub max_iterations: u32,
    pub tolerance: Length,
    pub min_speed_cubed: Volume,
}

impl SolverConfig {
    pub const DEFAULT: SolverConfig = SolverConfig {
        quadrature: GaussLegendre::FIVE_POINT,
        max_iterations: defaults::MAX_ITERATIONS,
        tolerance: defaults::TOLERANCE,
        min_speed_cubed: defaults::MIN_SPEED_CUBED,
    };

    pub fn with_quadrature(mut self, quadrature: GaussLegendre) -> Self {
        self.quadrature = quadrature;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Length) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_min_speed_cubed(mut self, min_speed_cubed: Volume) -> Self {
        self.min_speed_cubed = min_speed_cubed;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Number;
    use approx::assert_relative_eq;

    // ==================== Rule validation tests ====================

    #[test]
    fn five_point_weights_sum_to_two() {
        let total: f64 = GaussLegendre::FIVE_POINT.weights().iter().sum();
        assert_relative_eq!(total, 2.0, epsilon = 1e-12);
        assert_eq!(GaussLegendre::default().len(), 5);
    }

    #[test]
    fn rejects_empty_rule() {
        assert_eq!(GaussLegendre::new(vec![], vec![]), Err(QuadratureError::Empty));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            GaussLegendre::new(vec![0.0], vec![1.0, 1.0]),
            Err(QuadratureError::LengthMismatch { nodes: 1, weights: 2 })
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert_eq!(
            GaussLegendre::new(vec![0.0, f64::NAN], vec![1.0, 1.0]),
            Err(QuadratureError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn rejects_nodes_outside_unit_interval() {
        assert_eq!(
            GaussLegendre::new(vec![1.5], vec![2.0]),
            Err(QuadratureError::NodeOutOfRange { index: 0, node: 1.5 })
        );
    }

    // ==================== Integration tests ====================

    #[test]
    fn five_point_is_exact_for_degree_nine() {
        // ∫₀² t⁹ dt = 2¹⁰ / 10
        let integral: Number =
            GaussLegendre::FIVE_POINT.integrate(2.0, |t| Number::from_value(t.powi(9)));
        assert_relative_eq!(integral.raw(), 102.4, epsilon = 1e-9);
    }

    #[test]
    fn midpoint_rule_from_custom_nodes() {
        let midpoint = GaussLegendre::new(vec![0.0], vec![2.0]).unwrap();
        let integral: Number = midpoint.integrate(1.0, |t| Number::from_value(t));
        assert_relative_eq!(integral.raw(), 0.5);
    }

    // ==================== Config tests ====================

    #[test]
    fn default_config_constants() {
        let config = SolverConfig::default();
        assert_eq!(config.max_iterations, 20);
        assert_relative_eq!(config.tolerance.to_inches(), 0.01, epsilon = 1e-12);
        assert_eq!(config.min_speed_cubed.raw(), 1e-6);
        assert_eq!(config.quadrature, GaussLegendre::FIVE_POINT);
    }

    #[test]
    fn builder_overrides() {
        let config = SolverConfig::default()
            .with_max_iterations(50)
            .with_tolerance(Length::from_inches(0.001));
        assert_eq!(config.max_iterations, 50);
        assert_relative_eq!(config.tolerance.to_inches(), 0.001, epsilon = 1e-12);
    }
}
