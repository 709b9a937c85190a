//! Error types with rich diagnostics using miette
//!
//! Parse errors carry source spans so a numeric input field can point at the
//! offending unit.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::units::DimVector;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (field name or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Numeric Errors
// ============================================================================

/// Validation failure for a caller-provided number.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    #[error("value is NaN")]
    #[diagnostic(code(fieldcurve::numeric::nan))]
    NaN,

    #[error("value is infinite")]
    #[diagnostic(code(fieldcurve::numeric::infinite))]
    Infinite,

    #[error("value is zero")]
    #[diagnostic(code(fieldcurve::numeric::zero))]
    Zero,

    #[error("value is negative")]
    #[diagnostic(code(fieldcurve::numeric::negative))]
    Negative,

    #[error("more than {limit} samples requested")]
    #[diagnostic(
        code(fieldcurve::numeric::too_many_samples),
        help("increase the spacing")
    )]
    TooManySamples { limit: usize },
}

impl NumericError {
    /// Accept only finite, strictly positive values.
    pub fn check_positive(value: f64) -> Result<f64, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else if value == 0.0 {
            Err(NumericError::Zero)
        } else if value < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(value)
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while parsing a quantity from text
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("invalid quantity syntax: {message}")]
    #[diagnostic(
        code(fieldcurve::parse::syntax),
        help("write a number followed by an optional unit, e.g. `24 in` or `3.5 m/s^2`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown unit: {unit}")]
    #[diagnostic(code(fieldcurve::parse::unknown_unit))]
    UnknownUnit {
        unit: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a known unit")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("unit `{unit}` must stand alone")]
    #[diagnostic(
        code(fieldcurve::parse::standalone_unit),
        help("offset and compass units cannot be combined with other units or raised to a power")
    )]
    StandaloneUnit {
        unit: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("used in a compound unit")]
        span: SourceSpan,
    },

    #[error("invalid number: {message}")]
    #[diagnostic(code(fieldcurve::parse::invalid_number))]
    InvalidNumber {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid number")]
        span: SourceSpan,
    },
}

// ============================================================================
// Quantity Errors
// ============================================================================

/// Runtime dimension checks on dynamically dimensioned values
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    #[diagnostic(code(fieldcurve::quantity::dimension_mismatch))]
    DimensionMismatch { expected: DimVector, found: DimVector },
}

// ============================================================================
// Solver Errors
// ============================================================================

/// Rejected quadrature rule
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("quadrature rule has no nodes")]
    #[diagnostic(code(fieldcurve::quadrature::empty))]
    Empty,

    #[error("quadrature rule has {nodes} nodes but {weights} weights")]
    #[diagnostic(code(fieldcurve::quadrature::length_mismatch))]
    LengthMismatch { nodes: usize, weights: usize },

    #[error("quadrature rule contains a non-finite value at index {index}")]
    #[diagnostic(code(fieldcurve::quadrature::non_finite))]
    NonFinite { index: usize },

    #[error("quadrature node {node} at index {index} lies outside [-1, 1]")]
    #[diagnostic(code(fieldcurve::quadrature::node_out_of_range))]
    NodeOutOfRange { index: usize, node: f64 },
}

// ============================================================================
// Crate Error
// ============================================================================

/// Any error produced by this crate
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Quadrature(#[from] QuadratureError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_positive_classifies() {
        assert_eq!(NumericError::check_positive(2.0), Ok(2.0));
        assert_eq!(NumericError::check_positive(0.0), Err(NumericError::Zero));
        assert_eq!(NumericError::check_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(NumericError::check_positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(
            NumericError::check_positive(f64::INFINITY),
            Err(NumericError::Infinite)
        );
    }

    #[test]
    fn mismatch_message_names_both_dimensions() {
        let err = QuantityError::DimensionMismatch {
            expected: DimVector([1, 0, 0, 0, 0, 0, 0, 0]),
            found: DimVector([0, 0, 0, 0, 1, 0, 0, 0]),
        };
        insta::assert_snapshot!(err.to_string(), @"dimension mismatch: expected m, found rad");
    }

    #[test]
    fn crate_error_is_transparent() {
        let err: Error = NumericError::Zero.into();
        assert_eq!(err.to_string(), "value is zero");
    }
}
