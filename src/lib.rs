//! Dimensionally-safe parametric curves for field path planning.
//!
//! - [`units`]: physical quantities whose dimensions are checked at compile
//!   time, with named units, trigonometry and text parsing
//! - [`geometry`]: points and poses built from those quantities
//! - [`curve`]: the [`Curve`](curve::Curve) interface, cubic Beziers, arc
//!   length by quadrature and its Newton inverse
//!
//! ```
//! use fieldcurve::curve::{CubicBezier, Curve};
//! use fieldcurve::geometry::Point;
//! use fieldcurve::units::Length;
//!
//! let path = CubicBezier::new(
//!     Point::from_inches(0.0, 0.0),
//!     Point::from_inches(10.0, 0.0),
//!     Point::from_inches(0.0, 10.0),
//!     Point::from_inches(24.0, 24.0),
//! );
//! let halfway = path.parameter_at_length(path.total_length() / 2.0);
//! let here = path.f(halfway);
//! assert!(here.x > Length::zero());
//! ```

pub mod curve;
pub mod errors;
pub mod geometry;
mod log;
pub mod units;

pub use curve::{AnyCurve, CubicBezier, Curve, LineSegment};
pub use errors::{Error, NumericError, ParseError, QuadratureError, QuantityError};
pub use geometry::{Point, Pose, Vector2D};
