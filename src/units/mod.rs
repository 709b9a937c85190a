//! Physical quantities with compile-time dimension checking.
//!
//! ```
//! use fieldcurve::units::{Length, Time, LinearVelocity};
//!
//! let d = Length::from_inches(48.0);
//! let t = Time::from_seconds(2.0);
//! let v: LinearVelocity = d / t;
//! assert!((v.convert(fieldcurve::units::defs::INCH_PER_SECOND) - 24.0).abs() < 1e-9);
//! ```
//!
//! Adding quantities of different dimensions is rejected by the compiler:
//!
//! ```compile_fail
//! use fieldcurve::units::{Angle, Length};
//! let _ = Length::from_inches(1.0) + Angle::from_degrees(90.0);
//! ```

mod angle;
pub mod defs;
pub mod dimension;
mod parse;
mod quantity;
mod real;
mod temperature;

pub use angle::{CompassAngle, acos, asin, atan, atan2, cos, sin, tan};
pub use dimension::{DimVector, Dimension};
pub use parse::{DynQuantity, parse_quantity};
pub use quantity::Quantity;
pub use real::Real;

use dimension as dim;

pub type Number<N = f64> = Quantity<dim::Dimensionless, N>;
pub type Length<N = f64> = Quantity<dim::Length, N>;
pub type Area<N = f64> = Quantity<dim::Area, N>;
pub type Volume<N = f64> = Quantity<dim::Volume, N>;
pub type Mass<N = f64> = Quantity<dim::Mass, N>;
pub type Time<N = f64> = Quantity<dim::Time, N>;
pub type Current<N = f64> = Quantity<dim::Current, N>;
pub type Angle<N = f64> = Quantity<dim::Angle, N>;
pub type Temperature<N = f64> = Quantity<dim::Temperature, N>;
pub type LuminousIntensity<N = f64> = Quantity<dim::LuminousIntensity, N>;
pub type Amount<N = f64> = Quantity<dim::Amount, N>;
pub type Curvature<N = f64> = Quantity<dim::Curvature, N>;
pub type Frequency<N = f64> = Quantity<dim::Frequency, N>;
pub type LinearVelocity<N = f64> = Quantity<dim::LinearVelocity, N>;
pub type LinearAcceleration<N = f64> = Quantity<dim::LinearAcceleration, N>;
pub type LinearJerk<N = f64> = Quantity<dim::LinearJerk, N>;
pub type AngularVelocity<N = f64> = Quantity<dim::AngularVelocity, N>;
pub type AngularAcceleration<N = f64> = Quantity<dim::AngularAcceleration, N>;
pub type AngularJerk<N = f64> = Quantity<dim::AngularJerk, N>;

/// Quantity type of `A * B` for two quantity dimensions.
pub type Multiplied<A, B, N = f64> = Quantity<dim::MulDim<A, B>, N>;
/// Quantity type of `A / B` for two quantity dimensions.
pub type Divided<A, B, N = f64> = Quantity<dim::DivDim<A, B>, N>;

// Named constructors build `f64` quantities so that `Length::from_inches(24.0)`
// needs no annotation. Other storage types go through `Quantity::new`.

impl Number {
    /// Plain number as a dimensionless quantity.
    #[inline]
    pub fn from_value(value: f64) -> Self {
        Quantity::from_base(value)
    }
}

impl Length {
    pub fn from_meters(value: f64) -> Self {
        Self::new(value, defs::METER)
    }

    pub fn from_centimeters(value: f64) -> Self {
        Self::new(value, defs::CENTIMETER)
    }

    pub fn from_millimeters(value: f64) -> Self {
        Self::new(value, defs::MILLIMETER)
    }

    pub fn from_inches(value: f64) -> Self {
        Self::new(value, defs::INCH)
    }

    pub fn from_feet(value: f64) -> Self {
        Self::new(value, defs::FOOT)
    }

    pub fn from_tiles(value: f64) -> Self {
        Self::new(value, defs::TILE)
    }
}

impl<N: Real> Length<N> {
    pub fn to_meters(self) -> N {
        self.convert(defs::METER)
    }

    pub fn to_centimeters(self) -> N {
        self.convert(defs::CENTIMETER)
    }

    pub fn to_millimeters(self) -> N {
        self.convert(defs::MILLIMETER)
    }

    pub fn to_inches(self) -> N {
        self.convert(defs::INCH)
    }

    pub fn to_feet(self) -> N {
        self.convert(defs::FOOT)
    }

    pub fn to_tiles(self) -> N {
        self.convert(defs::TILE)
    }
}

impl Time {
    pub fn from_seconds(value: f64) -> Self {
        Self::new(value, defs::SECOND)
    }

    pub fn from_millis(value: f64) -> Self {
        Self::new(value, defs::MILLISECOND)
    }

    pub fn from_minutes(value: f64) -> Self {
        Self::new(value, defs::MINUTE)
    }
}

impl<N: Real> Time<N> {
    pub fn to_seconds(self) -> N {
        self.convert(defs::SECOND)
    }

    pub fn to_millis(self) -> N {
        self.convert(defs::MILLISECOND)
    }

    pub fn to_minutes(self) -> N {
        self.convert(defs::MINUTE)
    }
}

impl Mass {
    pub fn from_kilograms(value: f64) -> Self {
        Self::new(value, defs::KILOGRAM)
    }

    pub fn from_pounds(value: f64) -> Self {
        Self::new(value, defs::POUND)
    }
}

impl<N: Real> Mass<N> {
    pub fn to_kilograms(self) -> N {
        self.convert(defs::KILOGRAM)
    }

    pub fn to_pounds(self) -> N {
        self.convert(defs::POUND)
    }
}
