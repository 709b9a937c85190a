//! Angles, trigonometry and the compass convention.
//!
//! Standard angles are measured counter-clockwise from the positive x axis.
//! Compass angles are measured clockwise from north (the positive y axis):
//! `standard = 90° - compass`.

use std::ops::Neg;

use super::defs::{DEGREE, RADIAN, ROTATION};
use super::{Angle, Number, Quantity, Real};

impl Angle {
    pub fn from_radians(value: f64) -> Self {
        Self::new(value, RADIAN)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self::new(value, DEGREE)
    }

    pub fn from_rotations(value: f64) -> Self {
        Self::new(value, ROTATION)
    }

    /// Standard angle from a compass bearing in radians.
    pub fn from_compass_radians(value: f64) -> Self {
        Self::from_compass(Self::from_radians(value))
    }

    /// Standard angle from a compass bearing in degrees.
    pub fn from_compass_degrees(value: f64) -> Self {
        Self::from_compass(Self::from_degrees(value))
    }

    /// Standard angle from a compass bearing in rotations.
    pub fn from_compass_rotations(value: f64) -> Self {
        Self::from_compass(Self::from_rotations(value))
    }
}

impl<N: Real> Angle<N> {
    /// Standard angle of a bearing measured clockwise from north.
    pub fn from_compass(bearing: Self) -> Self {
        Self::quarter_turn() - bearing
    }

    pub fn to_radians(self) -> N {
        self.convert(RADIAN)
    }

    pub fn to_degrees(self) -> N {
        self.convert(DEGREE)
    }

    pub fn to_rotations(self) -> N {
        self.convert(ROTATION)
    }

    pub fn to_compass_radians(self) -> N {
        (Self::quarter_turn() - self).to_radians()
    }

    pub fn to_compass_degrees(self) -> N {
        (Self::quarter_turn() - self).to_degrees()
    }

    pub fn to_compass_rotations(self) -> N {
        (Self::quarter_turn() - self).to_rotations()
    }

    /// Remainder of a full turn, keeping the sign: (-360°, 360°).
    pub fn constrain_360(self) -> Self {
        self % Self::full_turn()
    }

    /// Wrapped into [0, 2π).
    pub fn constrain_2pi(self) -> Self {
        let turn = Self::full_turn();
        ((self % turn) + turn) % turn
    }

    /// Wrapped into [-180°, 180°).
    pub fn constrain_180(self) -> Self {
        let half = Self::new(N::of(180.0), DEGREE);
        let shifted = (self + half) % Self::full_turn();
        if shifted < Self::zero() {
            shifted + half
        } else {
            shifted - half
        }
    }

    #[inline]
    fn quarter_turn() -> Self {
        Quantity::from_base(N::FRAC_PI_2())
    }

    #[inline]
    fn full_turn() -> Self {
        Quantity::from_base(N::TAU())
    }
}

pub fn sin<N: Real>(angle: Angle<N>) -> Number<N> {
    Quantity::from_base(angle.raw().sin())
}

pub fn cos<N: Real>(angle: Angle<N>) -> Number<N> {
    Quantity::from_base(angle.raw().cos())
}

pub fn tan<N: Real>(angle: Angle<N>) -> Number<N> {
    Quantity::from_base(angle.raw().tan())
}

pub fn asin<N: Real>(ratio: Number<N>) -> Angle<N> {
    Quantity::from_base(ratio.raw().asin())
}

pub fn acos<N: Real>(ratio: Number<N>) -> Angle<N> {
    Quantity::from_base(ratio.raw().acos())
}

pub fn atan<N: Real>(ratio: Number<N>) -> Angle<N> {
    Quantity::from_base(ratio.raw().atan())
}

/// Angle of the vector `(x, y)`; both legs share any dimension.
pub fn atan2<D, N: Real>(y: Quantity<D, N>, x: Quantity<D, N>) -> Angle<N> {
    Quantity::from_base(y.raw().atan2(x.raw()))
}

/// A compass bearing whose conversion to a standard angle is deferred.
///
/// `-CompassAngle::from_degrees(30.0)` must mean a bearing of -30°, i.e.
/// a standard angle of 120°. Negating after conversion would give -60°
/// instead. To keep the order right this type is single-use: it is neither
/// `Clone` nor `Copy`, supports only negation, and has to be converted into
/// an [`Angle`] (consuming it) before any other arithmetic.
///
/// ```
/// use fieldcurve::units::{Angle, CompassAngle};
///
/// let heading: Angle = (-CompassAngle::from_degrees(30.0)).into();
/// assert!((heading.to_degrees() - 120.0).abs() < 1e-9);
/// ```
///
/// ```compile_fail
/// use fieldcurve::units::CompassAngle;
/// let a = CompassAngle::from_degrees(10.0);
/// let _ = a * 2.0;
/// ```
///
/// ```compile_fail
/// use fieldcurve::units::{Angle, CompassAngle};
/// let bearing = CompassAngle::from_degrees(10.0);
/// let first: Angle = bearing.into();
/// let second: Angle = bearing.into();
/// ```
///
/// ```compile_fail
/// use fieldcurve::units::CompassAngle;
/// let bearing = CompassAngle::from_degrees(10.0);
/// let _copy = bearing.clone();
/// ```
#[derive(Debug)]
#[must_use = "a compass angle does nothing until it is converted into an Angle"]
pub struct CompassAngle<N: Real = f64> {
    radians: N,
}

impl CompassAngle {
    pub fn from_radians(value: f64) -> Self {
        Self::new(value, RADIAN)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self::new(value, DEGREE)
    }

    pub fn from_rotations(value: f64) -> Self {
        Self::new(value, ROTATION)
    }
}

impl<N: Real> CompassAngle<N> {
    /// `value` bearing units of `unit`, e.g. `CompassAngle::<f32>::new(30.0, DEGREE)`.
    pub fn new(value: N, unit: Angle<f64>) -> Self {
        Self {
            radians: Angle::new(value, unit).raw(),
        }
    }

    fn to_standard(&self) -> Angle<N> {
        Angle::from_compass(Quantity::from_base(self.radians))
    }
}

impl<N: Real> Neg for CompassAngle<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            radians: -self.radians,
        }
    }
}

impl<N: Real> From<CompassAngle<N>> for Angle<N> {
    fn from(compass: CompassAngle<N>) -> Self {
        compass.to_standard()
    }
}

impl<N: Real> PartialEq<CompassAngle<N>> for Angle<N> {
    fn eq(&self, other: &CompassAngle<N>) -> bool {
        *self == other.to_standard()
    }
}
