//! The dimensioned scalar.
//!
//! Design goals:
//! - No raw floats in geometric logic
//! - Mixing incompatible dimensions does not compile
//! - Bare numbers only become quantities through a named unit

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use crate::errors::NumericError;

use super::dimension::{DimDiv, DimInv, DimMul, Dimension, DivDim, InvDim, MulDim};
use super::real::Real;

/// A value of numeric type `N` carrying the dimension `D`.
///
/// The value is stored in SI base units (meter, kilogram, second, ampere,
/// radian, kelvin, candela, mole).
#[repr(transparent)]
pub struct Quantity<D, N = f64> {
    value: N,
    dim: PhantomData<D>,
}

impl<D, N> Quantity<D, N> {
    /// Wrap a value already expressed in SI base units.
    #[inline]
    pub(crate) const fn from_base(value: N) -> Self {
        Quantity {
            value,
            dim: PhantomData,
        }
    }
}

impl<D, N: Real> Quantity<D, N> {
    /// `value` measured in `unit`.
    ///
    /// ```
    /// use fieldcurve::units::{Length, defs::INCH};
    /// let l: Length = Length::new(12.0, INCH);
    /// assert!((l.convert(INCH) - 12.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn new(value: N, unit: Quantity<D, f64>) -> Self {
        Self::from_base(value * N::of(unit.value))
    }

    /// Like [`Quantity::new`], but rejects NaN and infinite input.
    pub fn try_new(value: N, unit: Quantity<D, f64>) -> Result<Self, NumericError> {
        if value.is_nan() {
            Err(NumericError::NaN)
        } else if value.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Self::new(value, unit))
        }
    }

    /// The zero quantity.
    #[inline]
    pub fn zero() -> Self {
        Self::from_base(N::zero())
    }

    /// This quantity expressed as a number of `unit`.
    #[inline]
    pub fn convert(self, unit: Quantity<D, f64>) -> N {
        self.value / N::of(unit.value)
    }

    /// Raw value in SI base units (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> N {
        self.value
    }

    /// Change the storage type.
    #[inline]
    pub fn cast<M: Real>(self) -> Quantity<D, M> {
        Quantity::from_base(M::of(self.value.as_f64()))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_base(self.value.abs())
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::from_base(self.value.min(other.value))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::from_base(self.value.max(other.value))
    }

    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// -1, 0 or +1 following the sign of the value (0 for zero).
    #[inline]
    pub fn signum(self) -> N {
        if self.value == N::zero() {
            N::zero()
        } else {
            self.value.signum()
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    #[inline]
    pub fn square(self) -> Quantity<MulDim<D, D>, N>
    where
        D: DimMul<D>,
    {
        Quantity::from_base(self.value * self.value)
    }

    #[inline]
    pub fn cube(self) -> Quantity<MulDim<MulDim<D, D>, D>, N>
    where
        D: DimMul<D>,
        MulDim<D, D>: DimMul<D>,
    {
        Quantity::from_base(self.value * self.value * self.value)
    }

    /// Reciprocal, `1 / self`.
    #[inline]
    pub fn recip(self) -> Quantity<InvDim<D>, N>
    where
        D: DimInv,
    {
        Quantity::from_base(self.value.recip())
    }
}

// Manual impls: deriving would put bounds on the phantom dimension.

impl<D, N: Copy> Clone for Quantity<D, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, N: Copy> Copy for Quantity<D, N> {}

impl<D, N: Real> Default for Quantity<D, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D, N: fmt::Debug> fmt::Debug for Quantity<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quantity").field(&self.value).finish()
    }
}

impl<D, N: PartialEq> PartialEq for Quantity<D, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D, N: PartialOrd> PartialOrd for Quantity<D, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<D: Dimension, N: Real> fmt::Display for Quantity<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        let suffix = D::vector().suffix();
        if !suffix.is_empty() {
            write!(f, " {suffix}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Same-dimension arithmetic
// ============================================================================

impl<D, N: Real> Add for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_base(self.value + rhs.value)
    }
}

impl<D, N: Real> Sub for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_base(self.value - rhs.value)
    }
}

impl<D, N: Real> Neg for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_base(-self.value)
    }
}

/// Floating-point remainder; the sign follows the dividend.
impl<D, N: Real> Rem for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        Self::from_base(self.value % rhs.value)
    }
}

impl<D, N: Real> AddAssign for Quantity<D, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<D, N: Real> SubAssign for Quantity<D, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<D, N: Real> Sum for Quantity<D, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

// ============================================================================
// Scaling by bare numbers
// ============================================================================

impl<D, N: Real> Mul<N> for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: N) -> Self {
        Self::from_base(self.value * rhs)
    }
}

impl<D, N: Real> Div<N> for Quantity<D, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: N) -> Self {
        Self::from_base(self.value / rhs)
    }
}

impl<D, N: Real> MulAssign<N> for Quantity<D, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        self.value = self.value * rhs;
    }
}

impl<D, N: Real> DivAssign<N> for Quantity<D, N> {
    #[inline]
    fn div_assign(&mut self, rhs: N) {
        self.value = self.value / rhs;
    }
}

macro_rules! scalar_lhs_ops {
    ($($t:ty),*) => {$(
        impl<D> Mul<Quantity<D, $t>> for $t {
            type Output = Quantity<D, $t>;
            #[inline]
            fn mul(self, rhs: Quantity<D, $t>) -> Quantity<D, $t> {
                Quantity::from_base(self * rhs.value)
            }
        }

        impl<D: DimInv> Div<Quantity<D, $t>> for $t {
            type Output = Quantity<InvDim<D>, $t>;
            #[inline]
            fn div(self, rhs: Quantity<D, $t>) -> Quantity<InvDim<D>, $t> {
                Quantity::from_base(self / rhs.value)
            }
        }
    )*};
}

scalar_lhs_ops!(f32, f64);

// ============================================================================
// Dimension-combining arithmetic
// ============================================================================

impl<D1, D2, N> Mul<Quantity<D2, N>> for Quantity<D1, N>
where
    D1: DimMul<D2>,
    N: Real,
{
    type Output = Quantity<MulDim<D1, D2>, N>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, N>) -> Self::Output {
        Quantity::from_base(self.value * rhs.value)
    }
}

impl<D1, D2, N> Div<Quantity<D2, N>> for Quantity<D1, N>
where
    D1: DimDiv<D2>,
    N: Real,
{
    type Output = Quantity<DivDim<D1, D2>, N>;
    #[inline]
    fn div(self, rhs: Quantity<D2, N>) -> Self::Output {
        Quantity::from_base(self.value / rhs.value)
    }
}
