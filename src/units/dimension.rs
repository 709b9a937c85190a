//! Type-level dimension vectors.
//!
//! A dimension is a list of eight integer exponents carried in the type
//! system with `typenum` signed integers, in this order: length, mass,
//! time, current, angle, temperature, luminous intensity, amount.
//! Angle is a base dimension of its own so radians never silently collapse
//! into plain numbers.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};

use typenum::{Diff, Integer, N1, N2, N3, Negate, P1, P2, P3, Sum, Z0};

/// Number of base dimensions tracked.
pub const BASE_DIMENSIONS: usize = 8;

/// SI symbol of each base dimension's canonical unit, in exponent order.
const BASE_SYMBOLS: [&str; BASE_DIMENSIONS] = ["m", "kg", "s", "A", "rad", "K", "cd", "mol"];

/// Type-level dimension: one `typenum` integer per base dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dim<L, M, T, I, A, K, J, Mol>(PhantomData<(L, M, T, I, A, K, J, Mol)>);

/// A type usable as the `D` parameter of a quantity.
pub trait Dimension: 'static {
    /// Exponents in base-dimension order.
    const EXPONENTS: [i32; BASE_DIMENSIONS];

    /// Runtime copy of the exponents.
    fn vector() -> DimVector {
        DimVector(Self::EXPONENTS)
    }
}

impl<L, M, T, I, A, K, J, Mol> Dimension for Dim<L, M, T, I, A, K, J, Mol>
where
    L: Integer + 'static,
    M: Integer + 'static,
    T: Integer + 'static,
    I: Integer + 'static,
    A: Integer + 'static,
    K: Integer + 'static,
    J: Integer + 'static,
    Mol: Integer + 'static,
{
    const EXPONENTS: [i32; BASE_DIMENSIONS] =
        [L::I32, M::I32, T::I32, I::I32, A::I32, K::I32, J::I32, Mol::I32];
}

/// Dimension of a product.
pub trait DimMul<Rhs> {
    type Output;
}

/// Dimension of a quotient.
pub trait DimDiv<Rhs> {
    type Output;
}

/// Dimension of a reciprocal.
pub trait DimInv {
    type Output;
}

impl<L1, M1, T1, I1, A1, K1, J1, Mol1, L2, M2, T2, I2, A2, K2, J2, Mol2>
    DimMul<Dim<L2, M2, T2, I2, A2, K2, J2, Mol2>> for Dim<L1, M1, T1, I1, A1, K1, J1, Mol1>
where
    L1: Add<L2>,
    M1: Add<M2>,
    T1: Add<T2>,
    I1: Add<I2>,
    A1: Add<A2>,
    K1: Add<K2>,
    J1: Add<J2>,
    Mol1: Add<Mol2>,
{
    type Output = Dim<
        Sum<L1, L2>,
        Sum<M1, M2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<A1, A2>,
        Sum<K1, K2>,
        Sum<J1, J2>,
        Sum<Mol1, Mol2>,
    >;
}

impl<L1, M1, T1, I1, A1, K1, J1, Mol1, L2, M2, T2, I2, A2, K2, J2, Mol2>
    DimDiv<Dim<L2, M2, T2, I2, A2, K2, J2, Mol2>> for Dim<L1, M1, T1, I1, A1, K1, J1, Mol1>
where
    L1: Sub<L2>,
    M1: Sub<M2>,
    T1: Sub<T2>,
    I1: Sub<I2>,
    A1: Sub<A2>,
    K1: Sub<K2>,
    J1: Sub<J2>,
    Mol1: Sub<Mol2>,
{
    type Output = Dim<
        Diff<L1, L2>,
        Diff<M1, M2>,
        Diff<T1, T2>,
        Diff<I1, I2>,
        Diff<A1, A2>,
        Diff<K1, K2>,
        Diff<J1, J2>,
        Diff<Mol1, Mol2>,
    >;
}

impl<L, M, T, I, A, K, J, Mol> DimInv for Dim<L, M, T, I, A, K, J, Mol>
where
    L: Neg,
    M: Neg,
    T: Neg,
    I: Neg,
    A: Neg,
    K: Neg,
    J: Neg,
    Mol: Neg,
{
    type Output = Dim<
        Negate<L>,
        Negate<M>,
        Negate<T>,
        Negate<I>,
        Negate<A>,
        Negate<K>,
        Negate<J>,
        Negate<Mol>,
    >;
}

/// `A * B` at the type level.
pub type MulDim<A, B> = <A as DimMul<B>>::Output;
/// `A / B` at the type level.
pub type DivDim<A, B> = <A as DimDiv<B>>::Output;
/// `1 / A` at the type level.
pub type InvDim<A> = <A as DimInv>::Output;

// ============================================================================
// Named dimensions
// ============================================================================

pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Volume = Dim<P3, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0, Z0>;
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0, Z0>;
pub type Angle = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0, Z0>;
pub type Temperature = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0, Z0>;
pub type LuminousIntensity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1, Z0>;
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0, P1>;

/// Inverse length; the unit of signed path curvature.
pub type Curvature = Dim<N1, Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0, Z0>;
pub type LinearVelocity = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0, Z0>;
pub type LinearAcceleration = Dim<P1, Z0, N2, Z0, Z0, Z0, Z0, Z0>;
pub type LinearJerk = Dim<P1, Z0, N3, Z0, Z0, Z0, Z0, Z0>;
pub type AngularVelocity = Dim<Z0, Z0, N1, Z0, P1, Z0, Z0, Z0>;
pub type AngularAcceleration = Dim<Z0, Z0, N2, Z0, P1, Z0, Z0, Z0>;
pub type AngularJerk = Dim<Z0, Z0, N3, Z0, P1, Z0, Z0, Z0>;

// ============================================================================
// Runtime dimension vectors
// ============================================================================

/// Dimension exponents known only at runtime (parsed input, diagnostics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimVector(pub [i32; BASE_DIMENSIONS]);

impl DimVector {
    pub const DIMENSIONLESS: DimVector = DimVector([0; BASE_DIMENSIONS]);

    /// Exponents of the static dimension `D`.
    pub fn of<D: Dimension>() -> Self {
        D::vector()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Exponent-wise `self + other * power`, or `None` if an exponent
    /// overflows.
    pub fn combine(self, other: DimVector, power: i32) -> Option<DimVector> {
        let mut out = self.0;
        for (slot, e) in out.iter_mut().zip(other.0) {
            *slot = e.checked_mul(power).and_then(|scaled| slot.checked_add(scaled))?;
        }
        Some(DimVector(out))
    }

    /// Canonical SI suffix, e.g. `m/s^2`, `1/m`, `rad`. Empty when
    /// dimensionless.
    pub fn suffix(&self) -> String {
        let factor = |symbol: &str, exp: i32| {
            if exp == 1 {
                symbol.to_string()
            } else {
                format!("{symbol}^{exp}")
            }
        };

        let numerator: Vec<String> = BASE_SYMBOLS
            .iter()
            .zip(self.0)
            .filter(|(_, e)| *e > 0)
            .map(|(s, e)| factor(s, e))
            .collect();
        let denominator: Vec<String> = BASE_SYMBOLS
            .iter()
            .zip(self.0)
            .filter(|(_, e)| *e < 0)
            .map(|(s, e)| factor(s, -e))
            .collect();

        let top = if numerator.is_empty() {
            if denominator.is_empty() {
                return String::new();
            }
            "1".to_string()
        } else {
            numerator.join("*")
        };

        match denominator.len() {
            0 => top,
            1 => format!("{top}/{}", denominator[0]),
            _ => format!("{top}/({})", denominator.join("*")),
        }
    }
}

impl fmt::Display for DimVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            write!(f, "dimensionless")
        } else {
            write!(f, "{}", self.suffix())
        }
    }
}
