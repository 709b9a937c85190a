//! Planar vectors of dimensioned components.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use glam::DVec2;

use crate::units::defs::INCH;
use crate::units::dimension::{self as dim, DimDiv, DimMul, DivDim, MulDim};
use crate::units::{Angle, Length, Quantity, Real, atan2, cos, sin};

/// A pair of same-dimension quantities.
pub struct Vector2D<D, N = f64> {
    pub x: Quantity<D, N>,
    pub y: Quantity<D, N>,
}

/// A location on the field.
pub type Point<N = f64> = Vector2D<dim::Length, N>;

impl<D, N> Vector2D<D, N> {
    pub const fn new(x: Quantity<D, N>, y: Quantity<D, N>) -> Self {
        Vector2D { x, y }
    }
}

impl<D, N: Real> Vector2D<D, N> {
    /// Both components measured in `unit`.
    pub fn from_units(x: N, y: N, unit: Quantity<D, f64>) -> Self {
        Vector2D::new(Quantity::new(x, unit), Quantity::new(y, unit))
    }

    /// Vector of the given length pointing along `angle`.
    pub fn from_polar(magnitude: Quantity<D, N>, angle: Angle<N>) -> Self {
        Vector2D::new(
            magnitude * cos(angle).raw(),
            magnitude * sin(angle).raw(),
        )
    }

    pub fn zero() -> Self {
        Vector2D::new(Quantity::zero(), Quantity::zero())
    }

    pub fn dot<D2>(self, other: Vector2D<D2, N>) -> Quantity<MulDim<D, D2>, N>
    where
        D: DimMul<D2>,
    {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product, `x₁·y₂ − y₁·x₂`. Positive when `other` is
    /// counter-clockwise from `self`.
    pub fn cross<D2>(self, other: Vector2D<D2, N>) -> Quantity<MulDim<D, D2>, N>
    where
        D: DimMul<D2>,
    {
        self.x * other.y - self.y * other.x
    }

    pub fn square_magnitude(self) -> Quantity<MulDim<D, D>, N>
    where
        D: DimMul<D>,
    {
        self.dot(self)
    }

    /// Euclidean length; zero for the zero vector.
    pub fn magnitude(self) -> Quantity<D, N> {
        Quantity::from_base(self.x.raw().hypot(self.y.raw()))
    }

    pub fn distance_to(self, other: Self) -> Quantity<D, N> {
        (other - self).magnitude()
    }

    /// Direction of this vector from the positive x axis.
    pub fn theta(self) -> Angle<N> {
        atan2(self.y, self.x)
    }

    /// Direction from this point towards `other`.
    pub fn angle_to(self, other: Self) -> Angle<N> {
        (other - self).theta()
    }

    /// Rotated counter-clockwise by `angle`.
    pub fn rotated_by(self, angle: Angle<N>) -> Self {
        let (s, c) = (sin(angle).raw(), cos(angle).raw());
        Vector2D::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    pub fn normalized(self) -> Vector2D<dim::Dimensionless, N> {
        let m = self.magnitude().raw();
        if m == N::zero() {
            return Vector2D::zero();
        }
        Vector2D::new(
            Quantity::from_base(self.x.raw() / m),
            Quantity::from_base(self.y.raw() / m),
        )
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`.
    pub fn lerp(self, other: Self, t: N) -> Self {
        self + (other - self) * t
    }

    /// Components as plain numbers of `unit`, for renderers.
    pub fn to_dvec2(self, unit: Quantity<D, f64>) -> DVec2 {
        DVec2::new(self.x.convert(unit).as_f64(), self.y.convert(unit).as_f64())
    }

    pub fn from_dvec2(v: DVec2, unit: Quantity<D, f64>) -> Self {
        Self::from_units(N::of(v.x), N::of(v.y), unit)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Point {
    pub fn from_inches(x: f64, y: f64) -> Self {
        Vector2D::new(Length::from_inches(x), Length::from_inches(y))
    }

    pub fn from_meters(x: f64, y: f64) -> Self {
        Vector2D::new(Length::from_meters(x), Length::from_meters(y))
    }
}

impl<N: Real> Point<N> {
    pub fn to_inches(self) -> DVec2 {
        self.to_dvec2(INCH)
    }
}

// Manual impls: deriving would put bounds on the phantom dimension.

impl<D, N: Copy> Clone for Vector2D<D, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, N: Copy> Copy for Vector2D<D, N> {}

impl<D, N: Real> Default for Vector2D<D, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D, N: fmt::Debug> fmt::Debug for Vector2D<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2D")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<D, N: PartialEq> PartialEq for Vector2D<D, N> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<D: dim::Dimension, N: Real> fmt::Display for Vector2D<D, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<D, N: Real> Add for Vector2D<D, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<D, N: Real> Sub for Vector2D<D, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<D, N: Real> Neg for Vector2D<D, N> {
    type Output = Self;
    fn neg(self) -> Self {
        Vector2D::new(-self.x, -self.y)
    }
}

impl<D, N: Real> AddAssign for Vector2D<D, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<D, N: Real> SubAssign for Vector2D<D, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<D, N: Real> Mul<N> for Vector2D<D, N> {
    type Output = Self;
    fn mul(self, rhs: N) -> Self {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl<D, N: Real> Div<N> for Vector2D<D, N> {
    type Output = Self;
    fn div(self, rhs: N) -> Self {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl<D> Mul<Vector2D<D, $t>> for $t {
            type Output = Vector2D<D, $t>;
            fn mul(self, rhs: Vector2D<D, $t>) -> Vector2D<D, $t> {
                Vector2D::new(self * rhs.x, self * rhs.y)
            }
        }
    )*};
}

scalar_lhs_mul!(f32, f64);

/// Scaling by a quantity combines dimensions, e.g. a point over a time is a
/// velocity vector.
impl<D1, D2, N> Mul<Quantity<D2, N>> for Vector2D<D1, N>
where
    D1: DimMul<D2>,
    N: Real,
{
    type Output = Vector2D<MulDim<D1, D2>, N>;
    fn mul(self, rhs: Quantity<D2, N>) -> Self::Output {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl<D1, D2, N> Div<Quantity<D2, N>> for Vector2D<D1, N>
where
    D1: DimDiv<D2>,
    N: Real,
{
    type Output = Vector2D<DivDim<D1, D2>, N>;
    fn div(self, rhs: Quantity<D2, N>) -> Self::Output {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Area, LinearVelocity, Time};
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point {
        Point::from_meters(x, y)
    }

    // ==================== Construction tests ====================

    #[test]
    fn default_is_origin() {
        let origin: Point = Point::default();
        assert_eq!(origin, p(0.0, 0.0));
    }

    #[test]
    fn from_units_scales_both_components() {
        let a: Point = Point::from_units(12.0, 24.0, INCH);
        assert_eq!(a, Point::from_inches(12.0, 24.0));
        assert_relative_eq!(a.y.to_feet(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn dvec2_round_trip() {
        let a = Point::from_inches(3.0, -4.0);
        let v = a.to_inches();
        assert_relative_eq!(v.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, -4.0, epsilon = 1e-12);
        let back: Point = Point::from_dvec2(v, INCH);
        assert_relative_eq!(back.x.raw(), a.x.raw(), epsilon = 1e-15);
        assert_relative_eq!(back.y.raw(), a.y.raw(), epsilon = 1e-15);
    }

    // ==================== Arithmetic tests ====================

    #[test]
    fn componentwise_arithmetic() {
        let a = p(1.0, 2.0);
        let b = p(3.0, 5.0);
        assert_eq!(a + b, p(4.0, 7.0));
        assert_eq!(b - a, p(2.0, 3.0));
        assert_eq!(-a, p(-1.0, -2.0));
        assert_eq!(a * 2.0, p(2.0, 4.0));
        assert_eq!(2.0 * a, p(2.0, 4.0));
        assert_eq!(b / 2.0, p(1.5, 2.5));

        let mut c = a;
        c += b;
        c -= p(0.5, 0.5);
        assert_eq!(c, p(3.5, 6.5));
    }

    #[test]
    fn scaling_by_quantity_combines_dimensions() {
        let d = p(4.0, 8.0);
        let v: Vector2D<dim::LinearVelocity> = d / Time::from_seconds(2.0);
        assert_eq!(v.x, LinearVelocity::from_base(2.0));
        let back: Point = v * Time::from_seconds(2.0);
        assert_eq!(back, d);
    }

    #[test]
    fn dot_and_cross_are_areas() {
        let a = p(1.0, 0.0);
        let b = p(0.0, 2.0);
        let dot: Area = a.dot(b);
        let cross: Area = a.cross(b);
        assert_eq!(dot.raw(), 0.0);
        assert_eq!(cross.raw(), 2.0);
        assert_eq!(b.cross(a).raw(), -2.0);
        assert_eq!(p(3.0, 4.0).square_magnitude().raw(), 25.0);
    }

    // ==================== Metric tests ====================

    #[test]
    fn magnitude_and_distance() {
        assert_eq!(p(3.0, 4.0).magnitude(), Length::from_meters(5.0));
        assert_eq!(p(0.0, 0.0).magnitude(), Length::zero());
        assert_eq!(p(1.0, 1.0).distance_to(p(4.0, 5.0)), Length::from_meters(5.0));
    }

    #[test]
    fn angles() {
        assert_relative_eq!(p(0.0, 1.0).theta().to_degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(p(1.0, 1.0).angle_to(p(0.0, 2.0)).to_degrees(), 135.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation() {
        let r = p(1.0, 0.0).rotated_by(Angle::from_degrees(90.0));
        assert_relative_eq!(r.x.raw(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(r.y.raw(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalization() {
        let n = p(3.0, 4.0).normalized();
        assert_relative_eq!(n.x.raw(), 0.6, epsilon = 1e-12);
        assert_relative_eq!(n.y.raw(), 0.8, epsilon = 1e-12);
        assert_eq!(p(0.0, 0.0).normalized(), Vector2D::zero());
    }

    #[test]
    fn polar_and_lerp() {
        let v = Point::from_polar(Length::from_meters(2.0), Angle::from_degrees(90.0));
        assert_relative_eq!(v.x.raw(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y.raw(), 2.0, epsilon = 1e-12);

        let mid = p(0.0, 0.0).lerp(p(2.0, 4.0), 0.5);
        assert_eq!(mid, p(1.0, 2.0));
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(p(1.5, -2.0).to_string(), @"(1.5 m, -2 m)");
        insta::assert_snapshot!(format!("{:.2}", p(1.0, 2.0 / 3.0)), @"(1.00 m, 0.67 m)");
    }
}
