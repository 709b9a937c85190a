//! Storage types for quantities.

use std::fmt;

use num_traits::{Float, FloatConst};

/// Floating-point storage for a [`Quantity`](super::Quantity).
///
/// Implemented for `f32` and `f64`. Unit definitions are always written in
/// `f64`; `of` narrows them into the storage type.
pub trait Real:
    Float + FloatConst + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Narrow (or pass through) an `f64` constant.
    fn of(value: f64) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn of(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    fn of(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}
