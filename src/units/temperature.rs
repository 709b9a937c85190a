//! Absolute temperature scales.
//!
//! Celsius and Fahrenheit are affine, so they get conversion functions
//! rather than unit constants.

use super::defs::KELVIN;
use super::{Real, Temperature};

const CELSIUS_OFFSET: f64 = 273.15;
const FAHRENHEIT_ZERO: f64 = 32.0;
const FAHRENHEIT_PER_KELVIN: f64 = 1.8;

impl Temperature {
    pub fn from_kelvin(value: f64) -> Self {
        Self::new(value, KELVIN)
    }

    pub fn from_celsius(value: f64) -> Self {
        Self::from_kelvin(celsius_to_kelvin(value))
    }

    pub fn from_fahrenheit(value: f64) -> Self {
        Self::from_kelvin(fahrenheit_to_kelvin(value))
    }
}

impl<N: Real> Temperature<N> {
    pub fn to_kelvin(self) -> N {
        self.convert(KELVIN)
    }

    pub fn to_celsius(self) -> N {
        self.to_kelvin() - N::of(CELSIUS_OFFSET)
    }

    pub fn to_fahrenheit(self) -> N {
        self.to_celsius() * N::of(FAHRENHEIT_PER_KELVIN) + N::of(FAHRENHEIT_ZERO)
    }
}

/// Kelvin value of a Celsius reading.
pub(crate) fn celsius_to_kelvin(value: f64) -> f64 {
    value + CELSIUS_OFFSET
}

/// Kelvin value of a Fahrenheit reading.
pub(crate) fn fahrenheit_to_kelvin(value: f64) -> f64 {
    celsius_to_kelvin((value - FAHRENHEIT_ZERO) / FAHRENHEIT_PER_KELVIN)
}
