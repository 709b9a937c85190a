//! Named units.
//!
//! Every unit is the quantity "one of this unit" in `f64`; combine them with
//! [`Quantity::new`](super::Quantity::new) and
//! [`Quantity::convert`](super::Quantity::convert).

use std::f64::consts::{PI, TAU};

use super::{
    Amount, Angle, AngularAcceleration, AngularJerk, AngularVelocity, Current, Curvature,
    Frequency, Length, LinearAcceleration, LinearJerk, LinearVelocity, LuminousIntensity, Mass,
    Number, Quantity, Temperature, Time,
};

/// The dimensionless unit.
pub const UNITLESS: Number = Quantity::from_base(1.0);
pub const PERCENT: Number = Quantity::from_base(0.01);

// Length
pub const METER: Length = Quantity::from_base(1.0);
pub const CENTIMETER: Length = Quantity::from_base(0.01);
pub const MILLIMETER: Length = Quantity::from_base(0.001);
pub const KILOMETER: Length = Quantity::from_base(1000.0);
pub const INCH: Length = Quantity::from_base(0.0254);
pub const FOOT: Length = Quantity::from_base(0.3048);
pub const YARD: Length = Quantity::from_base(0.9144);
/// One field tile, 24 inches.
pub const TILE: Length = Quantity::from_base(0.6096);

// Time
pub const SECOND: Time = Quantity::from_base(1.0);
pub const MILLISECOND: Time = Quantity::from_base(0.001);
pub const MINUTE: Time = Quantity::from_base(60.0);
pub const HOUR: Time = Quantity::from_base(3600.0);

// Mass
pub const KILOGRAM: Mass = Quantity::from_base(1.0);
pub const GRAM: Mass = Quantity::from_base(0.001);
pub const POUND: Mass = Quantity::from_base(0.453_592_37);

// Angle
pub const RADIAN: Angle = Quantity::from_base(1.0);
pub const DEGREE: Angle = Quantity::from_base(PI / 180.0);
pub const ROTATION: Angle = Quantity::from_base(TAU);

// Remaining base units
pub const AMPERE: Current = Quantity::from_base(1.0);
pub const KELVIN: Temperature = Quantity::from_base(1.0);
pub const CANDELA: LuminousIntensity = Quantity::from_base(1.0);
pub const MOLE: Amount = Quantity::from_base(1.0);

// Derived
pub const PER_METER: Curvature = Quantity::from_base(1.0);
pub const PER_INCH: Curvature = Quantity::from_base(1.0 / 0.0254);
pub const HERTZ: Frequency = Quantity::from_base(1.0);

pub const METER_PER_SECOND: LinearVelocity = Quantity::from_base(1.0);
pub const CENTIMETER_PER_SECOND: LinearVelocity = Quantity::from_base(0.01);
pub const INCH_PER_SECOND: LinearVelocity = Quantity::from_base(0.0254);
pub const FOOT_PER_SECOND: LinearVelocity = Quantity::from_base(0.3048);

pub const METER_PER_SECOND_SQUARED: LinearAcceleration = Quantity::from_base(1.0);
pub const INCH_PER_SECOND_SQUARED: LinearAcceleration = Quantity::from_base(0.0254);

pub const METER_PER_SECOND_CUBED: LinearJerk = Quantity::from_base(1.0);
pub const INCH_PER_SECOND_CUBED: LinearJerk = Quantity::from_base(0.0254);

pub const RADIAN_PER_SECOND: AngularVelocity = Quantity::from_base(1.0);
pub const DEGREE_PER_SECOND: AngularVelocity = Quantity::from_base(PI / 180.0);
pub const ROTATION_PER_SECOND: AngularVelocity = Quantity::from_base(TAU);
pub const ROTATION_PER_MINUTE: AngularVelocity = Quantity::from_base(TAU / 60.0);

pub const RADIAN_PER_SECOND_SQUARED: AngularAcceleration = Quantity::from_base(1.0);
pub const DEGREE_PER_SECOND_SQUARED: AngularAcceleration = Quantity::from_base(PI / 180.0);
pub const ROTATION_PER_SECOND_SQUARED: AngularAcceleration = Quantity::from_base(TAU);
pub const ROTATION_PER_MINUTE_SQUARED: AngularAcceleration =
    Quantity::from_base(TAU / 3600.0);

pub const RADIAN_PER_SECOND_CUBED: AngularJerk = Quantity::from_base(1.0);
pub const ROTATION_PER_SECOND_CUBED: AngularJerk = Quantity::from_base(TAU);
pub const ROTATION_PER_MINUTE_CUBED: AngularJerk = Quantity::from_base(TAU / 216_000.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_units_agree_with_their_factors() {
        let rpm: AngularVelocity = ROTATION / MINUTE;
        assert!((rpm.raw() - ROTATION_PER_MINUTE.raw()).abs() < 1e-12);

        let ips2: LinearAcceleration = INCH / SECOND / SECOND;
        assert!((ips2.raw() - INCH_PER_SECOND_SQUARED.raw()).abs() < 1e-15);

        let rpm3: AngularJerk = ROTATION / MINUTE / MINUTE / MINUTE;
        assert!((rpm3.raw() - ROTATION_PER_MINUTE_CUBED.raw()).abs() < 1e-15);

        let per_inch: Curvature = 1.0 / INCH;
        assert!((per_inch.raw() - PER_INCH.raw()).abs() < 1e-9);
    }

    #[test]
    fn tile_is_two_feet() {
        assert!((TILE.convert(FOOT) - 2.0).abs() < 1e-12);
        assert!((TILE.convert(INCH) - 24.0).abs() < 1e-12);
    }
}
