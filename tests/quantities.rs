//! Unit arithmetic, parsing and geometry through the public API.

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use fieldcurve::Error;
use fieldcurve::units::defs::{DEGREE, INCH, METER_PER_SECOND, SECOND};
use fieldcurve::units::{
    Angle, CompassAngle, DimVector, Length, LinearVelocity, Number, Temperature, Time, atan2, cos,
    parse_quantity, sin,
};
use fieldcurve::{Point, Pose, Vector2D};

// ==================== Angle tests ====================

#[test]
fn right_angle_in_both_units() {
    assert_relative_eq!(Angle::from_degrees(90.0).to_radians(), FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(Angle::from_radians(FRAC_PI_2).to_degrees(), 90.0, epsilon = 1e-12);
}

#[test]
fn trig_is_dimensionless() {
    let theta = Angle::from_degrees(30.0);
    let unit: Number = sin(theta) * sin(theta) + cos(theta) * cos(theta);
    assert_relative_eq!(unit.raw(), 1.0, epsilon = 1e-12);

    let heading = atan2(Length::from_inches(1.0), Length::from_inches(1.0));
    assert_relative_eq!(heading.to_degrees(), 45.0, epsilon = 1e-12);
}

#[test]
fn compass_negation_happens_before_conversion() {
    let heading: Angle = (-CompassAngle::from_degrees(30.0)).into();
    assert_relative_eq!(heading.to_degrees(), 120.0, epsilon = 1e-9);
    assert_relative_eq!(heading.to_compass_degrees(), -30.0, epsilon = 1e-9);
}

// ==================== Arithmetic tests ====================

#[test]
fn derived_dimensions_compose() {
    let distance = Length::from_meters(10.0);
    let time = Time::from_seconds(4.0);
    let speed: LinearVelocity = distance / time;
    assert_relative_eq!(speed.convert(METER_PER_SECOND), 2.5);

    let back: Length = speed * time;
    assert_eq!(back, distance);
    assert_relative_eq!((back / distance).raw(), 1.0);
}

#[test]
fn named_constructors_need_no_annotation() {
    assert_relative_eq!(Length::from_inches(24.0).to_feet(), 2.0, epsilon = 1e-12);
    assert_relative_eq!(Time::from_seconds(90.0).to_minutes(), 1.5, epsilon = 1e-12);
    assert_relative_eq!(Angle::from_rotations(0.25).to_degrees(), 90.0, epsilon = 1e-9);

    let single: Length<f32> = Length::new(12.0, INCH);
    assert_relative_eq!(single.to_feet(), 1.0f32, epsilon = 1e-6);
}

#[test]
fn temperature_scales() {
    let boiling = Temperature::from_celsius(100.0);
    assert_relative_eq!(boiling.to_kelvin(), 373.15, epsilon = 1e-9);
    assert_relative_eq!(boiling.to_fahrenheit(), 212.0, epsilon = 1e-9);
    assert_relative_eq!(
        Temperature::from_fahrenheit(32.0).to_celsius(),
        0.0,
        epsilon = 1e-9
    );
}

// ==================== Parsing tests ====================

#[test]
fn parse_then_convert() {
    let q = parse_quantity("24 in").unwrap();
    assert_eq!(q.dims, DimVector::of::<fieldcurve::units::dimension::Length>());
    let length: Length = q.to_quantity().unwrap();
    assert_relative_eq!(length.convert(INCH), 24.0, epsilon = 1e-9);

    let speed: LinearVelocity = "3 m/s".parse().unwrap();
    assert_relative_eq!(speed.convert(METER_PER_SECOND), 3.0);

    let turn: Angle = "90 deg".parse().unwrap();
    assert_relative_eq!(turn.convert(DEGREE), 90.0, epsilon = 1e-9);
}

#[test]
fn parse_wrong_dimension_is_rejected() {
    let err = "5 s".parse::<Length>().unwrap_err();
    assert!(matches!(err, Error::Quantity(_)), "{err:?}");

    let time: Time = "5 s".parse().unwrap();
    assert_eq!(time.convert(SECOND), 5.0);
}

#[test]
fn parse_errors_carry_source() {
    let err = "3 furlongs".parse::<Length>().unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "{err:?}");
    insta::assert_snapshot!(err.to_string(), @"unknown unit: furlongs");
}

// ==================== Geometry tests ====================

#[test]
fn pose_heading_follows_orientation() {
    let pose = Pose::new(Point::from_inches(12.0, 0.0), Angle::from_degrees(90.0));
    let heading = pose.heading_vector();
    assert_relative_eq!(heading.x.raw(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(heading.y.raw(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(pose.x().to_inches(), 12.0, epsilon = 1e-9);
}

#[test]
fn vector_rotation_preserves_length() {
    let v: Vector2D<_> = Point::from_inches(3.0, 4.0);
    let rotated = v.rotated_by(Angle::from_degrees(37.0));
    assert_relative_eq!(rotated.magnitude().to_inches(), 5.0, epsilon = 1e-9);
    assert_relative_eq!(
        v.angle_to(v + Point::from_inches(0.0, 1.0)).to_degrees(),
        90.0,
        epsilon = 1e-9
    );
}
