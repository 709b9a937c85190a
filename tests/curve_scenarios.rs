//! End-to-end curve behaviour through the public API.

use std::cell::Cell;
use std::rc::Rc;

use approx::assert_relative_eq;
use fieldcurve::curve::sampling::{polyline, resample_by_length};
use fieldcurve::curve::{BezierModel, ControlIndex, GaussLegendre, SolverConfig};
use fieldcurve::units::defs::PER_METER;
use fieldcurve::units::{Curvature, Length};
use fieldcurve::{AnyCurve, CubicBezier, Curve, LineSegment, Point};

fn scenario() -> CubicBezier {
    CubicBezier::new(
        Point::from_inches(0.0, 0.0),
        Point::from_inches(10.0, 0.0),
        Point::from_inches(0.0, 10.0),
        Point::from_inches(24.0, 24.0),
    )
}

// ==================== Scenario tests ====================

#[test]
fn scenario_endpoints_and_length() {
    let curve = scenario();
    assert_eq!(curve.f(0.0), Point::from_inches(0.0, 0.0));
    assert_eq!(curve.f(1.0), Point::from_inches(24.0, 24.0));

    let length = curve.arc_length(1.0);
    let chord = Point::from_inches(0.0, 0.0).distance_to(Point::from_inches(24.0, 24.0));
    assert!(length.is_finite());
    assert!(length > chord, "{length} <= {chord}");
    assert_relative_eq!(chord.to_inches(), 33.941, epsilon = 1e-3);

    let t = curve.parameter_at_length(length);
    assert!((t - 1.0).abs() < 1e-3, "t = {t}");
}

#[test]
fn round_trip_over_dense_parameters() {
    let curve = scenario();
    for i in 0..=200 {
        let t0 = f64::from(i) / 200.0;
        let t = curve.parameter_at_length(curve.arc_length(t0));
        assert!((t - t0).abs() < 2e-3, "t0 = {t0}, t = {t}");
    }
}

#[test]
fn warm_start_matches_default_guess() {
    let curve = scenario();
    let target = curve.total_length() * 0.6;
    let cold = curve.parameter_at_length(target);
    let warm = curve.parameter_at_length_from(target, 0.55);
    let tolerance = Length::from_inches(0.01);
    assert!((curve.arc_length(cold) - target).abs() < tolerance);
    assert!((curve.arc_length(warm) - target).abs() < tolerance);
}

#[test]
fn straight_bezier_matches_line_segment() {
    let bezier: AnyCurve = CubicBezier::from_points([
        Point::from_inches(0.0, 0.0),
        Point::from_inches(2.0, 0.0),
        Point::from_inches(7.0, 0.0),
        Point::from_inches(10.0, 0.0),
    ])
    .into();
    let line: AnyCurve =
        LineSegment::new(Point::from_inches(0.0, 0.0), Point::from_inches(10.0, 0.0)).into();

    let relative = ((bezier.total_length() - line.total_length()) / line.total_length())
        .raw()
        .abs();
    assert!(relative <= 1e-3);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert_eq!(bezier.curvature(t), Curvature::zero());
    }
}

#[test]
fn diagonal_straight_bezier_matches_line_segment() {
    let start = Point::from_inches(1.0, 2.0);
    let end = Point::from_inches(13.0, 8.0);
    let bezier = CubicBezier::new(
        start,
        Point::from_inches(3.0, 3.0),
        Point::from_inches(7.0, 5.0),
        end,
    );
    let line = LineSegment::new(start, end);

    assert_relative_eq!(
        bezier.total_length().to_inches(),
        line.total_length().to_inches(),
        max_relative = 1e-3
    );
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!(bezier.curvature(t).abs() < Curvature::new(1e-9, PER_METER));
    }
}

// ==================== Solver configuration tests ====================

#[test]
fn tighter_tolerance_tightens_inversion() {
    let points = scenario().control_points();
    let strict = CubicBezier::with_config(
        points,
        SolverConfig::default().with_tolerance(Length::from_inches(1e-6)),
    );
    let target = strict.total_length() * 0.3;
    let t = strict.parameter_at_length(target);
    assert!((strict.arc_length(t) - target).abs() < Length::from_inches(1e-6));
}

#[test]
fn higher_order_quadrature_agrees_with_default() {
    // three-point rule
    let x = (3.0f64 / 5.0).sqrt();
    let rule = GaussLegendre::new(vec![-x, 0.0, x], vec![5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0]).unwrap();
    let three = CubicBezier::with_config(
        scenario().control_points(),
        SolverConfig::default().with_quadrature(rule),
    );
    let five = scenario();
    let relative = ((three.total_length() - five.total_length()) / five.total_length())
        .raw()
        .abs();
    assert!(relative < 1e-2, "relative {relative}");
}

// ==================== Editing tests ====================

#[test]
fn model_notifies_only_on_change() {
    let mut model = BezierModel::new(scenario());
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    model.on_change(move |_| counter.set(counter.get() + 1));

    let same = model.control_points();
    model.set_control_points(same);
    assert_eq!(hits.get(), 0);

    model.set_control_point(ControlIndex::Control1, Point::from_inches(5.0, 12.0));
    assert_eq!(hits.get(), 1);

    model.set_control_point(ControlIndex::Control1, Point::from_inches(5.0, 12.0));
    assert_eq!(hits.get(), 1);
}

#[test]
fn edit_keeps_length_cache_consistent() {
    let mut model = BezierModel::new(scenario());
    model.set_control_point(ControlIndex::End, Point::from_inches(48.0, 0.0));
    let curve = model.curve();
    assert_eq!(curve.total_length(), curve.arc_length(1.0));
    assert_eq!(curve.f(1.0), Point::from_inches(48.0, 0.0));
}

// ==================== Sampling tests ====================

#[test]
fn sampling_for_rendering() {
    let curve = scenario();
    let dense = polyline(&curve, 100);
    assert_eq!(dense.len(), 101);

    let polyline_length: Length = dense.windows(2).map(|w| w[0].distance_to(w[1])).sum();
    let relative = ((polyline_length - curve.total_length()) / curve.total_length())
        .raw()
        .abs();
    assert!(relative < 1e-3, "relative {relative}");

    let spaced = resample_by_length(&curve, Length::from_inches(2.0)).unwrap();
    let expected = (curve.total_length() / Length::from_inches(2.0)).raw().ceil() as usize + 1;
    assert_eq!(spaced.len(), expected);
}
