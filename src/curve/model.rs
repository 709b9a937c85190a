//! Editable Bezier with change notification.
//!
//! The interaction layer calls the setters on every drag completion. Setting
//! the points a curve already has must not rebuild it or notify anyone, or
//! redraws would feed back into further edits.

use std::fmt;

use crate::geometry::Point;
use crate::log::debug;

use super::CubicBezier;

/// Which of the four control points to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlIndex {
    Start,
    Control0,
    Control1,
    End,
}

impl ControlIndex {
    pub const ALL: [ControlIndex; 4] = [
        ControlIndex::Start,
        ControlIndex::Control0,
        ControlIndex::Control1,
        ControlIndex::End,
    ];

    /// Position in the `[start, control0, control1, end]` array.
    pub fn index(self) -> usize {
        match self {
            ControlIndex::Start => 0,
            ControlIndex::Control0 => 1,
            ControlIndex::Control1 => 2,
            ControlIndex::End => 3,
        }
    }
}

type Listener = Box<dyn FnMut(&[Point; 4])>;

/// Owns a [`CubicBezier`] and tells listeners when its control points change.
pub struct BezierModel {
    curve: CubicBezier,
    listeners: Vec<Listener>,
}

impl BezierModel {
    pub fn new(curve: CubicBezier) -> Self {
        BezierModel {
            curve,
            listeners: Vec::new(),
        }
    }

    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    pub fn control_points(&self) -> [Point; 4] {
        self.curve.control_points()
    }

    /// Register a callback run after every effective change.
    pub fn on_change(&mut self, listener: impl FnMut(&[Point; 4]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replace all control points; returns whether anything changed.
    pub fn set_control_points(&mut self, points: [Point; 4]) -> bool {
        if !self.curve.update_control_points(points) {
            return false;
        }
        debug!(listeners = self.listeners.len(), "bezier control points changed");
        let points = self.curve.control_points();
        for listener in &mut self.listeners {
            listener(&points);
        }
        true
    }

    /// Move a single control point; returns whether anything changed.
    pub fn set_control_point(&mut self, which: ControlIndex, point: Point) -> bool {
        let mut points = self.curve.control_points();
        points[which.index()] = point;
        self.set_control_points(points)
    }
}

impl From<CubicBezier> for BezierModel {
    fn from(curve: CubicBezier) -> Self {
        BezierModel::new(curve)
    }
}

impl fmt::Debug for BezierModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BezierModel")
            .field("curve", &self.curve)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn model() -> BezierModel {
        CubicBezier::new(
            Point::from_inches(0.0, 0.0),
            Point::from_inches(10.0, 0.0),
            Point::from_inches(0.0, 10.0),
            Point::from_inches(24.0, 24.0),
        )
        .into()
    }

    fn counting(model: &mut BezierModel) -> Rc<RefCell<Vec<[Point; 4]>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        model.on_change(move |points| sink.borrow_mut().push(*points));
        seen
    }

    #[test]
    fn identical_points_do_not_notify() {
        let mut model = model();
        let seen = counting(&mut model);

        let points = model.control_points();
        assert!(!model.set_control_points(points));
        assert!(!model.set_control_point(ControlIndex::End, points[3]));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn changes_notify_every_listener_once() {
        let mut model = model();
        let first = counting(&mut model);
        let second = counting(&mut model);

        let moved = Point::from_inches(12.0, 2.0);
        assert!(model.set_control_point(ControlIndex::Control0, moved));

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
        assert_eq!(first.borrow()[0][1], moved);
        assert_eq!(model.curve().control_points()[1], moved);
    }

    #[test]
    fn repeated_drag_to_same_spot_notifies_once() {
        let mut model = model();
        let seen = counting(&mut model);

        let target = Point::from_inches(30.0, 30.0);
        for _ in 0..3 {
            model.set_control_point(ControlIndex::End, target);
        }
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn control_index_positions() {
        let indices: Vec<usize> = ControlIndex::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
