//! Position plus heading.

use std::fmt;

use crate::units::dimension as dim;
use crate::units::{Angle, Length, Real, cos, sin};

use super::{Point, Vector2D};

/// A robot pose: field position and standard-convention orientation.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Pose<N: Real = f64> {
    pub position: Point<N>,
    pub orientation: Angle<N>,
}

impl<N: Real> Pose<N> {
    pub fn new(position: Point<N>, orientation: Angle<N>) -> Self {
        Pose {
            position,
            orientation,
        }
    }

    /// Pose at `position` facing along the positive x axis.
    pub fn at(position: Point<N>) -> Self {
        Pose::new(position, Angle::zero())
    }

    pub fn from_components(x: Length<N>, y: Length<N>, orientation: Angle<N>) -> Self {
        Pose::new(Vector2D::new(x, y), orientation)
    }

    pub fn x(&self) -> Length<N> {
        self.position.x
    }

    pub fn y(&self) -> Length<N> {
        self.position.y
    }

    /// Unit vector along the orientation.
    pub fn heading_vector(&self) -> Vector2D<dim::Dimensionless, N> {
        Vector2D::new(cos(self.orientation), sin(self.orientation))
    }
}

impl<N: Real> fmt::Display for Pose<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.position.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.position.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.orientation, f)?;
        f.write_str(")")
    }
}
