//! Circle, the concrete shape behind `create_shape`

use std::f64::consts::PI;

use super::geometry::{Path, Rect};
use super::CalculableShape;

/// Circle of a given radius, drawn centred in whatever frame it is given
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Circle {
    radius: f64,
}

impl Circle {
    /// Caller validates `radius`
    pub(super) fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl CalculableShape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn path(&self, rect: Rect) -> Path {
        let diameter = self.radius * 2.0;
        let bounds = Rect::new(
            rect.mid_x() - diameter / 2.0,
            rect.mid_y() - diameter / 2.0,
            diameter,
            diameter,
        );
        Path::ellipse_in(bounds)
    }
}
