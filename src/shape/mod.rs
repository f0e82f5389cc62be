//! Shapes behind an abstract return type
//!
//! Callers get something that can report an area and draw an outline
//! inside a frame. The concrete shape is chosen here and never named
//! outside this module.
//!
//! # Usage
//!
//! ```
//! use suifeatures::shape::{create_shape, CalculableShape, Rect};
//!
//! let shape = create_shape();
//! let outline = shape.path(Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert!(shape.area() > 0.0);
//! assert!(!outline.is_empty());
//! ```

mod circle;
mod errors;
mod geometry;

pub use errors::{ShapeError, ShapeResult};
pub use geometry::{Path, PathElement, Point, Rect, Size};

use circle::Circle;

/// Radius used by [`create_shape`]
pub const DEFAULT_RADIUS: f64 = 100.0;

/// Something with an area that can describe its outline in a frame
pub trait CalculableShape {
    /// Enclosed area
    fn area(&self) -> f64;

    /// Outline of the shape laid out in `rect`
    fn path(&self, rect: Rect) -> Path;
}

impl<S: CalculableShape + ?Sized> CalculableShape for Box<S> {
    fn area(&self) -> f64 {
        (**self).area()
    }

    fn path(&self, rect: Rect) -> Path {
        (**self).path(rect)
    }
}

/// Creates the default shape
pub fn create_shape() -> impl CalculableShape {
    Circle::new(DEFAULT_RADIUS)
}

/// Creates a shape of the given radius
pub fn create_shape_with_radius(radius: f64) -> ShapeResult<impl CalculableShape> {
    validate_radius(radius)?;
    Ok(Circle::new(radius))
}

/// Creates a shape as a trait object, for callers that store shapes
/// of differing kinds together
pub fn create_boxed_shape(radius: f64) -> ShapeResult<Box<dyn CalculableShape>> {
    validate_radius(radius)?;
    Ok(Box::new(Circle::new(radius)))
}

/// Checks a frame before laying a shape out in it
pub fn validate_frame(rect: &Rect) -> ShapeResult<()> {
    if !rect.is_finite() {
        return Err(ShapeError::InvalidFrame {
            width: rect.size.width,
            height: rect.size.height,
        });
    }
    Ok(())
}

fn validate_radius(radius: f64) -> ShapeResult<()> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(ShapeError::InvalidRadius(radius));
    }
    Ok(())
}
