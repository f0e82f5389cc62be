//! Plain geometry values used to describe shape outlines

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle anchored at its top-left origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self {
            origin: Point::default(),
            size,
        }
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    pub fn is_finite(&self) -> bool {
        self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.size.width.is_finite()
            && self.size.height.is_finite()
    }
}

/// One element of a path outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PathElement {
    /// Ellipse inscribed in `bounds`
    Ellipse { bounds: Rect },
}

impl PathElement {
    fn bounds(&self) -> Rect {
        match self {
            PathElement::Ellipse { bounds } => *bounds,
        }
    }

    fn contains(&self, point: Point) -> bool {
        match self {
            PathElement::Ellipse { bounds } => {
                let rx = bounds.size.width / 2.0;
                let ry = bounds.size.height / 2.0;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let dx = (point.x - bounds.mid_x()) / rx;
                let dy = (point.y - bounds.mid_y()) / ry;
                dx * dx + dy * dy <= 1.0
            }
        }
    }
}

/// Outline made of one or more elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path holding a single ellipse inscribed in `bounds`
    pub fn ellipse_in(bounds: Rect) -> Self {
        Self {
            elements: vec![PathElement::Ellipse { bounds }],
        }
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Smallest rectangle enclosing every element, `None` for an empty path
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut elements = self.elements.iter().map(PathElement::bounds);
        let first = elements.next()?;

        let mut min_x = first.origin.x;
        let mut min_y = first.origin.y;
        let mut max_x = first.origin.x + first.size.width;
        let mut max_y = first.origin.y + first.size.height;
        for rect in elements {
            min_x = min_x.min(rect.origin.x);
            min_y = min_y.min(rect.origin.y);
            max_x = max_x.max(rect.origin.x + rect.size.width);
            max_y = max_y.max(rect.origin.y + rect.size.height);
        }

        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Whether `point` falls inside any element (the filled area)
    pub fn contains(&self, point: Point) -> bool {
        self.elements.iter().any(|element| element.contains(point))
    }
}
