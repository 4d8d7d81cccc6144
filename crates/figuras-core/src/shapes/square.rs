//! Square shape.

use super::{Category, PERIMETER_ACCURACY, Shape, Shape2d};
use kurbo::{Rect, Shape as KurboShape};

/// A square, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    /// Side length.
    pub side: f64,
}

impl Square {
    /// Create a new square.
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// Get as a kurbo Rect.
    pub fn as_kurbo(&self) -> Rect {
        Rect::new(0.0, 0.0, self.side, self.side)
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "Cuadrado"
    }

    fn category(&self) -> Category {
        Category::TwoD
    }
}

impl Shape2d for Square {
    fn area(&self) -> f64 {
        KurboShape::area(&self.as_kurbo())
    }

    fn perimeter(&self) -> f64 {
        KurboShape::perimeter(&self.as_kurbo(), PERIMETER_ACCURACY)
    }
}
