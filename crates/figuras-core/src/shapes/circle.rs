//! Circle shape.

use super::{Category, PERIMETER_ACCURACY, Shape, Shape2d};
use kurbo::{Circle as KurboCircle, Point, Shape as KurboShape};

/// A circle centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Radius.
    pub radius: f64,
}

impl Circle {
    /// Create a new circle.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(Point::ORIGIN, self.radius)
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Círculo"
    }

    fn category(&self) -> Category {
        Category::TwoD
    }
}

impl Shape2d for Circle {
    fn area(&self) -> f64 {
        KurboShape::area(&self.as_kurbo())
    }

    fn perimeter(&self) -> f64 {
        KurboShape::perimeter(&self.as_kurbo(), PERIMETER_ACCURACY)
    }
}
