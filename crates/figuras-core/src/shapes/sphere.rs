//! Sphere shape.

use super::{Category, Shape, Shape3d};
use std::f64::consts::PI;

/// A sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Sphere {
    fn name(&self) -> &'static str {
        "Esfera"
    }

    fn category(&self) -> Category {
        Category::ThreeD
    }
}

impl Shape3d for Sphere {
    fn area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }

    fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius * self.radius * self.radius
    }
}
