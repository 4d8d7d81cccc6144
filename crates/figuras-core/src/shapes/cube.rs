//! Cube shape.

use super::{Category, Shape, Shape3d};

/// A cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    /// Edge length.
    pub side: f64,
}

impl Cube {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Cube {
    fn name(&self) -> &'static str {
        "Cubo"
    }

    fn category(&self) -> Category {
        Category::ThreeD
    }
}

impl Shape3d for Cube {
    fn area(&self) -> f64 {
        6.0 * self.side * self.side
    }

    fn volume(&self) -> f64 {
        self.side * self.side * self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_metrics() {
        for s in [0.5, 1.0, 3.0, 12.25] {
            let cube = Cube::new(s);
            assert!((cube.area() - 6.0 * s * s).abs() < 1e-9);
            assert!((cube.volume() - s * s * s).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cube_of_three() {
        let cube = Cube::new(3.0);
        assert_eq!(cube.name(), "Cubo");
        assert_eq!(cube.category(), Category::ThreeD);
        assert_eq!(format!("{:.2}", cube.area()), "54.00");
        assert_eq!(format!("{:.2}", cube.volume()), "27.00");
    }
}
