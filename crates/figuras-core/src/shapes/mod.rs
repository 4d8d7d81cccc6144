//! Shape definitions for the calculator.

mod circle;
mod cube;
mod kind;
mod sphere;
mod square;

pub use circle::Circle;
pub use cube::Cube;
pub use kind::ShapeKind;
pub use sphere::Sphere;
pub use square::Square;

use std::fmt;

/// Tolerance handed to kurbo for curve-length computations.
///
/// Circles and rectangles are computed in closed form by kurbo, so the
/// value only matters for shapes that would need flattening.
pub(crate) const PERIMETER_ACCURACY: f64 = 1e-9;

/// Dimensional category of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Planar shapes (area and perimeter).
    TwoD,
    /// Solids (surface area and volume).
    ThreeD,
}

impl Category {
    /// Short tag shown next to the shape name.
    pub fn label(&self) -> &'static str {
        match self {
            Category::TwoD => "2D",
            Category::ThreeD => "3D",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Common trait for all shapes.
pub trait Shape {
    /// Display name.
    fn name(&self) -> &'static str;

    /// Category tag.
    fn category(&self) -> Category;
}

/// Planar shapes.
pub trait Shape2d: Shape {
    fn area(&self) -> f64;

    fn perimeter(&self) -> f64;
}

/// Solid shapes. `area` is the surface area.
pub trait Shape3d: Shape {
    fn area(&self) -> f64;

    fn volume(&self) -> f64;
}

/// A computed quantity of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Area,
    Perimeter,
    Volume,
}

impl Metric {
    /// Label used when printing the metric.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Area => "Area",
            Metric::Perimeter => "Perimetro",
            Metric::Volume => "Volumen",
        }
    }
}

/// A built shape of either family.
pub enum Figure {
    Flat(Box<dyn Shape2d>),
    Solid(Box<dyn Shape3d>),
}

impl Figure {
    pub fn name(&self) -> &'static str {
        match self {
            Figure::Flat(s) => s.name(),
            Figure::Solid(s) => s.name(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Figure::Flat(s) => s.category(),
            Figure::Solid(s) => s.category(),
        }
    }

    /// The two metrics of the shape's family, primary first.
    /// Solids report volume then area, planar shapes area then perimeter.
    pub fn metrics(&self) -> [(Metric, f64); 2] {
        match self {
            Figure::Flat(s) => [(Metric::Area, s.area()), (Metric::Perimeter, s.perimeter())],
            Figure::Solid(s) => [(Metric::Volume, s.volume()), (Metric::Area, s.area())],
        }
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Figure")
            .field("name", &self.name())
            .field("category", &self.category())
            .finish()
    }
}
