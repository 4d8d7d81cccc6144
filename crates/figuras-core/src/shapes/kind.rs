//! Shape kinds and the factory that builds them.

use super::{Circle, Cube, Figure, Sphere, Square};
use crate::input::Dimension;

/// The shapes the calculator can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Circle,
    Square,
}

impl ShapeKind {
    /// All kinds, in menu order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Circle,
        ShapeKind::Square,
    ];

    /// Map a 1-based menu number to a kind.
    pub fn from_menu_choice(choice: u8) -> Option<Self> {
        match choice {
            1..=4 => Some(Self::ALL[usize::from(choice - 1)]),
            _ => None,
        }
    }

    /// 1-based position in the menu.
    pub fn menu_number(&self) -> u8 {
        match self {
            ShapeKind::Cube => 1,
            ShapeKind::Sphere => 2,
            ShapeKind::Circle => 3,
            ShapeKind::Square => 4,
        }
    }

    /// Name as written in menu entries (plain ASCII).
    pub fn menu_name(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cubo",
            ShapeKind::Sphere => "Esfera",
            ShapeKind::Circle => "Circulo",
            ShapeKind::Square => "Cuadrado",
        }
    }

    /// Prompt shown when asking for the kind's one dimension.
    pub fn dimension_prompt(&self) -> &'static str {
        match self {
            ShapeKind::Cube => "Ingrese la longitud del lado del cubo: ",
            ShapeKind::Sphere => "Ingrese el radio de la esfera: ",
            ShapeKind::Circle => "Ingrese el radio del circulo: ",
            ShapeKind::Square => "Ingrese la longitud del lado del cuadrado: ",
        }
    }

    /// Build the concrete shape for this kind.
    pub fn build(&self, dimension: Dimension) -> Figure {
        let value = dimension.get();
        log::trace!("Building {:?} with dimension {}", self, value);
        match self {
            ShapeKind::Cube => Figure::Solid(Box::new(Cube::new(value))),
            ShapeKind::Sphere => Figure::Solid(Box::new(Sphere::new(value))),
            ShapeKind::Circle => Figure::Flat(Box::new(Circle::new(value))),
            ShapeKind::Square => Figure::Flat(Box::new(Square::new(value))),
        }
    }
}
