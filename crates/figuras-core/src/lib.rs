//! Figuras Core Library
//!
//! Console-agnostic logic for the Figuras shape calculator: the shape
//! family, input validation and result formatting.

pub mod input;
pub mod report;
pub mod shapes;

pub use input::{Dimension, EXIT_CHOICE, InputError, MenuChoice, parse_dimension, parse_menu_choice};
pub use report::{DEFAULT_PRECISION, Report};
pub use shapes::{Category, Circle, Cube, Figure, Metric, Shape, Shape2d, Shape3d, ShapeKind, Sphere, Square};
