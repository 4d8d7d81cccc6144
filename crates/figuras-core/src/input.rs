//! Validation of console input.
//!
//! Everything here is pure: a line of text goes in, a typed value or an
//! [`InputError`] comes out. Re-prompting is the caller's job.

use crate::shapes::ShapeKind;
use thiserror::Error;

/// Menu number that ends the session.
pub const EXIT_CHOICE: u8 = 5;

/// Rejected console input.
///
/// The display text is the exact message shown before re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Error: Ingrese una opcion valida (1-5)")]
    InvalidChoice(String),
    #[error("Error: Ingrese un numero valido mayor que 0")]
    InvalidDimension(String),
}

impl InputError {
    /// The raw text that was rejected.
    pub fn rejected(&self) -> &str {
        match self {
            InputError::InvalidChoice(s) | InputError::InvalidDimension(s) => s,
        }
    }
}

/// A validated menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create(ShapeKind),
    Exit,
}

/// A strictly positive, finite length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    /// Returns `None` unless `value` is finite and greater than zero.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Strip the `\n` or `\r\n` terminator left by `read_line`. A lone `\r`
/// is part of the text.
fn strip_line_ending(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    }
}

/// Parse a menu selection.
///
/// The line must be exactly one character between `1` and `5`; surrounding
/// whitespace is not forgiven.
pub fn parse_menu_choice(line: &str) -> Result<MenuChoice, InputError> {
    let text = strip_line_ending(line);
    let mut chars = text.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10),
        _ => None,
    };

    match digit.and_then(|d| u8::try_from(d).ok()) {
        Some(EXIT_CHOICE) => Ok(MenuChoice::Exit),
        Some(n) => ShapeKind::from_menu_choice(n)
            .map(MenuChoice::Create)
            .ok_or_else(|| InputError::InvalidChoice(text.to_string())),
        None => Err(InputError::InvalidChoice(text.to_string())),
    }
}

/// Parse a positive real number.
///
/// Leading whitespace is skipped; anything after the number, trailing
/// whitespace included, rejects the line.
pub fn parse_dimension(line: &str) -> Result<Dimension, InputError> {
    let text = strip_line_ending(line);
    text.trim_start()
        .parse::<f64>()
        .ok()
        .and_then(Dimension::new)
        .ok_or_else(|| InputError::InvalidDimension(text.to_string()))
}
