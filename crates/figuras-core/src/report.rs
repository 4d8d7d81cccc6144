//! Text rendering of computed figures.

use crate::shapes::Figure;
use std::fmt;

/// Decimal places used when no precision is configured.
pub const DEFAULT_PRECISION: usize = 2;

/// The printed result for one figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Header line followed by the family's two metrics, primary first.
    pub fn for_figure(figure: &Figure, precision: usize) -> Self {
        let mut lines = Vec::with_capacity(3);
        lines.push(format!("Figura: {} ({})", figure.name(), figure.category()));
        for (metric, value) in figure.metrics() {
            lines.push(format!("{}: {:.*}", metric.label(), precision, value));
        }
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
