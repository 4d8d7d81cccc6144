//! Main menu registry and rendering.

use figuras_core::{EXIT_CHOICE, ShapeKind};

const RULE_WIDTH: usize = 40;

/// A numbered menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub number: u8,
    pub label: String,
}

impl MenuEntry {
    pub fn new(number: u8, label: impl Into<String>) -> Self {
        Self {
            number,
            label: label.into(),
        }
    }

    /// Format the entry for display (e.g., "1. Crear Cubo").
    pub fn format(&self) -> String {
        format!("{}. {}", self.number, self.label)
    }
}

/// Registry of all main menu entries.
pub struct MenuRegistry;

impl MenuRegistry {
    /// Get all entries in display order. The exit entry is always last.
    pub fn all() -> Vec<MenuEntry> {
        let mut entries: Vec<MenuEntry> = ShapeKind::ALL
            .iter()
            .map(|kind| MenuEntry::new(kind.menu_number(), format!("Crear {}", kind.menu_name())))
            .collect();
        entries.push(MenuEntry::new(EXIT_CHOICE, "Salir"));
        entries
    }

    /// Render the full menu block under `title`.
    pub fn render(title: &str) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        let mut out = String::new();
        out.push('\n');
        out.push_str(&heavy);
        out.push('\n');
        out.push_str("    ");
        out.push_str(title);
        out.push('\n');
        out.push_str(&heavy);
        out.push('\n');
        for entry in Self::all() {
            out.push_str(&entry.format());
            out.push('\n');
        }
        out.push_str(&light);
        out.push('\n');
        out
    }
}
