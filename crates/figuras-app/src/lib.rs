//! Figuras Application
//!
//! The console shell: menu rendering, the interactive session loop and its
//! configuration.

mod app;
mod menu;

pub use app::{AppConfig, Session, SessionError, SessionResult, SessionSummary};
pub use menu::{MenuEntry, MenuRegistry};
