//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Language, Theme, Settings, Messages)
//! - `controllers/` - Orchestration (editors, preview, theme, export, about)
//! - `services/` - Pure operations (syntax highlighting, text wrapping, preview file)
//! - `infrastructure/` - External integrations (PDF backend, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;

// Re-exports for convenient external access
pub use domain::{AppSettings, EditorTheme, FontChoice, Language, Message, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::platform::detect_system_dark_mode;
pub use state::{Host, Playground};
