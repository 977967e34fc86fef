//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Editor slots (Language) and their text snapshot
//! - Theme flag and everything derived from it
//! - Startup settings
//! - Message types for the event system

pub mod language;
pub mod messages;
pub mod settings;
pub mod sources;
pub mod theme;

pub use language::Language;
pub use messages::Message;
pub use settings::{AppSettings, FontChoice, ThemeMode};
pub use sources::Sources;
pub use theme::{CssColor, EditorTheme, Icon, IconSet, Palette, ThemeFlag};
