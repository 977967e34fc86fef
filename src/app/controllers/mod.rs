//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Editor slots and their change notifications
//! - Live preview composition
//! - Theme switching
//! - PDF export
//! - Copy action and about overlay

pub mod about;
pub mod actions;
pub mod editor;
pub mod export;
pub mod preview;
pub mod theme;
