//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Live browser preview files
//! - Syntax highlighting
//! - Text wrapping for the export

pub mod preview_file;
pub mod syntax;
pub mod text_wrap;
