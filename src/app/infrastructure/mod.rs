//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - PDF generation (printpdf)
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod pdf;
pub mod platform;
