//! Error types for Fretwork operations.
//!
//! This module provides the main error type [`FretworkError`] which wraps
//! the error conditions that can occur while resolving and rendering a diagram.

use std::io;

use thiserror::Error;

use fretwork_core::semantic::ResolveError;

/// The main error type for Fretwork operations.
///
/// # Diagnostic Variants
///
/// The `Resolve` variant keeps the structured [`ResolveError`], which lists
/// every invalid tuning and scale entry with its position, so callers can
/// report each one separately.
#[derive(Debug, Error)]
pub enum FretworkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FretworkError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
