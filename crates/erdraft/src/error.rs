//! Error types for erdraft operations.
//!
//! This module provides the main error type [`ErdraftError`] which wraps
//! the failures that can surface at the library boundary.

use std::io;

use thiserror::Error;

use erdraft_parser::GenerateError;

use crate::export::ExportError;

/// The main error type for erdraft operations.
#[derive(Debug, Error)]
pub enum ErdraftError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Text generator error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
