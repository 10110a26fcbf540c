//! Error types for Armillary operations.
//!
//! Rendering itself never fails; errors only arise when a rendered document
//! is persisted.

use std::io;

use thiserror::Error;

/// The main error type for Armillary operations.
#[derive(Debug, Error)]
pub enum ArmillaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}
