//! Export functionality for Armillary statecharts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! persisting a rendered statechart. It is the final stage of the pipeline:
//!
//! ```text
//! Layout stage (external)
//!     ↓ resolved StateBox tree + transitions
//! Render (shapes, labels, groups, arrow lines)
//!     ↓ assemble
//! SVG Document
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::DocumentAssembler`] and [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export is the only fallible stage. Operations return [`Error`], which
//! converts into [`ArmillaryError::Export`](crate::ArmillaryError::Export)
//! at the crate boundary.

/// SVG export backend.
pub mod svg;

use std::{io, path::PathBuf};

use thiserror::Error;

use armillary_core::semantic::{StateBox, Transition};

/// Abstraction for statechart export backends.
pub trait Exporter {
    /// Renders `root` with `transitions` and persists the result.
    ///
    /// # Returns
    ///
    /// The path of the written document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFileName`] if no file name can be derived from
    /// the root state, or [`Error::Io`] if writing the output fails.
    fn export(&self, root: &StateBox, transitions: &[Transition]) -> Result<PathBuf, Error>;
}

/// Errors that can occur while persisting a rendered statechart.
#[derive(Debug, Error)]
pub enum Error {
    /// The root state's name cannot be used as a file name.
    #[error("invalid output file name derived from state `{0}`")]
    InvalidFileName(String),

    /// An I/O error encountered while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
