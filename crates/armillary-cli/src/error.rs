//! CLI error type and its miette diagnostics.

use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

use armillary::ArmillaryError;

use crate::config::ConfigError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Failed to read input file {}", path.display())]
    #[diagnostic(code(armillary::input::read))]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse statechart {}: {message}", path.display())]
    #[diagnostic(
        code(armillary::input::parse),
        help("the input needs a [root] table with name, coordinates, width and height")
    )]
    ParseInput { path: PathBuf, message: String },

    #[error(transparent)]
    #[diagnostic(code(armillary::config))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(armillary::render))]
    Render(#[from] ArmillaryError),
}
