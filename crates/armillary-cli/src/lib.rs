//! CLI logic for the Armillary statechart renderer.

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;
pub use input::StatechartFile;

use std::{fs, path::PathBuf};

use log::info;

use armillary::StatechartRenderer;

/// Run the Armillary CLI application
///
/// Loads the configuration, reads the laid-out statechart and writes
/// `<root name>.svg` into the output directory.
///
/// # Returns
///
/// The path of the written SVG document.
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Input file I/O or parse errors
/// - Export errors
pub fn run(args: &Args) -> Result<PathBuf, CliError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing statechart"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let input_path = PathBuf::from(&args.input);
    let source = fs::read_to_string(&input_path).map_err(|source| CliError::ReadInput {
        path: input_path.clone(),
        source,
    })?;
    let statechart = StatechartFile::parse(&source, &input_path)?;

    let renderer = StatechartRenderer::new(app_config);
    let path = renderer.export_with(
        statechart.root(),
        &statechart.transitions(),
        &args.output_dir,
    )?;

    Ok(path)
}
