//! Command-line argument definitions for the Armillary CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input file, output directory,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Armillary statechart renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the laid-out statechart (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Directory the `<root name>.svg` document is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
