//! Command-line argument definitions for the FileGrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the directory to draw, the output path,
//! the configuration file and logging verbosity.

use clap::Parser;

/// Command-line arguments for the FileGrid tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory whose files are drawn
    #[arg(help = "Path to the directory to draw")]
    pub directory: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "file-grid.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of columns, overriding the configuration
    #[arg(long)]
    pub columns: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
