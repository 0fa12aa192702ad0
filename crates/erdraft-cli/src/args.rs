//! Command-line argument definitions for the erdraft CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, secondary exports and logging verbosity.

use clap::Parser;

/// Command-line arguments for the erdraft diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a file with a free-form or structured ER description
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Output base name; `.png`, `.dot` and `.pptx` are appended
    #[arg(short, long, default_value = "er_diagram")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat the input as structured text and skip the text generator
    #[arg(long)]
    pub structured: bool,

    /// Also write a DOT description next to the image
    #[arg(long)]
    pub dot: bool,

    /// Also write a single-slide PPTX embedding the image
    #[arg(long)]
    pub slide: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
