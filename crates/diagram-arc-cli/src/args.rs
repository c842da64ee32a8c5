//! Command-line argument definitions for the diagram arc checker.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input path and formats,
//! configuration file selection, and logging verbosity.

use clap::Parser;

use crate::document::Format;

/// Command-line arguments for the diagram arc checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file holding arc records
    #[arg(help = "Path to the input file (.json or .toml)")]
    pub input: String,

    /// Input format; inferred from the file extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Format of the normalized records printed on success
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub emit: Format,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
