//! Command-line argument definitions for the Lineage CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the node map and its focus, the output
//! path, the configuration file and logging verbosity.

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the Lineage diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the node map (`.json`, anything else is read as TOML)
    #[arg(help = "Path to the input node map")]
    pub input: String,

    /// Name of the node the diagram is built for.
    ///
    /// Defaults to the file stem of the input, so `Button.toml` draws `Button`.
    #[arg(short, long)]
    pub focus: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
