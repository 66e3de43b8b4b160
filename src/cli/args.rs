//! Command line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stream Info - List the audio and video streams of a media file
#[derive(Parser, Debug)]
#[command(name = "stream-info")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the ffprobe executable
    #[arg(long, global = true, value_name = "PATH")]
    pub ffprobe: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Describe the streams of a media file
    Probe {
        /// File to probe (the launcher query)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Alfred)]
        format: OutputFormat,
    },

    /// Check that ffprobe can be run
    Check,
}

/// How probe results are written to stdout.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Alfred Script Filter JSON
    Alfred,
    /// Colored plain text
    Text,
}
