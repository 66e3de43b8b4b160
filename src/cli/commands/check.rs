//! Check command implementation.

use crate::core::executor::Executor;
use crate::models::config::Config;
use crate::services::ffprobe;
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

const INSTALL_HINT: &str = "Install FFmpeg, or point --ffprobe / FFPROBE_PATH at the ffprobe binary";

/// Whether the configured ffprobe can be run.
#[derive(Debug)]
pub enum FfprobeStatus {
    Ready { path: PathBuf, version: String },
    Unavailable { path: PathBuf, reason: String },
}

impl FfprobeStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, FfprobeStatus::Ready { .. })
    }

    /// Write the status line, plus the install hint when ffprobe is unusable.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        match self {
            FfprobeStatus::Ready { path, version } => writeln!(
                writer,
                "{} {}: {}",
                "[OK]".green(),
                path.display().to_string().bold(),
                version
            ),
            FfprobeStatus::Unavailable { path, reason } => {
                writeln!(
                    writer,
                    "{} {}: {}",
                    "[FAIL]".red(),
                    path.display().to_string().bold(),
                    reason
                )?;
                writeln!(writer, "  {} {}", "->".yellow(), INSTALL_HINT)
            }
        }
    }
}

/// Run `ffprobe -version` with the configured executable.
pub async fn check<E: Executor>(executor: &E, config: &Config) -> FfprobeStatus {
    let path = config.ffprobe.path.clone();

    match ffprobe::get_version(executor, &path).await {
        Ok(version) => FfprobeStatus::Ready { path, version },
        Err(e) => FfprobeStatus::Unavailable {
            path,
            reason: e.to_string(),
        },
    }
}
