//! Probe command implementation.
//!
//! Runs ffprobe on the launcher query and prints one row per stream.

use crate::cli::args::OutputFormat;
use crate::core::executor::Executor;
use crate::core::formatter;
use crate::models::config::Config;
use crate::models::display::DisplayItem;
use crate::services::{ffprobe, launcher};
use crate::Result;
use std::io::Write;
use tracing::warn;

/// Probe `input` and describe its streams.
pub async fn describe<E: Executor>(
    executor: &E,
    config: &Config,
    input: &str,
) -> Result<Vec<DisplayItem>> {
    let streams = ffprobe::probe(executor, &config.ffprobe.path, input).await?;
    Ok(formatter::build_items(&streams))
}

/// Run the probe command, writing the result list to `writer`.
///
/// On failure a single error row is written before the error is returned.
pub async fn probe<E: Executor, W: Write>(
    executor: &E,
    config: &Config,
    input: &str,
    format: OutputFormat,
    writer: &mut W,
) -> Result<()> {
    match describe(executor, config, input).await {
        Ok(items) => match format {
            OutputFormat::Alfred => launcher::output(writer, &items),
            OutputFormat::Text => launcher::output_text(writer, &items),
        },
        Err(err) => {
            if format == OutputFormat::Alfred {
                if let Err(write_err) = launcher::error(writer, &err) {
                    warn!("Failed to report error to launcher: {}", write_err);
                }
            }
            Err(err)
        }
    }
}
