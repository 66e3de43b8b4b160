//! FFprobe service for listing the streams of a media file.

use crate::core::executor::Executor;
use crate::models::stream::{ProbeResult, StreamRecord};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Stream fields requested from ffprobe.
const STREAM_ENTRIES: &str = "stream=duration,r_frame_rate,codec_name,codec_type,width,height,bit_rate";

/// Error object written by `-show_error`.
#[derive(Debug, Deserialize)]
struct FfprobeErrorOutput {
    error: FfprobeError,
}

#[derive(Debug, Deserialize)]
struct FfprobeError {
    #[allow(dead_code)]
    code: Option<i64>,
    string: Option<String>,
}

/// Build the fixed ffprobe argument list for `input`.
pub fn probe_args(input: &str) -> Vec<String> {
    [
        "-hide_banner",
        "-show_error",
        "-show_entries",
        STREAM_ENTRIES,
        "-v",
        "quiet",
        "-of",
        "json",
        "-i",
        input,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Parse ffprobe's JSON document into stream records.
pub fn parse_output(output: &str) -> Result<Vec<StreamRecord>> {
    let result: ProbeResult =
        serde_json::from_str(output).map_err(|e| Error::MalformedOutput(e.to_string()))?;
    Ok(result.streams)
}

/// Probe `input` with the ffprobe executable at `ffprobe`.
pub async fn probe<E: Executor>(
    executor: &E,
    ffprobe: &Path,
    input: &str,
) -> Result<Vec<StreamRecord>> {
    info!("Probing {}", input);

    let output = executor.run(ffprobe, &probe_args(input)).await?;
    let streams = parse_output(&output)?;

    debug!("Found {} streams", streams.len());
    Ok(streams)
}

/// Get the ffprobe version line.
pub async fn get_version<E: Executor>(executor: &E, ffprobe: &Path) -> Result<String> {
    let output = executor.run(ffprobe, &["-version".to_string()]).await?;
    let first_line = output.lines().next().unwrap_or("unknown");

    Ok(first_line.to_string())
}

/// Best human-readable explanation of a failed probe.
///
/// Prefers the `-show_error` message on stdout, then the first stderr line.
pub fn diagnostic(err: &Error) -> Option<String> {
    match err {
        Error::ProcessFailed { stdout, stderr, .. } => serde_json::from_str::<FfprobeErrorOutput>(stdout)
            .ok()
            .and_then(|e| e.error.string)
            .or_else(|| {
                stderr
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(str::to_string)
            }),
        Error::ProcessSpawn { source, .. } => Some(source.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_args() {
        let args = probe_args("/media/movie one.mkv");
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-show_error",
                "-show_entries",
                "stream=duration,r_frame_rate,codec_name,codec_type,width,height,bit_rate",
                "-v",
                "quiet",
                "-of",
                "json",
                "-i",
                "/media/movie one.mkv",
            ]
        );
    }

    #[test]
    fn test_parse_output_missing_streams() {
        assert!(matches!(
            parse_output("{}"),
            Err(Error::MalformedOutput(_))
        ));
        assert!(matches!(
            parse_output("not json"),
            Err(Error::MalformedOutput(_))
        ));
    }

    #[test]
    fn test_diagnostic_prefers_show_error() {
        let err = Error::ProcessFailed {
            message: "Error in Process ffprobe. Exit code: 1".to_string(),
            exit_code: Some(1),
            stderr: "something else\n".to_string(),
            stdout: r#"{"error": {"code": -2, "string": "No such file or directory"}}"#.to_string(),
        };
        assert_eq!(diagnostic(&err).as_deref(), Some("No such file or directory"));
    }

    #[test]
    fn test_diagnostic_falls_back_to_stderr() {
        let err = Error::ProcessFailed {
            message: "Error in Process ffprobe. Exit code: 1".to_string(),
            exit_code: Some(1),
            stderr: "\n  Invalid data found  \nmore".to_string(),
            stdout: String::new(),
        };
        assert_eq!(diagnostic(&err).as_deref(), Some("Invalid data found"));
        assert_eq!(diagnostic(&Error::other("x")), None);
    }
}
