//! External process execution.
//!
//! A run moves from running to exactly one terminal state: succeeded with
//! the captured stdout, or failed with a spawn error or a non-zero exit.
//! stdout and stderr are drained concurrently with the exit wait so a chatty
//! child cannot block on a full pipe.

use crate::{Error, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, trace};

/// Runs an external command to completion and returns its stdout.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// Run `executable` with `args` and return everything it wrote to stdout.
    ///
    /// Arguments are passed as a vector, never through a shell.
    async fn run(&self, executable: &Path, args: &[String]) -> Result<String>;
}

/// Executor backed by a real OS process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for ProcessExecutor {
    async fn run(&self, executable: &Path, args: &[String]) -> Result<String> {
        let path = executable.display().to_string();
        debug!("Running {} {:?}", path, args);

        let mut child = Command::new(executable)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| Error::ProcessSpawn {
                path: path.clone(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::other(format!("Failed to capture stdout from {}", path)))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::other(format!("Failed to capture stderr from {}", path)))?;

        let (status, stdout, stderr) =
            tokio::try_join!(child.wait(), collect(stdout), collect(stderr))?;

        settle(&path, status, stdout, stderr)
    }
}

/// Read a pipe to its end, chunk by chunk, in arrival order.
async fn collect<R>(mut pipe: R) -> std::io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let read = pipe.read(&mut chunk).await?;
        if read == 0 {
            return Ok(buffer);
        }
        trace!("Captured {} bytes", read);
        buffer.extend_from_slice(&chunk[..read]);
    }
}

/// Turn a finished process into its single outcome.
fn settle(path: &str, status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Result<String> {
    let stdout = String::from_utf8_lossy(&stdout).into_owned();

    if status.success() {
        debug!("{} finished, {} bytes of output", path, stdout.len());
        return Ok(stdout);
    }

    let exit_code = status.code();
    let code = exit_code
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string());
    debug!("{} failed with exit code {}", path, code);

    Err(Error::ProcessFailed {
        message: format!("Error in Process {}. Exit code: {}", path, code),
        exit_code,
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
        stdout,
    })
}
