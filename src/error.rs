//! Error types for stream-info.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stream-info.
#[derive(Error, Debug)]
pub enum Error {
    // Process errors
    #[error("Failed to start process {path}: {source}")]
    ProcessSpawn {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    ProcessFailed {
        message: String,
        exit_code: Option<i32>,
        stderr: String,
        stdout: String,
    },

    // Probe output errors
    #[error("Malformed probe output: {0}")]
    MalformedOutput(String),

    // Config errors
    #[error("Invalid config file: {0}")]
    Config(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Captured stderr of a failed process, if any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::ProcessFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// Captured stdout of a failed process, if any.
    pub fn stdout(&self) -> Option<&str> {
        match self {
            Error::ProcessFailed { stdout, .. } => Some(stdout),
            _ => None,
        }
    }
}
