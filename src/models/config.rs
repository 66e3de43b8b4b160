//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Location ffprobe is installed to by the common package managers.
pub const DEFAULT_FFPROBE_PATH: &str = "/usr/local/bin/ffprobe";

/// Environment variable overriding the ffprobe location.
pub const FFPROBE_PATH_ENV: &str = "FFPROBE_PATH";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// ffprobe configuration.
    #[serde(default)]
    pub ffprobe: FfprobeConfig,
}

/// ffprobe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfprobeConfig {
    /// Path to the ffprobe executable.
    pub path: PathBuf,
}

impl Default for FfprobeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FFPROBE_PATH),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Apply an ffprobe path override, if any.
    pub fn with_ffprobe_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.ffprobe.path = path;
        }
        self
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stream_info")
}

/// Read a config file, falling back to defaults when it is missing or invalid.
pub fn load_config_from(config_path: &Path) -> Config {
    if !config_path.exists() {
        return Config::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => Config::from_toml(&content).unwrap_or_else(|e| {
            warn!("Ignoring {}: {}", config_path.display(), e);
            Config::default()
        }),
        Err(e) => {
            warn!("Cannot read {}: {}", config_path.display(), e);
            Config::default()
        }
    }
}

/// Load configuration from the user config file and the environment.
pub fn load_config() -> Config {
    let config = load_config_from(&dirs_config_path().join("config.toml"));
    let env_path = std::env::var_os(FFPROBE_PATH_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    config.with_ffprobe_path(env_path)
}
