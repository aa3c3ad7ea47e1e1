//! Monitor configuration.
//!
//! Configuration is read from TOML:
//! - Linux: `~/.config/dlwatch/config.toml`
//! - Windows: `%APPDATA%/dlwatch/config.toml`
//!
//! A missing file means defaults. Command-line flags override file values.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::cli::Cli;

/// Monitor configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Steam installation root; auto-detected when unset.
    #[serde(default)]
    pub steam_path: Option<PathBuf>,

    /// Number of polls before exiting.
    #[serde(default = "default_poll_count")]
    pub poll_count: u32,

    /// Delay between polls in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// Trailing content log lines examined per poll.
    #[serde(default = "default_window_lines")]
    pub window_lines: usize,
}

fn default_poll_count() -> u32 {
    5
}

fn default_poll_interval() -> u64 {
    60
}

fn default_window_lines() -> usize {
    dlwatch_content_log::DEFAULT_WINDOW
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steam_path: None,
            poll_count: default_poll_count(),
            poll_interval_secs: default_poll_interval(),
            window_lines: default_window_lines(),
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the platform default location.
    ///
    /// An explicitly given file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.steam_path {
            self.steam_path = Some(path.clone());
        }
        if let Some(polls) = cli.polls {
            self.poll_count = polls;
        }
        if let Some(interval) = cli.interval {
            self.poll_interval_secs = interval;
        }
        if let Some(window) = cli.window {
            self.window_lines = window;
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("dlwatch").join("config.toml")
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("dlwatch")
            .join("config.toml")
    }
}
