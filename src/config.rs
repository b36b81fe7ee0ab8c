//! Runtime configuration
//!
//! Settings come from an optional TOML file; command-line flags are applied
//! on top by the binary. Every key is optional:
//!
//! ```toml
//! exit_delay_ms = 1000        # pause between `exit` and leaving the terminal
//! transition_step_ms = 300    # interval between boot/shutdown messages
//! start_in_hacker_mode = false
//! show_transition = true
//! log_dir = "/tmp"
//! ```

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before `exit` hands control back to the professional view
    pub exit_delay_ms: u64,

    /// Interval between transition messages
    pub transition_step_ms: u64,

    /// Skip the professional view and open the terminal directly
    pub start_in_hacker_mode: bool,

    /// Play the boot/shutdown sequence when switching views
    pub show_transition: bool,

    /// Directory for `folioterm.log`; the system temp dir when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            exit_delay_ms: 1000,
            transition_step_ms: 300,
            start_in_hacker_mode: false,
            show_transition: true,
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn transition_step(&self) -> Duration {
        Duration::from_millis(self.transition_step_ms)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
