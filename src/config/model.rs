//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::submission::progress::PROGRESS_INTERVAL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the generator service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_generate_path")]
    pub generate_path: String,
    #[serde(default = "default_check_path")]
    pub check_path: String,
    /// Ask the service whether a script exists before accepting a movie.
    #[serde(default = "default_true")]
    pub verify_movie: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            generate_path: default_generate_path(),
            check_path: default_check_path(),
            verify_movie: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        // A zero period would make tokio's interval panic.
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    /// How long a notification stays in the status bar.
    #[serde(default = "default_alert_secs")]
    pub alert_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            alert_secs: default_alert_secs(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
fn default_generate_path() -> String {
    "/generate_script".to_string()
}
fn default_check_path() -> String {
    "/check_movie".to_string()
}
fn default_interval_ms() -> u64 {
    PROGRESS_INTERVAL.as_millis() as u64
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_alert_secs() -> u64 {
    6
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("altending")
        .join("altending.log")
}
