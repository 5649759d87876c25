pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, ServerConfig};

/// Overrides `server.base_url` when set.
pub const SERVER_URL_ENV: &str = "ALTENDING_SERVER_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("altending")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let mut config = load_config_from(&config_path())?;
    apply_env(&mut config, std::env::var(SERVER_URL_ENV).ok());
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

fn apply_env(config: &mut AppConfig, server_url: Option<String>) {
    if let Some(url) = server_url.filter(|u| !u.trim().is_empty()) {
        config.server.base_url = url.trim().to_string();
    }
}
