pub mod model;
pub mod nickname;

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

/// `<config dir>/chanbot/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chanbot")
        .join("config.toml")
}

/// Read and validate the configuration. Any failure here is fatal.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid config {}: {}", path.display(), e))?;
    Ok(config)
}
