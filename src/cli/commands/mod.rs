//! CLI command implementations.

pub mod cache;
pub mod nodes;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::warn;
use valuation_config::{load_config, AppConfig, LoggingConfig};

/// Load the configuration file, or the defaults when it does not exist.
pub(crate) fn load_or_default(config_path: &Path) -> Result<AppConfig> {
    if !config_path.exists() {
        warn!("Config file {:?} not found, using defaults", config_path);
        return Ok(AppConfig::default());
    }
    load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))
}

/// Logging section of the configuration file, or defaults when it cannot be
/// read. Load errors are reported later by the command itself.
pub(crate) fn logging_settings(config_path: &Path) -> LoggingConfig {
    if !config_path.exists() {
        return LoggingConfig::default();
    }
    load_config(config_path)
        .map(|config| config.logging)
        .unwrap_or_default()
}
