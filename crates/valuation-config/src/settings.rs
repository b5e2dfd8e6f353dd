//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "valuation".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Market data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Root holding one directory per market (`ERCOT`, `PJM`, `MISO`, `ISONE`)
    pub home_path: PathBuf,
    /// Persistent store file
    pub store_file: PathBuf,
    /// Node definitions document
    pub nodes_file: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            home_path: PathBuf::from("data"),
            store_file: PathBuf::from("valuation_dms.json"),
            nodes_file: PathBuf::from("definitions/nodes.json"),
        }
    }
}
