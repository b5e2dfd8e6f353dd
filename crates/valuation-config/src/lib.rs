//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed `VALUATION__` override file values, e.g.
/// `VALUATION__DATA__HOME_PATH=/srv/market-data`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("VALUATION")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
