//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use valuation_config::load_config;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Data home: {}", config.data.home_path.display());
            println!("Store file: {}", config.data.store_file.display());
            println!("Node definitions: {}", config.data.nodes_file.display());
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
