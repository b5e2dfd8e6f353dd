//! Valuation data management CLI.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use valuation_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging, flags over config file
    let logging = cli::commands::logging_settings(&cli.config);
    let log_file = cli.log_file(&logging);
    let _log_guard = setup_logging(
        cli.log_level(&logging),
        cli.json_logs(&logging),
        log_file.as_deref(),
    );

    // Execute command
    match cli.command {
        Commands::Cache(args) => cli::commands::cache::run(args, &cli.config),
        Commands::Nodes(args) => cli::commands::nodes::run(args, &cli.config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}
