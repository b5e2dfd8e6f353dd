//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use valuation_config::LoggingConfig;
use valuation_core::types::Market;

#[derive(Parser)]
#[command(name = "valuation")]
#[command(author, version, about = "Market data management for energy storage valuation")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level [default: `logging.level` from the config file]
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level from the flag, else from the config file.
    pub fn log_level<'a>(&self, config: &'a LoggingConfig) -> &'a str {
        match &self.log_level {
            Some(level) => level.as_str(),
            None => &config.level,
        }
    }

    /// JSON output when the flag is set or the config asks for it.
    pub fn json_logs(&self, config: &LoggingConfig) -> bool {
        self.json_logs || config.format.eq_ignore_ascii_case("json")
    }

    /// Log file from the flag, else from the config file.
    pub fn log_file(&self, config: &LoggingConfig) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| config.file.clone())
    }
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect or modify the persistent data store
    Cache(CacheArgs),
    /// List node definitions
    Nodes(NodesArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Show store location and size
    Stats,
    /// List cached keys
    List {
        /// Only keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Write one cached series to CSV
    Export {
        /// Cache key, components separated by " @ "
        key: String,
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Remove one entry
    Remove {
        /// Cache key, components separated by " @ "
        key: String,
    },
    /// Remove every entry
    Clear,
}

#[derive(clap::Args)]
pub struct NodesArgs {
    /// Only this market (ERCOT, PJM, MISO, ISONE)
    #[arg(short, long)]
    pub market: Option<Market>,
}
