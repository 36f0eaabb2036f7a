//! CLI command definitions and dispatch.

pub mod config;
pub mod links;
pub mod sort;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;

/// PageKit: sort filters and pagination links for table endpoints
#[derive(Debug, Parser)]
#[command(name = "pagekit", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the pagination computed for a request URL
    Links(links::LinksArgs),
    /// Show the sort filter resolved from a request URL
    Sort(sort::SortArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, app_config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Links(args) => links::execute(args, app_config, self.format),
            Commands::Sort(args) => sort::execute(args, app_config, self.format),
            Commands::Config(args) => {
                config::execute(args, app_config, &self.config, self.format)
            }
        }
    }
}
