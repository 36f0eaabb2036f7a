//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use pagekit_core::TableBuilder;
use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Check that the table section is complete
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => match TableBuilder::new(&config.table) {
            Ok(builder) => {
                let names = builder.query_names();
                output::print_success(&format!("Configuration '{}' is valid", config_path));
                output::print_kv("Page key", &names.page);
                output::print_kv("Page size key", &names.num_per_page);
                output::print_kv(
                    "Sort keys",
                    &names
                        .sorter
                        .iter()
                        .map(|k| format!("{}/{}", k.sort, k.order))
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                output::print_kv(
                    "Default page size",
                    &builder.default_rows_per_page().to_string(),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
    }

    Ok(())
}
