//! Sort filter inspection command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use pagekit_core::TableBuilder;
use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;
use pagekit_core::types::query::query_params_from_url;

/// Arguments for the sort command
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Request path and query string, e.g. "/items?sort=name&order=desc"
    #[arg(long)]
    pub url: String,
}

#[derive(Debug, Serialize, Tabled)]
struct SortRow {
    /// Precedence (1 = primary)
    priority: usize,
    /// Column name
    column: String,
    /// 1 ascending, -1 descending
    direction: i8,
}

/// Execute the sort command
pub fn execute(
    args: &SortArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let builder = TableBuilder::new(&config.table)?;
    let sorter = builder.extract_sort(&query_params_from_url(&args.url));

    match format {
        OutputFormat::Json => output::print_item(&sorter, format),
        OutputFormat::Table => {
            let rows: Vec<SortRow> = sorter
                .iter()
                .enumerate()
                .map(|(i, field)| SortRow {
                    priority: i + 1,
                    column: field.field.clone(),
                    direction: field.direction.as_i8(),
                })
                .collect();
            output::print_table(&rows);
        }
    }

    Ok(())
}
