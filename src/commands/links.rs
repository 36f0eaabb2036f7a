//! Pagination inspection command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use pagekit_core::TableBuilder;
use pagekit_core::config::AppConfig;
use pagekit_core::error::AppError;
use pagekit_core::types::Pagination;
use pagekit_core::types::query::query_params_from_url;

/// Arguments for the links command
#[derive(Debug, Args)]
pub struct LinksArgs {
    /// Total number of rows in the result set
    #[arg(long)]
    pub total_rows: u64,
    /// Request path and query string, e.g. "/items?page=5&sort=name"
    #[arg(long)]
    pub url: String,
}

#[derive(Debug, Serialize, Tabled)]
struct LinkRow {
    /// Link role
    link: String,
    /// Page number
    page: String,
    /// Generated URL
    url: String,
}

impl LinkRow {
    fn new(link: &str, page: u64, url: &str) -> Self {
        Self {
            link: link.to_string(),
            page: page.to_string(),
            url: url.to_string(),
        }
    }

    fn gap() -> Self {
        Self {
            link: "…".to_string(),
            page: String::new(),
            url: String::new(),
        }
    }
}

/// Execute the links command
pub fn execute(
    args: &LinksArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let builder = TableBuilder::new(&config.table)?;
    let query = query_params_from_url(&args.url);
    let pagination = builder.compute_pagination(args.total_rows, &query, &args.url);

    match format {
        OutputFormat::Json => output::print_item(&pagination, format),
        OutputFormat::Table => {
            output::print_kv("Page", &pagination.current_page.to_string());
            output::print_kv("Rows per page", &pagination.rows_per_page.to_string());
            output::print_kv("Total rows", &pagination.total_rows.to_string());
            output::print_kv("Total pages", &pagination.total_pages.to_string());
            output::print_kv(
                "Row window",
                &format!(
                    "{}..={}",
                    pagination.row_window.start_index, pagination.row_window.end_index
                ),
            );
            output::print_table(&link_rows(&pagination));
        }
    }

    Ok(())
}

/// Flatten the link set into display order, first page to last.
fn link_rows(p: &Pagination) -> Vec<LinkRow> {
    let mut rows = Vec::new();

    if let Some(url) = &p.first_page_url {
        rows.push(LinkRow::new("first", 1, url));
    }
    if let Some(url) = &p.prev_page_url {
        rows.push(LinkRow::new("prev", p.current_page - 1, url));
    }
    if p.ellipsis_before {
        rows.push(LinkRow::gap());
    }
    for link in &p.page_links_before {
        rows.push(LinkRow::new("page", link.page_index, &link.url));
    }
    rows.push(LinkRow::new("current", p.current_page, &p.current_page_url));
    for link in &p.page_links_after {
        rows.push(LinkRow::new("page", link.page_index, &link.url));
    }
    if p.ellipsis_after {
        rows.push(LinkRow::gap());
    }
    if let Some(url) = &p.next_page_url {
        rows.push(LinkRow::new("next", p.current_page + 1, url));
    }
    if let Some(url) = &p.last_page_url {
        rows.push(LinkRow::new("last", p.total_pages, url));
    }

    rows
}
