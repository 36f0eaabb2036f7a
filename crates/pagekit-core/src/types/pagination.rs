//! Pagination types for table endpoints.

use serde::{Deserialize, Serialize};

/// Inclusive, 1-based range of row positions to fetch for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowWindow {
    /// Position of the first row (1-based).
    pub start_index: u64,
    /// Position of the last row (inclusive).
    pub end_index: u64,
}

impl RowWindow {
    /// Window for `page` with `rows_per_page` rows. Both must be at least 1;
    /// positions saturate at `u64::MAX`.
    pub fn for_page(page: u64, rows_per_page: u64) -> Self {
        Self {
            start_index: rows_per_page.saturating_mul(page - 1).saturating_add(1),
            end_index: rows_per_page.saturating_mul(page),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.start_index - 1
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.end_index - self.start_index + 1
    }
}

/// A numbered link to a neighbouring page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLink {
    /// Page number (1-based).
    pub page_index: u64,
    /// Absolute link (path + query string).
    pub url: String,
}

/// Page boundaries and navigation links computed for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Number of rows per page.
    pub rows_per_page: u64,
    /// Total number of rows across all pages.
    pub total_rows: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Selectable page sizes, passed through from configuration.
    pub rows_per_page_options: Vec<u64>,
    /// Rows to fetch for the current page.
    pub row_window: RowWindow,
    /// Link to the current page.
    pub current_page_url: String,
    /// Link to page 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_page_url: Option<String>,
    /// Link to the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_url: Option<String>,
    /// Link to the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_url: Option<String>,
    /// Link to the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_page_url: Option<String>,
    /// Pages immediately before the current one, lowest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_links_before: Vec<PageLink>,
    /// Pages immediately after the current one, nearest first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub page_links_after: Vec<PageLink>,
    /// Gap between page 1 and the before-window.
    pub ellipsis_before: bool,
    /// Gap between the after-window and the last page.
    pub ellipsis_after: bool,
}
