//! One page of table results.

use serde::Serialize;

use super::pagination::Pagination;
use super::sorting::SortFilter;

/// Rows for the current page together with the pagination and sort state
/// that produced them.
#[derive(Debug, Clone, Serialize)]
pub struct Table<Row> {
    /// Rows returned by the page source.
    pub rows: Vec<Row>,
    /// Page boundaries and navigation links.
    pub pagination: Pagination,
    /// Sort order the rows were fetched with.
    pub sorter: SortFilter,
}
