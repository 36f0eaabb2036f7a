//! Table assembly: sort resolution, pagination and the page fetch.

use tracing::{debug, warn};

use crate::config::table::{QueryParamNames, TableConfig};
use crate::error::AppError;
use crate::result::AppResult;
use crate::traits::page_source::PageSource;
use crate::types::query::QueryParams;
use crate::types::sorting::SortFilter;
use crate::types::table::Table;

/// Builds sorted, paginated tables from request query parameters.
///
/// Constructed once from [`TableConfig`] at startup and shared by reference
/// (or behind an `Arc`) between requests. Every method is read-only, so
/// concurrent calls need no coordination.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    pub(crate) query_names: QueryParamNames,
    pub(crate) default_sort_order: SortFilter,
    pub(crate) default_rows_per_page: u64,
    pub(crate) num_surrounding_page_links: u64,
    pub(crate) rows_per_page_options: Vec<u64>,
}

impl TableBuilder {
    /// Validate the configuration and create a builder.
    ///
    /// Fails with a configuration error when the query names, the default
    /// sort order or the default page size are not set, or when the default
    /// page size is zero.
    pub fn new(config: &TableConfig) -> AppResult<Self> {
        let query_names = config
            .query_names
            .clone()
            .ok_or_else(|| missing("table.query_names"))?;
        let default_sort_order = config
            .default_sort_order
            .clone()
            .ok_or_else(|| missing("table.default_sort_order"))?;
        let default_rows_per_page = config
            .default_rows_per_page
            .ok_or_else(|| missing("table.default_rows_per_page"))?;

        if default_rows_per_page == 0 {
            warn!("table.default_rows_per_page must be at least 1");
            return Err(AppError::configuration(
                "table.default_rows_per_page must be at least 1",
            ));
        }

        Ok(Self {
            query_names,
            default_sort_order: default_sort_order.into(),
            default_rows_per_page,
            num_surrounding_page_links: config.num_surrounding_page_links,
            rows_per_page_options: config.rows_per_page_options.clone(),
        })
    }

    /// Query-string key names this builder reads.
    pub fn query_names(&self) -> &QueryParamNames {
        &self.query_names
    }

    /// Page size applied when a request does not carry a valid one.
    pub fn default_rows_per_page(&self) -> u64 {
        self.default_rows_per_page
    }

    /// Resolve the sort order and pagination for a request, fetch the page
    /// from `source` and assemble the result.
    ///
    /// `source` is called exactly once. Its error is returned unchanged.
    pub async fn build<Row, S>(
        &self,
        query: &QueryParams,
        original_url: &str,
        total_rows: u64,
        source: &S,
    ) -> Result<Table<Row>, S::Error>
    where
        S: PageSource<Row> + ?Sized,
    {
        let sorter = self.extract_sort(query);
        let pagination = self.compute_pagination(total_rows, query, original_url);

        debug!(
            page = pagination.current_page,
            rows_per_page = pagination.rows_per_page,
            total_pages = pagination.total_pages,
            sort = ?sorter.columns(),
            "Fetching table page"
        );

        let rows = source
            .fetch_page(sorter.clone(), pagination.row_window)
            .await?;

        Ok(Table {
            rows,
            pagination,
            sorter,
        })
    }
}

fn missing(key: &str) -> AppError {
    warn!(key, "Table configuration is incomplete");
    AppError::configuration(format!("{key} is not configured"))
}
