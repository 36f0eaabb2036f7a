//! Sort filter extraction from request query parameters.

use crate::types::query::QueryParams;
use crate::types::sorting::{SortDirection, SortFilter};

use super::builder::TableBuilder;

impl TableBuilder {
    /// Resolve the sort order requested by `query`.
    ///
    /// Sorter key pairs are scanned in configured order; each sort key that
    /// is present adds its value as a column, descending only when the paired
    /// order key is `"desc"`. Column names are not validated. Falls back to
    /// the default sort order when no sort key is present.
    pub fn extract_sort(&self, query: &QueryParams) -> SortFilter {
        let mut filter = SortFilter::new();
        for keys in &self.query_names.sorter {
            if let Some(column) = query.get(&keys.sort) {
                let order = query.get(&keys.order).map(String::as_str);
                filter.push(column.clone(), SortDirection::from_query(order));
            }
        }

        if filter.is_empty() {
            self.default_sort_order.clone()
        } else {
            filter
        }
    }
}
