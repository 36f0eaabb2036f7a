//! Table sort and pagination configuration.

use serde::{Deserialize, Serialize};

use crate::types::sorting::SortField;

/// Sort and pagination settings shared by every table.
///
/// `query_names`, `default_sort_order` and `default_rows_per_page` have no
/// defaults; a `TableBuilder` refuses to start without them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Query-string keys recognised in requests.
    #[serde(default)]
    pub query_names: Option<QueryParamNames>,
    /// Sort order applied when a request carries no sort parameters.
    #[serde(default)]
    pub default_sort_order: Option<Vec<SortField>>,
    /// Page size used when the request does not specify one.
    #[serde(default)]
    pub default_rows_per_page: Option<u64>,
    /// Link budget for the numbered page links around the current page.
    #[serde(default = "default_surrounding_links")]
    pub num_surrounding_page_links: u64,
    /// Page sizes offered to the user.
    #[serde(default)]
    pub rows_per_page_options: Vec<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            query_names: None,
            default_sort_order: None,
            default_rows_per_page: None,
            num_surrounding_page_links: default_surrounding_links(),
            rows_per_page_options: Vec::new(),
        }
    }
}

/// Query-string key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParamNames {
    /// Key carrying the page number.
    #[serde(default = "default_page_key")]
    pub page: String,
    /// Key carrying the page size.
    #[serde(default = "default_num_per_page_key")]
    pub num_per_page: String,
    /// Sort key pairs in precedence order.
    #[serde(default)]
    pub sorter: Vec<SorterKeys>,
}

impl Default for QueryParamNames {
    fn default() -> Self {
        Self {
            page: default_page_key(),
            num_per_page: default_num_per_page_key(),
            sorter: vec![SorterKeys::new("sort", "order")],
        }
    }
}

/// A pair of query keys: one naming a column, one naming its direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SorterKeys {
    /// Key whose value is the column to sort by.
    pub sort: String,
    /// Key whose value is `"asc"` or `"desc"`.
    pub order: String,
}

impl SorterKeys {
    /// Create a sort/order key pair.
    pub fn new(sort: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            sort: sort.into(),
            order: order.into(),
        }
    }
}

fn default_surrounding_links() -> u64 {
    4
}

fn default_page_key() -> String {
    "page".to_string()
}

fn default_num_per_page_key() -> String {
    "num_per_page".to_string()
}
