//! Core type definitions used across the PageKit workspace.

pub mod pagination;
pub mod query;
pub mod sorting;
pub mod table;

pub use pagination::{PageLink, Pagination, RowWindow};
pub use query::{QueryParams, UrlTemplate};
pub use sorting::{SortDirection, SortField, SortFilter};
pub use table::Table;
