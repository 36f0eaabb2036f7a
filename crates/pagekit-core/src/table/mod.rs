//! Sorted, paginated tables.
//!
//! [`TableBuilder`] turns request query parameters into a [`SortFilter`]
//! and a [`Pagination`], then asks a [`PageSource`] for the matching rows.
//!
//! [`SortFilter`]: crate::types::SortFilter
//! [`Pagination`]: crate::types::Pagination
//! [`PageSource`]: crate::traits::PageSource

pub mod builder;
mod paginate;
mod sort;

pub use builder::TableBuilder;
