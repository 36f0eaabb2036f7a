//! Custom Axum extractors.

pub mod table;

pub use table::TableRequest;
