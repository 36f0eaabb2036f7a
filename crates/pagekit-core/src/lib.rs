//! # pagekit-core
//!
//! Core crate for PageKit. Contains configuration schemas, the unified
//! error system, sort/pagination/table types, the page source trait, and
//! the table builder that derives sort filters and page links from request
//! query strings.
//!
//! This crate has **no** internal dependencies on other PageKit crates.

pub mod config;
pub mod error;
pub mod result;
pub mod table;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use table::TableBuilder;
