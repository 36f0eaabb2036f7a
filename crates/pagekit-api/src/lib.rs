//! # pagekit-api
//!
//! Axum integration for PageKit.
//!
//! Provides the [`TableRequest`] extractor that captures the query map and
//! original URL a table needs, the `AppError` to HTTP mapping, the JSON
//! success envelope, and request logging middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod middleware;

pub use app::build_app;
pub use dto::ApiResponse;
pub use error::ApiError;
pub use extractors::TableRequest;
