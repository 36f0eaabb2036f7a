//! Convenience result type alias for PageKit.

use crate::error::AppError;

/// A specialized `Result` type for PageKit operations.
pub type AppResult<T> = Result<T, AppError>;
