//! Core traits defined in `pagekit-core` and implemented by callers.

pub mod page_source;

pub use page_source::PageSource;
