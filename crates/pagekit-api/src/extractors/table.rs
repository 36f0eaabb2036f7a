//! Table request extractor.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, OriginalUri, Query};
use axum::http::request::Parts;

use pagekit_core::TableBuilder;
use pagekit_core::traits::PageSource;
use pagekit_core::types::{QueryParams, Table};

use crate::error::ApiError;

/// Query parameters and URL of a table request.
///
/// The URL is taken from [`OriginalUri`], so links generated under a nested
/// router still point at the full path the client requested.
#[derive(Debug, Clone)]
pub struct TableRequest {
    /// Decoded query parameters.
    pub query: QueryParams,
    /// Path and query string exactly as requested.
    pub original_url: String,
}

impl TableRequest {
    /// Build one page of `source` for this request.
    pub async fn build<Row, S>(
        &self,
        builder: &TableBuilder,
        total_rows: u64,
        source: &S,
    ) -> Result<Table<Row>, S::Error>
    where
        S: PageSource<Row> + ?Sized,
    {
        builder
            .build(&self.query, &self.original_url, total_rows, source)
            .await
    }
}

impl<S> FromRequestParts<S> for TableRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let OriginalUri(uri) = OriginalUri::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&uri)?;
        let original_url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        Ok(Self {
            query,
            original_url,
        })
    }
}
