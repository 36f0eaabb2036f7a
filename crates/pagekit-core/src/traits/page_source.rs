//! Data-fetch seam used by [`TableBuilder::build`](crate::table::TableBuilder::build).

use std::future::Future;

use async_trait::async_trait;

use crate::types::pagination::RowWindow;
use crate::types::sorting::SortFilter;

/// Supplies the rows for one page of a table.
///
/// Implementations own the actual storage access. The row window is not
/// truncated to the row count, so a source must tolerate windows that run
/// past the end of its data.
#[async_trait]
pub trait PageSource<Row>: Send + Sync {
    /// Error reported by the source. Returned to the caller of `build`
    /// exactly as produced.
    type Error: Send;

    /// Fetch the rows inside `window`, ordered by `sort`.
    async fn fetch_page(&self, sort: SortFilter, window: RowWindow)
    -> Result<Vec<Row>, Self::Error>;
}

#[async_trait]
impl<Row, E, F, Fut> PageSource<Row> for F
where
    Row: Send + 'static,
    E: Send + 'static,
    F: Fn(SortFilter, RowWindow) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<Row>, E>> + Send + 'static,
{
    type Error = E;

    async fn fetch_page(
        &self,
        sort: SortFilter,
        window: RowWindow,
    ) -> Result<Vec<Row>, Self::Error> {
        (self)(sort, window).await
    }
}
