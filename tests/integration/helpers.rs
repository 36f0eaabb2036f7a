//! Shared test helpers for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use pagekit_api::{ApiError, ApiResponse, TableRequest, build_app};
use pagekit_core::TableBuilder;
use pagekit_core::config::table::{QueryParamNames, SorterKeys, TableConfig};
use pagekit_core::error::AppError;
use pagekit_core::traits::PageSource;
use pagekit_core::types::{RowWindow, SortDirection, SortField, SortFilter, Table};

/// A row served by the test catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub year: u32,
}

/// In-memory page source that sorts by `id`, `title` or `year`.
pub struct Catalog {
    pub books: Vec<Book>,
}

impl Catalog {
    /// `count` books with ids 1..=count, titles cycling through a few
    /// letters so multi-column sorts have ties to break.
    pub fn with_books(count: u64) -> Self {
        let books = (1..=count)
            .map(|id| Book {
                id,
                title: ["delta", "alpha", "charlie", "bravo"][(id % 4) as usize].to_string(),
                year: 2000 + (id % 3) as u32,
            })
            .collect();
        Self { books }
    }
}

#[async_trait]
impl PageSource<Book> for Catalog {
    type Error = AppError;

    async fn fetch_page(&self, sort: SortFilter, window: RowWindow) -> Result<Vec<Book>, AppError> {
        let mut books = self.books.clone();
        books.sort_by(|a, b| {
            sort.iter()
                .map(|field| {
                    let ord = match field.field.as_str() {
                        "id" => a.id.cmp(&b.id),
                        "title" => a.title.cmp(&b.title),
                        "year" => a.year.cmp(&b.year),
                        _ => std::cmp::Ordering::Equal,
                    };
                    match field.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(books
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit() as usize)
            .collect())
    }
}

#[derive(Clone)]
struct TestState {
    builder: Arc<TableBuilder>,
    catalog: Arc<Catalog>,
}

async fn list_books(
    State(state): State<TestState>,
    request: TableRequest,
) -> Result<ApiResponse<Table<Book>>, ApiError> {
    let total_rows = state.catalog.books.len() as u64;
    let table = request
        .build(&state.builder, total_rows, state.catalog.as_ref())
        .await?;
    Ok(ApiResponse::ok(table))
}

async fn list_unavailable(
    State(state): State<TestState>,
    request: TableRequest,
) -> Result<ApiResponse<Table<Book>>, ApiError> {
    let source = |_sort: SortFilter, _window: RowWindow| async move {
        Err::<Vec<Book>, _>(AppError::external_service("catalog replica unreachable"))
    };
    let table = request.build(&state.builder, 40, &source).await?;
    Ok(ApiResponse::ok(table))
}

/// Table settings used by every integration test.
pub fn table_config() -> TableConfig {
    TableConfig {
        query_names: Some(QueryParamNames {
            page: "page".to_string(),
            num_per_page: "num_per_page".to_string(),
            sorter: vec![
                SorterKeys::new("sort", "order"),
                SorterKeys::new("sort1", "order1"),
            ],
        }),
        default_sort_order: Some(vec![SortField::desc("id")]),
        default_rows_per_page: Some(10),
        num_surrounding_page_links: 4,
        rows_per_page_options: vec![10, 20, 50],
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Status and decoded JSON body of a test request.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    /// Create a new test application serving `count` books.
    pub fn new(count: u64) -> Self {
        let state = TestState {
            builder: Arc::new(TableBuilder::new(&table_config()).expect("table config")),
            catalog: Arc::new(Catalog::with_books(count)),
        };

        let api = Router::new()
            .route("/books", get(list_books))
            .route("/unavailable", get(list_unavailable))
            .with_state(state);

        Self {
            router: build_app(Router::new().nest("/api", api)),
        }
    }

    /// Issue a GET request and decode the JSON body.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body");
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}
