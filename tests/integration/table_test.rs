//! Integration tests for table requests served through axum.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

fn ids(body: &serde_json::Value) -> Vec<u64> {
    body["data"]["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["id"].as_u64().expect("id"))
        .collect()
}

fn page_indices(links: &serde_json::Value) -> Vec<u64> {
    links
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|l| l["pageIndex"].as_u64().expect("pageIndex"))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_middle_page_with_default_sort() {
    let app = helpers::TestApp::new(95);
    let response = app.get("/api/books?page=5").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(ids(&response.body), (46..=55).rev().collect::<Vec<_>>());

    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["currentPage"], 5);
    assert_eq!(pagination["totalPages"], 10);
    assert_eq!(pagination["totalRows"], 95);
    assert_eq!(pagination["rowWindow"], json!({ "startIndex": 41, "endIndex": 50 }));
    assert_eq!(
        pagination["currentPageUrl"],
        "/api/books?page=5&num_per_page=10"
    );
    assert_eq!(page_indices(&pagination["pageLinksBefore"]), vec![3, 4]);
    assert_eq!(page_indices(&pagination["pageLinksAfter"]), vec![6, 7]);
    assert_eq!(pagination["ellipsisBefore"], true);
    assert_eq!(pagination["ellipsisAfter"], true);
    assert_eq!(pagination["rowsPerPageOptions"], json!([10, 20, 50]));

    assert!(response.text.contains(r#""sorter":{"id":-1}"#));
}

#[tokio::test]
async fn test_multi_column_sort_keeps_precedence() {
    let app = helpers::TestApp::new(40);
    let response = app
        .get("/api/books?sort=title&order=desc&sort1=id&num_per_page=4")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![4, 8, 12, 16]);
    assert!(response.text.contains(r#""sorter":{"title":-1,"id":1}"#));

    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["rowsPerPage"], 4);
    assert_eq!(
        pagination["nextPageUrl"],
        "/api/books?sort=title&order=desc&sort1=id&num_per_page=4&page=2"
    );
    assert!(pagination.get("prevPageUrl").is_none());
}

#[tokio::test]
async fn test_last_page_window_is_not_truncated() {
    let app = helpers::TestApp::new(95);
    let response = app.get("/api/books?page=10").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![5, 4, 3, 2, 1]);

    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["rowWindow"], json!({ "startIndex": 91, "endIndex": 100 }));
    assert!(pagination.get("nextPageUrl").is_none());
    assert!(pagination.get("lastPageUrl").is_none());
    assert_eq!(page_indices(&pagination["pageLinksBefore"]), vec![6, 7, 8, 9]);
}

#[tokio::test]
async fn test_invalid_numbers_use_defaults() {
    let app = helpers::TestApp::new(30);
    let response = app.get("/api/books?page=abc&num_per_page=-2").await;

    assert_eq!(response.status, StatusCode::OK);
    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["currentPage"], 1);
    assert_eq!(pagination["rowsPerPage"], 10);
    assert_eq!(
        pagination["currentPageUrl"],
        "/api/books?page=1&num_per_page=10"
    );
}

#[tokio::test]
async fn test_page_past_the_end_returns_no_rows() {
    let app = helpers::TestApp::new(95);
    let response = app.get("/api/books?page=20").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(ids(&response.body).is_empty());
    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["currentPage"], 20);
    assert_eq!(pagination["rowWindow"]["startIndex"], 191);
}

#[tokio::test]
async fn test_empty_catalog() {
    let app = helpers::TestApp::new(0);
    let response = app.get("/api/books").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(ids(&response.body).is_empty());

    let pagination = &response.body["data"]["pagination"];
    assert_eq!(pagination["totalPages"], 0);
    assert_eq!(pagination["rowWindow"], json!({ "startIndex": 1, "endIndex": 10 }));
    assert_eq!(
        pagination["currentPageUrl"],
        "/api/books?page=1&num_per_page=10"
    );
    for key in ["firstPageUrl", "prevPageUrl", "nextPageUrl", "lastPageUrl"] {
        assert!(pagination.get(key).is_none(), "{key} should be absent");
    }
}

#[tokio::test]
async fn test_other_query_parameters_are_preserved() {
    let app = helpers::TestApp::new(25);
    let response = app.get("/api/books?q=war+and+peace&page=2").await;

    let pagination = &response.body["data"]["pagination"];
    assert_eq!(
        pagination["nextPageUrl"],
        "/api/books?q=war+and+peace&page=3&num_per_page=10"
    );
    assert_eq!(
        pagination["firstPageUrl"],
        "/api/books?q=war+and+peace&page=1&num_per_page=10"
    );
}

#[tokio::test]
async fn test_source_failure_maps_to_bad_gateway() {
    let app = helpers::TestApp::new(10);
    let response = app.get("/api/unavailable").await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "UPSTREAM_ERROR");
    assert_eq!(response.body["message"], "catalog replica unreachable");
}
