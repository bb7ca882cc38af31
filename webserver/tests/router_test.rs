//! Router tests: requests go through the full axum stack

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;

use common::{send, test_config, test_server};

#[tokio::test]
async fn test_crud_round_trip_over_http() {
    let router = test_server(&test_config()).build_router();

    let (status, created) = send(
        &router,
        "POST",
        "/books",
        Some(json!({"title": "Beloved", "author": "Toni Morrison", "genre": "Literary"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);

    let (status, fetched) = send(&router, "GET", "/books/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["author"], "Toni Morrison");

    let (status, updated) = send(
        &router,
        "PUT",
        "/books/4",
        Some(json!({"title": "Beloved", "author": "Toni Morrison", "genre": "Classic"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["genre"], "Classic");

    let (status, _) = send(&router, "DELETE", "/books/4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "GET", "/books/4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_bad_request() {
    let router = test_server(&test_config()).build_router();

    let (status, _) = send(&router, "GET", "/books/not-a-number", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_title_search_query() {
    let router = test_server(&test_config()).build_router();

    let (status, books) = send(&router, "GET", "/books?title=messiah", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(books.as_array().map(Vec::len), Some(1));
    assert_eq!(books[0]["title"], "Dune Messiah");
}

#[tokio::test]
async fn test_simulate_route_is_not_shadowed_by_id_route() {
    let router = test_server(&test_config()).build_router();

    let (status, report) = send(
        &router,
        "POST",
        "/books/simulate",
        Some(json!({"ids": [2, "2", "x", 1.5, 404]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["outcomes"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["invalid_ids"], json!(["x", "1.5"]));

    let outcomes = report["outcomes"].as_array().cloned().unwrap_or_default();
    let completed = outcomes.iter().filter(|o| o["status"] == "completed").count();
    let not_found: Vec<_> = outcomes.iter().filter(|o| o["status"] == "not_found").collect();
    assert_eq!(completed, 2);
    assert_eq!(not_found.len(), 1);
    assert_eq!(not_found[0]["value"], 404);
}

#[tokio::test]
async fn test_simulate_timeout_is_gateway_timeout() {
    let config = test_config().with_batch_timeout(Duration::from_millis(30));
    let router = test_server(&config).build_router();

    let (status, _) = send(
        &router,
        "POST",
        "/books/simulate",
        Some(json!({"ids": [1, 2], "duration_ms": 2000})),
    )
    .await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_health_route() {
    let router = test_server(&test_config()).build_router();

    let (status, body) = send(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
