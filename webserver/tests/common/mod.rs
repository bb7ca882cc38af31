//! Test fixtures and helpers for webserver tests

#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::Router;
use serde_json::Value;
use shared::{Book, ItemId};
use simulator::{InMemoryCatalog, SimulatorConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use webserver::{AppState, WebServer};

pub fn book(id: i64, title: &str, author: &str, genre: &str) -> Book {
    Book {
        id: ItemId(id),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        book(1, "Dune", "Frank Herbert", "Science Fiction"),
        book(2, "Emma", "Jane Austen", "Romance"),
        book(3, "Dune Messiah", "Frank Herbert", "Science Fiction"),
    ]
}

/// Config with a short reading time so simulate requests finish quickly
pub fn test_config() -> SimulatorConfig {
    SimulatorConfig::default().with_read_duration(Duration::from_millis(20))
}

pub fn test_state() -> AppState<InMemoryCatalog> {
    let catalog = InMemoryCatalog::from_books(seed_books()).unwrap();
    AppState::new(Arc::new(catalog), &test_config())
}

pub fn test_server(config: &SimulatorConfig) -> WebServer<InMemoryCatalog> {
    let catalog = InMemoryCatalog::from_books(seed_books()).unwrap();
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    WebServer::new(addr, Arc::new(catalog), config)
}

/// Send one request through the router and decode the JSON body (Null when empty)
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
