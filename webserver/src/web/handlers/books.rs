//! Catalog CRUD handlers
//!
//! `/books` and `/books/:id`

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use shared::{Book, ItemId, NewBook};
use simulator::{CatalogLookup, CatalogStore};

use super::status_for;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct TitleQuery {
    /// Case-insensitive substring to match against titles
    pub title: Option<String>,
}

fn parse_id(raw: &str) -> Result<ItemId, StatusCode> {
    raw.parse::<ItemId>().map_err(|_| StatusCode::BAD_REQUEST)
}

/// List books - GET /books[?title=...]
pub async fn list_books<C>(
    State(state): State<AppState<C>>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Vec<Book>>, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let books = match query.title {
        Some(title) => state.catalog.search_by_title(&title).await,
        None => state.catalog.list().await,
    };
    books.map(Json).map_err(|e| status_for(&e))
}

/// Create book - POST /books
pub async fn create_book<C>(
    State(state): State<AppState<C>>,
    Json(new_book): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let book = state.catalog.create(new_book).await.map_err(|e| status_for(&e))?;
    tracing::debug!(item_id = %book.id, title = %book.title, "Created book");
    Ok((StatusCode::CREATED, Json(book)))
}

/// Fetch one book - GET /books/:id
pub async fn get_book<C>(
    State(state): State<AppState<C>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Book>, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let id = parse_id(&raw_id)?;
    match state.catalog.get(id).await {
        Ok(Some(book)) => Ok(Json(book)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(status_for(&e)),
    }
}

/// Replace a book's fields - PUT /books/:id
pub async fn update_book<C>(
    State(state): State<AppState<C>>,
    Path(raw_id): Path<String>,
    Json(fields): Json<NewBook>,
) -> Result<Json<Book>, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let id = parse_id(&raw_id)?;
    state
        .catalog
        .update(Book::from_new(id, fields))
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}

/// Remove a book - DELETE /books/:id
pub async fn delete_book<C>(
    State(state): State<AppState<C>>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let id = parse_id(&raw_id)?;
    state
        .catalog
        .delete(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|e| status_for(&e))
}
