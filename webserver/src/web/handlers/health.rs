//! Health check - GET /health

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};
use simulator::{CatalogLookup, CatalogStore};

use super::status_for;
use crate::state::AppState;

pub async fn health_check<C>(State(state): State<AppState<C>>) -> Result<Json<Value>, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let books = state.catalog.list().await.map_err(|e| status_for(&e))?;

    Ok(Json(json!({
        "status": "ok",
        "data": {
            "books": books.len(),
            "read_duration_ms": state.read_duration.as_millis() as u64,
            "max_concurrency": state.dispatcher.config().max_concurrency,
            "uptime_seconds": state.uptime_seconds(),
            "version": env!("CARGO_PKG_VERSION")
        }
    })))
}
