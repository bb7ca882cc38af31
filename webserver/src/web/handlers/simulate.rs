//! Reading simulation handler - POST /books/simulate
//!
//! If the client disconnects mid-batch, axum drops this future and the
//! dispatcher aborts the executions still in flight.

use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use shared::BatchReport;
use simulator::{BatchRequest, CatalogLookup, CatalogStore};
use std::time::Duration;

use super::status_for;
use crate::state::AppState;

/// One entry of the `ids` array; numbers and strings are both accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdToken {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl IdToken {
    fn into_token(self) -> String {
        match self {
            IdToken::Number(n) => n.to_string(),
            IdToken::Text(s) => s,
            IdToken::Other(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub ids: Vec<IdToken>,
    /// Overrides the server's configured reading time
    pub duration_ms: Option<u64>,
}

pub async fn simulate_reading<C>(
    State(state): State<AppState<C>>,
    Json(request): Json<SimulateRequest>,
) -> Result<Json<BatchReport>, StatusCode>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    let batch = BatchRequest::parse(request.ids.into_iter().map(IdToken::into_token));
    let duration = request
        .duration_ms
        .map(Duration::from_millis)
        .unwrap_or(state.read_duration);

    state
        .dispatcher
        .run_batch(&batch, duration)
        .await
        .map(Json)
        .map_err(|e| status_for(&e))
}
