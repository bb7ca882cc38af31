//! HTTP request handlers

pub mod books;
pub mod health;
pub mod simulate;

use axum::http::StatusCode;
use simulator::SimulatorError;

pub use books::{create_book, delete_book, get_book, list_books, update_book};
pub use health::health_check;
pub use simulate::{IdToken, SimulateRequest, simulate_reading};

/// Map engine and catalog failures onto HTTP status codes
pub fn status_for(error: &SimulatorError) -> StatusCode {
    match error {
        SimulatorError::BookNotFound { .. } => StatusCode::NOT_FOUND,
        SimulatorError::InvalidRecord { .. } | SimulatorError::SharedError(_) => StatusCode::BAD_REQUEST,
        SimulatorError::BatchTimedOut { .. } => StatusCode::GATEWAY_TIMEOUT,
        SimulatorError::CatalogUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => {
            tracing::error!(error = %error, "Request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
