//! Simulator-specific error types

use shared::{ItemId, SharedError};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Catalog unavailable: {message}")]
    CatalogUnavailable { message: String },

    #[error("Book not found: {id}")]
    BookNotFound { id: ItemId },

    #[error("Invalid catalog record: {message}")]
    InvalidRecord { message: String },

    #[error("Batch of {expected} items timed out after {timeout:?}")]
    BatchTimedOut { expected: usize, timeout: Duration },

    #[error("Batch of {expected} items cancelled")]
    BatchCancelled { expected: usize },

    #[error("Batch lost executions: expected {expected} outcomes, received {received}")]
    ExecutionLost { expected: usize, received: usize },

    #[error("Shared component error")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SimulatorError {
    pub fn catalog_unavailable(message: impl Into<String>) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
        }
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;
