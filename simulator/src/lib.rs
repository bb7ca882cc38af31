//! Concurrent batch read-simulation engine
//!
//! Given a batch of catalog ids, the `Dispatcher` runs one `ItemSimulator`
//! per id concurrently and collects exactly one outcome per id. Missing
//! books and failed lookups become `NotFound` outcomes instead of failing
//! the batch.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use crate::core::{BatchRequest, DispatchConfig, Dispatcher, ItemSimulator};
pub use error::{SimulatorError, SimulatorResult};
pub use services::InMemoryCatalog;
pub use traits::{CatalogLookup, CatalogStore, MockCatalogLookup};
