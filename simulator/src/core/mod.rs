//! Core simulation engine
//!
//! Batch parsing, single-item simulation and the concurrent dispatcher.
//! Nothing here touches storage directly; the catalog is reached only
//! through the `CatalogLookup` trait.

pub mod batch;
pub mod dispatcher;
pub mod item_simulator;

pub use batch::BatchRequest;
pub use dispatcher::{DispatchConfig, Dispatcher};
pub use item_simulator::ItemSimulator;
