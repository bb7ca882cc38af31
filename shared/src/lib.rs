//! Shared types for the bookshelf workspace
//!
//! Contains the catalog records and simulation outcomes exchanged between
//! the simulation engine, the CLI and the HTTP surface.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
