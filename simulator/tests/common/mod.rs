//! Common test utilities and infrastructure
//!
//! Fixtures, catalog doubles and helpers shared by the simulator test suites.

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{CountingCatalog, PanickingCatalog, StuckCatalog, TestHelpers};
