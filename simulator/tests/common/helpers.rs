//! Test helpers and catalog doubles for simulator tests

use shared::{Book, ItemId, SimulationOutcome};
use simulator::{CatalogLookup, DispatchConfig, Dispatcher, InMemoryCatalog, SimulatorResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::fixtures::TestFixtures;

/// Convenience constructors and assertions
pub struct TestHelpers;

impl TestHelpers {
    /// Dispatcher over the standard fixture catalog
    pub fn dispatcher() -> Dispatcher<InMemoryCatalog> {
        Dispatcher::new(Arc::new(TestFixtures::catalog()))
    }

    pub fn dispatcher_with(config: DispatchConfig) -> Dispatcher<InMemoryCatalog> {
        Dispatcher::with_config(Arc::new(TestFixtures::catalog()), config)
    }

    /// Sort outcomes so batches can be compared as multisets
    pub fn sorted(mut outcomes: Vec<SimulationOutcome>) -> Vec<SimulationOutcome> {
        outcomes.sort();
        outcomes
    }

    pub fn assert_same_multiset(actual: &[SimulationOutcome], expected: &[SimulationOutcome]) {
        assert_eq!(
            Self::sorted(actual.to_vec()),
            Self::sorted(expected.to_vec()),
            "outcome multisets differ"
        );
    }
}

/// Lookup that never answers
pub struct StuckCatalog;

#[async_trait::async_trait]
impl CatalogLookup for StuckCatalog {
    async fn lookup(&self, _id: ItemId) -> SimulatorResult<Option<Book>> {
        std::future::pending().await
    }
}

/// Lookup that panics, killing the execution before it reports
pub struct PanickingCatalog;

#[async_trait::async_trait]
impl CatalogLookup for PanickingCatalog {
    async fn lookup(&self, id: ItemId) -> SimulatorResult<Option<Book>> {
        panic!("catalog exploded while resolving {id}");
    }
}

/// Slow lookup that counts how many lookups ran to completion
pub struct CountingCatalog {
    pub delay: Duration,
    pub finished: AtomicUsize,
}

impl CountingCatalog {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            finished: AtomicUsize::new(0),
        }
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CatalogLookup for CountingCatalog {
    async fn lookup(&self, _id: ItemId) -> SimulatorResult<Option<Book>> {
        tokio::time::sleep(self.delay).await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(Some(TestFixtures::dune()))
    }
}
