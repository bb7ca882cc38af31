//! Single-item read simulation
//!
//! Resolves one id against the catalog and, only once the book is known to
//! exist, spends the configured duration "reading" it.

use shared::{ItemId, SimulationOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::traits::CatalogLookup;

/// Simulates a fixed-duration read of one catalog item
pub struct ItemSimulator<L> {
    catalog: Arc<L>,
    duration: Duration,
}

impl<L> Clone for ItemSimulator<L> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            duration: self.duration,
        }
    }
}

impl<L> ItemSimulator<L>
where
    L: CatalogLookup,
{
    pub fn new(catalog: Arc<L>, duration: Duration) -> Self {
        Self { catalog, duration }
    }

    /// Resolve `id` and simulate reading it
    ///
    /// Lookup errors and absent books both yield `NotFound` without sleeping.
    pub async fn simulate(&self, id: ItemId) -> SimulationOutcome {
        let book = match self.catalog.lookup(id).await {
            Ok(Some(book)) => book,
            Ok(None) => {
                debug!(item_id = %id, "Book not in catalog");
                return SimulationOutcome::NotFound(id);
            }
            Err(e) => {
                warn!(item_id = %id, error = %e, "Catalog lookup failed");
                return SimulationOutcome::NotFound(id);
            }
        };

        debug!(item_id = %id, title = %book.title, duration_ms = self.duration.as_millis() as u64, "Reading book");
        tokio::time::sleep(self.duration).await;

        SimulationOutcome::Completed(book.title)
    }

    /// Simulate `id` and report the outcome on the dispatcher's completion queue
    pub async fn run(&self, id: ItemId, results: mpsc::Sender<SimulationOutcome>) {
        let outcome = self.simulate(id).await;
        if results.send(outcome).await.is_err() {
            // Receiver dropped: the batch was abandoned by its caller
            debug!(item_id = %id, "Batch abandoned before outcome was delivered");
        }
    }
}
