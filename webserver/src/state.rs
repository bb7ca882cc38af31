//! Shared handler state

use simulator::{CatalogLookup, CatalogStore, Dispatcher, SimulatorConfig};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// State cloned into every request handler
pub struct AppState<C> {
    pub catalog: Arc<C>,
    pub dispatcher: Dispatcher<C>,
    /// Reading time used when a simulate request does not name one
    pub read_duration: Duration,
    pub started_at: Instant,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            dispatcher: self.dispatcher.clone(),
            read_duration: self.read_duration,
            started_at: self.started_at,
        }
    }
}

impl<C> AppState<C>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    pub fn new(catalog: Arc<C>, config: &SimulatorConfig) -> Self {
        let dispatcher = Dispatcher::with_config(Arc::clone(&catalog), config.dispatch_config());
        Self {
            catalog,
            dispatcher,
            read_duration: config.read_duration,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
