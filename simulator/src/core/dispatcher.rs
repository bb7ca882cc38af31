//! Concurrent batch dispatch
//!
//! Fans a batch out to one `ItemSimulator` task per identifier and fans the
//! outcomes back in through a single completion queue. The dispatcher returns
//! once it has read exactly one outcome per dispatched id, in whatever order
//! they complete.
//!
//! Executions are owned by a `JoinSet`, so dropping a dispatch future (deadline
//! elapsed, caller cancelled) aborts everything still in flight. No partial
//! result is ever returned.

use shared::{BatchReport, BatchResult, ItemId};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use super::batch::BatchRequest;
use super::item_simulator::ItemSimulator;
use crate::error::{SimulatorError, SimulatorResult};
use crate::traits::CatalogLookup;

/// Dispatch tuning shared by every batch a dispatcher runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Cap on simultaneously running executions; `None` runs one task per id at once
    pub max_concurrency: Option<usize>,
    /// Deadline applied by `run_batch`; `None` waits for every outcome
    pub batch_timeout: Option<Duration>,
}

/// Runs batches of read simulations against a shared catalog
pub struct Dispatcher<L> {
    catalog: Arc<L>,
    config: DispatchConfig,
}

impl<L> Clone for Dispatcher<L> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
        }
    }
}

impl<L> Dispatcher<L>
where
    L: CatalogLookup + 'static,
{
    pub fn new(catalog: Arc<L>) -> Self {
        Self::with_config(catalog, DispatchConfig::default())
    }

    pub fn with_config(catalog: Arc<L>, config: DispatchConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Simulate every id concurrently and collect one outcome per id
    ///
    /// Repeated ids are dispatched repeatedly. Outcomes are in completion order.
    pub async fn dispatch(&self, ids: &[ItemId], duration: Duration) -> SimulatorResult<BatchResult> {
        if ids.is_empty() {
            return Ok(BatchResult::default());
        }

        let expected = ids.len();
        debug!(
            batch_size = expected,
            max_concurrency = ?self.config.max_concurrency,
            duration_ms = duration.as_millis() as u64,
            "Dispatching batch"
        );

        // Capacity covers the whole batch so no execution ever blocks on send
        let (results_tx, mut results_rx) = mpsc::channel(expected);
        let permits = self
            .config
            .max_concurrency
            .filter(|limit| *limit > 0)
            .map(|limit| Arc::new(Semaphore::new(limit)));
        let simulator = ItemSimulator::new(Arc::clone(&self.catalog), duration);

        let mut executions = JoinSet::new();
        for &id in ids {
            let simulator = simulator.clone();
            let results_tx = results_tx.clone();
            let permits = permits.clone();

            executions.spawn(async move {
                let _permit = match permits {
                    Some(permits) => match permits.acquire_owned().await {
                        Ok(permit) => Some(permit),
                        Err(_) => return,
                    },
                    None => None,
                };
                simulator.run(id, results_tx).await;
            });
        }
        // Only executions hold senders now; a closed queue means one of them died
        drop(results_tx);

        let mut outcomes = Vec::with_capacity(expected);
        while outcomes.len() < expected {
            match results_rx.recv().await {
                Some(outcome) => outcomes.push(outcome),
                None => {
                    error!(expected, received = outcomes.len(), "Executions exited without reporting");
                    return Err(SimulatorError::ExecutionLost {
                        expected,
                        received: outcomes.len(),
                    });
                }
            }
        }

        Ok(BatchResult::new(outcomes))
    }

    /// `dispatch` bounded by a deadline; on expiry the whole batch fails
    pub async fn dispatch_with_timeout(
        &self,
        ids: &[ItemId],
        duration: Duration,
        timeout: Duration,
    ) -> SimulatorResult<BatchResult> {
        match tokio::time::timeout(timeout, self.dispatch(ids, duration)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(batch_size = ids.len(), timeout_ms = timeout.as_millis() as u64, "Batch timed out");
                Err(SimulatorError::BatchTimedOut {
                    expected: ids.len(),
                    timeout,
                })
            }
        }
    }

    /// `dispatch` that gives up as soon as `cancelled` resolves
    pub async fn dispatch_until<F>(
        &self,
        ids: &[ItemId],
        duration: Duration,
        cancelled: F,
    ) -> SimulatorResult<BatchResult>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            result = self.dispatch(ids, duration) => result,
            _ = cancelled => {
                warn!(batch_size = ids.len(), "Batch cancelled");
                Err(SimulatorError::BatchCancelled { expected: ids.len() })
            }
        }
    }

    /// Batch trigger: dispatch the valid ids of `request` under the configured deadline
    pub async fn run_batch(&self, request: &BatchRequest, duration: Duration) -> SimulatorResult<BatchReport> {
        self.run_batch_until(request, duration, std::future::pending()).await
    }

    /// `run_batch` that can also be cancelled by the caller
    pub async fn run_batch_until<F>(
        &self,
        request: &BatchRequest,
        duration: Duration,
        cancelled: F,
    ) -> SimulatorResult<BatchReport>
    where
        F: Future<Output = ()>,
    {
        let started = Instant::now();
        let ids = request.ids();

        let dispatch = async {
            match self.config.batch_timeout {
                Some(timeout) => self.dispatch_with_timeout(ids, duration, timeout).await,
                None => self.dispatch(ids, duration).await,
            }
        };

        let result = tokio::select! {
            biased;
            result = dispatch => result?,
            _ = cancelled => {
                warn!(batch_size = ids.len(), "Batch cancelled");
                return Err(SimulatorError::BatchCancelled { expected: ids.len() });
            }
        };

        let elapsed = started.elapsed();
        info!(
            dispatched = result.len(),
            completed = result.completed_count(),
            not_found = result.not_found_count(),
            invalid = request.invalid_ids().len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Batch finished"
        );

        Ok(BatchReport {
            result,
            invalid_ids: request.invalid_ids().to_vec(),
            elapsed_ms: elapsed.as_millis() as u64,
        })
    }
}
