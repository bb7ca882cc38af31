//! Simulator configuration
//!
//! Values are read from the environment (optionally populated from a `.env`
//! file) and can then be overridden by command line flags.
//!
//! ## Environment variables
//! - `BOOKSHELF_READ_DURATION_MS`: simulated reading time per book (default 2000)
//! - `BOOKSHELF_MAX_CONCURRENCY`: cap on concurrent reads (default unbounded)
//! - `BOOKSHELF_BATCH_TIMEOUT_MS`: deadline for a whole batch (default none)
//! - `BOOKSHELF_CATALOG`: JSON file used to seed the catalog

use shared::{SharedError, SharedResult};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::DispatchConfig;

/// Reading time used when nothing else is configured
pub const DEFAULT_READ_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    pub read_duration: Duration,
    pub max_concurrency: Option<usize>,
    pub batch_timeout: Option<Duration>,
    pub catalog_path: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            read_duration: DEFAULT_READ_DURATION,
            max_concurrency: None,
            batch_timeout: None,
            catalog_path: None,
        }
    }
}

impl SimulatorConfig {
    const READ_DURATION_VAR: &'static str = "BOOKSHELF_READ_DURATION_MS";
    const MAX_CONCURRENCY_VAR: &'static str = "BOOKSHELF_MAX_CONCURRENCY";
    const BATCH_TIMEOUT_VAR: &'static str = "BOOKSHELF_BATCH_TIMEOUT_MS";
    const CATALOG_VAR: &'static str = "BOOKSHELF_CATALOG";

    /// Load configuration from `.env` (if present) and the process environment
    pub fn from_env() -> SharedResult<Self> {
        // Missing .env is fine; real environment variables still apply
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(Self::READ_DURATION_VAR) {
            config.read_duration = Duration::from_millis(parse_number(Self::READ_DURATION_VAR, &raw)?);
        }
        if let Some(raw) = lookup(Self::MAX_CONCURRENCY_VAR) {
            config.max_concurrency = Some(parse_number(Self::MAX_CONCURRENCY_VAR, &raw)?);
        }
        if let Some(raw) = lookup(Self::BATCH_TIMEOUT_VAR) {
            config.batch_timeout = Some(Duration::from_millis(parse_number(Self::BATCH_TIMEOUT_VAR, &raw)?));
        }
        if let Some(raw) = lookup(Self::CATALOG_VAR) {
            config.catalog_path = Some(PathBuf::from(raw));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_read_duration(mut self, read_duration: Duration) -> Self {
        self.read_duration = read_duration;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = Some(max_concurrency);
        self
    }

    pub fn with_batch_timeout(mut self, batch_timeout: Duration) -> Self {
        self.batch_timeout = Some(batch_timeout);
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> SharedResult<()> {
        if self.max_concurrency == Some(0) {
            return Err(SharedError::invalid_config("max_concurrency", 0));
        }
        if self.batch_timeout == Some(Duration::ZERO) {
            return Err(SharedError::invalid_config("batch_timeout_ms", 0));
        }
        Ok(())
    }

    pub fn dispatch_config(&self) -> DispatchConfig {
        DispatchConfig {
            max_concurrency: self.max_concurrency,
            batch_timeout: self.batch_timeout,
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> SharedResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| SharedError::invalid_config(field, raw))
}
