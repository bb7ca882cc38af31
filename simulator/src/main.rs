//! Command line entry point for the simulator
//!
//! `simulate` reads several books concurrently; `search` looks books up by title.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

use shared::logging::{self, ComponentId};
use shared::{BatchReport, Book, component_debug, component_info};
use simulator::{BatchRequest, CatalogStore, Dispatcher, InMemoryCatalog, SimulatorConfig};

/// Book catalog search and concurrent reading simulation
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Simulates reading books from the catalog concurrently")]
struct Args {
    /// JSON file with the catalog to load (overrides BOOKSHELF_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate reading every listed book at the same time
    Simulate(SimulateOptions),

    /// Search books whose title contains the query
    Search {
        query: String,
    },
}

#[derive(clap::Args, Debug)]
struct SimulateOptions {
    /// Book ids; malformed ids are reported and skipped
    #[arg(required = true, allow_negative_numbers = true)]
    ids: Vec<String>,

    /// Reading time per book in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Maximum number of books read at once
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Give up on the whole batch after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

impl SimulateOptions {
    /// Layer the command line flags over the environment configuration
    fn apply(&self, mut config: SimulatorConfig) -> SimulatorConfig {
        if let Some(ms) = self.duration_ms {
            config = config.with_read_duration(Duration::from_millis(ms));
        }
        if let Some(limit) = self.max_concurrency {
            config = config.with_max_concurrency(limit);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_batch_timeout(Duration::from_millis(ms));
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    ComponentId::init_cli();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = SimulatorConfig::from_env().context("invalid simulator configuration")?;
    if let Some(path) = args.catalog {
        config = config.with_catalog_path(path);
    }

    let catalog = Arc::new(load_catalog(&config).await?);

    match args.command {
        Command::Simulate(options) => {
            let config = options.apply(config);
            config.validate().context("invalid simulate options")?;

            simulate_reading(catalog, &config, &options.ids).await
        }
        Command::Search { query } => search_books(catalog.as_ref(), &query).await,
    }
}

async fn load_catalog(config: &SimulatorConfig) -> anyhow::Result<InMemoryCatalog> {
    match &config.catalog_path {
        Some(path) => InMemoryCatalog::load_from_file(path)
            .await
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => {
            component_debug!(ComponentId::current(), "No catalog file configured, starting empty");
            Ok(InMemoryCatalog::new())
        }
    }
}

async fn simulate_reading(catalog: Arc<InMemoryCatalog>, config: &SimulatorConfig, ids: &[String]) -> anyhow::Result<()> {
    let request = BatchRequest::parse(ids);
    write_invalid_ids(&mut io::stdout().lock(), &request)?;

    component_info!(
        ComponentId::current(),
        "📖 Reading {} books for {:?} each",
        request.len(),
        config.read_duration
    );

    let dispatcher = Dispatcher::with_config(catalog, config.dispatch_config());
    let report = dispatcher
        .run_batch_until(&request, config.read_duration, shutdown_signal())
        .await
        .context("reading simulation did not complete")?;

    write_outcomes(&mut io::stdout().lock(), &report)?;

    logging::log_success(
        ComponentId::current(),
        &format!("Simulated {} reads in {}ms", report.result.len(), report.elapsed_ms),
    );
    Ok(())
}

async fn search_books<C: CatalogStore>(catalog: &C, query: &str) -> anyhow::Result<()> {
    let books = catalog
        .search_by_title(query)
        .await
        .context("error getting book by name")?;

    write_search_results(&mut io::stdout().lock(), &books)?;
    Ok(())
}

fn write_invalid_ids(out: &mut impl Write, request: &BatchRequest) -> io::Result<()> {
    for token in request.invalid_ids() {
        writeln!(out, "Invalid book id: {token}")?;
    }
    Ok(())
}

/// One line per outcome, in completion order
fn write_outcomes(out: &mut impl Write, report: &BatchReport) -> io::Result<()> {
    for outcome in &report.result.outcomes {
        writeln!(out, "{outcome}")?;
    }
    Ok(())
}

fn write_search_results(out: &mut impl Write, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "no books found");
    }

    writeln!(out, "{} books found:", books.len())?;
    for book in books {
        writeln!(out, "{book}")?;
    }
    Ok(())
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ComponentId::current(), "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
