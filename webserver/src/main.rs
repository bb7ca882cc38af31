//! WebServer entry point
//!
//! Loads the catalog and serves the HTTP API until Ctrl+C.

use clap::Parser;
use shared::logging::{self, ComponentId};
use shared::component_info;
use simulator::{InMemoryCatalog, SimulatorConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

use webserver::{WebServer, WebServerError, WebServerResult};

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP API for the book catalog and reading simulation")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// JSON file with the catalog to load (overrides BOOKSHELF_CATALOG)
    #[arg(long)]
    catalog: Option<String>,

    /// Default reading time per book in milliseconds
    #[arg(long)]
    read_duration_ms: Option<u64>,

    /// Maximum number of books read at once per batch
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// Deadline for a whole simulation batch in milliseconds
    #[arg(long)]
    batch_timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    ComponentId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let mut config = SimulatorConfig::from_env()?;
    if let Some(path) = args.catalog {
        config = config.with_catalog_path(path);
    }
    if let Some(ms) = args.read_duration_ms {
        config = config.with_read_duration(Duration::from_millis(ms));
    }
    if let Some(limit) = args.max_concurrency {
        config = config.with_max_concurrency(limit);
    }
    if let Some(ms) = args.batch_timeout_ms {
        config = config.with_batch_timeout(Duration::from_millis(ms));
    }
    config.validate()?;

    let http_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {}", e)))?;

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::load_from_file(path).await?,
        None => InMemoryCatalog::new(),
    };
    component_info!(ComponentId::current(), "📚 Catalog ready with {} books", catalog.len().await);

    let webserver = WebServer::new(http_addr, Arc::new(catalog), &config);
    webserver.run(shutdown_signal()).await?;

    logging::log_success(ComponentId::current(), "WebServer stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::current(), "Received Ctrl+C signal"),
        Err(err) => {
            logging::log_error(ComponentId::current(), "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
