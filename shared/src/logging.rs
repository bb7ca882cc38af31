//! Shared logging utilities for consistent tracing across all binaries

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::OnceLock;
use tracing::{error, info};

static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Which binary is emitting traces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Command line simulator
    Cli,
    /// HTTP catalog server
    WebServer,
    /// Linked into another program (tests, embedding) without an init call
    Embedded,
}

impl ComponentId {
    /// Initialize the global component ID for the CLI
    pub fn init_cli() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::Cli)
    }

    /// Initialize the global component ID for the webserver
    pub fn init_webserver() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::WebServer)
    }

    /// Get the global component ID, falling back to `Embedded` before init
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get().unwrap_or(&ComponentId::Embedded)
    }

    fn filter_directives(&self, base_level: &str) -> String {
        match self {
            ComponentId::Cli | ComponentId::Embedded => {
                format!("simulator={base_level},shared={base_level}")
            }
            ComponentId::WebServer => format!(
                "webserver={base_level},simulator={base_level},shared={base_level},tower_http=debug,axum={base_level}"
            ),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Cli => write!(f, "cli"),
            ComponentId::WebServer => write!(f, "webserver"),
            ComponentId::Embedded => write!(f, "embedded"),
        }
    }
}

/// Initialize the stdout tracing subscriber for the current component
///
/// `RUST_LOG`, when set, takes precedence over the computed filter.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let base_level = log_level.unwrap_or("info");
    let directives = ComponentId::current().filter_directives(base_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    // try_init: a second initialisation (tests, embedding) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! component_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! component_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &ComponentId, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &ComponentId, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &ComponentId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &ComponentId, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_display() {
        assert_eq!(ComponentId::Cli.to_string(), "cli");
        assert_eq!(ComponentId::WebServer.to_string(), "webserver");
        assert_eq!(ComponentId::Embedded.to_string(), "embedded");
    }

    #[test]
    fn test_filter_directives_cover_component_crates() {
        let cli = ComponentId::Cli.filter_directives("debug");
        assert!(cli.contains("simulator=debug"));
        assert!(cli.contains("shared=debug"));

        let web = ComponentId::WebServer.filter_directives("warn");
        assert!(web.contains("webserver=warn"));
        assert!(web.contains("simulator=warn"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }
}
