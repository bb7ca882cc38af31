//! Main webserver implementation
//!
//! Wires the catalog and dispatcher into an axum router and serves it until
//! the shutdown future resolves.

use axum::{
    Router,
    routing::{get, post},
};
use shared::logging::{self, ComponentId};
use simulator::{CatalogLookup, CatalogStore, SimulatorConfig};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers;

/// HTTP server over any catalog backend
pub struct WebServer<C> {
    bind_address: SocketAddr,
    state: AppState<C>,
}

impl<C> WebServer<C>
where
    C: CatalogStore + CatalogLookup + 'static,
{
    pub fn new(bind_address: SocketAddr, catalog: Arc<C>, config: &SimulatorConfig) -> Self {
        Self {
            bind_address,
            state: AppState::new(catalog, config),
        }
    }

    pub fn state(&self) -> &AppState<C> {
        &self.state
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route(
                "/books",
                get(handlers::list_books::<C>).post(handlers::create_book::<C>),
            )
            .route("/books/simulate", post(handlers::simulate_reading::<C>))
            .route(
                "/books/:id",
                get(handlers::get_book::<C>)
                    .put(handlers::update_book::<C>)
                    .delete(handlers::delete_book::<C>),
            )
            .route("/health", get(handlers::health_check::<C>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e)))?;

        logging::log_startup(
            ComponentId::current(),
            &format!("catalog API on http://{}", self.bind_address),
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
