//! Webserver library for the bookshelf catalog
//!
//! Exposes the book catalog over HTTP along with the concurrent reading
//! simulation.

pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::AppState;
pub use web::handlers::{IdToken, SimulateRequest};
pub use webserver_impl::WebServer;
