//! HTTP surface: handlers for the catalog and the reading simulation

pub mod handlers;
