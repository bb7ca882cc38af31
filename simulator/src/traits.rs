//! Trait definitions with mockall annotations for testing
//!
//! The simulation engine only depends on `CatalogLookup`; `CatalogStore`
//! covers the CRUD surface used by the CLI and the webserver.

use shared::{Book, ItemId, NewBook};

use crate::error::SimulatorResult;

/// Read capability resolving an identifier to a book or its absence
///
/// Implementations must tolerate concurrent calls from many simulator tasks.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CatalogLookup: Send + Sync {
    /// Resolve one identifier
    ///
    /// # Returns
    /// `Ok(Some(book))` when present, `Ok(None)` when absent, `Err` when the
    /// backing store could not answer
    async fn lookup(&self, id: ItemId) -> SimulatorResult<Option<Book>>;
}

/// Create/read/update/delete access to the catalog
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a new book and return it with its assigned id
    async fn create(&self, book: NewBook) -> SimulatorResult<Book>;

    /// All books ordered by id
    async fn list(&self) -> SimulatorResult<Vec<Book>>;

    async fn get(&self, id: ItemId) -> SimulatorResult<Option<Book>>;

    /// Books whose title contains `query`, case-insensitively
    async fn search_by_title(&self, query: &str) -> SimulatorResult<Vec<Book>>;

    /// Replace title, author and genre of an existing book
    async fn update(&self, book: Book) -> SimulatorResult<Book>;

    async fn delete(&self, id: ItemId) -> SimulatorResult<()>;
}
