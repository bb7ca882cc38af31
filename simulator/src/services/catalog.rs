//! In-memory catalog store
//!
//! Holds the book catalog behind a tokio `RwLock` so that many simulator tasks
//! can resolve ids concurrently while CRUD writers take exclusive access.
//! The store can be seeded from a JSON array of book records.

use async_trait::async_trait;
use shared::{Book, ItemId, NewBook, component_debug};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::{SimulatorError, SimulatorResult};
use crate::traits::{CatalogLookup, CatalogStore};

#[derive(Debug)]
struct CatalogState {
    books: BTreeMap<ItemId, Book>,
    /// `None` once the id space is used up
    next_id: Option<i64>,
}

/// Catalog kept entirely in memory
#[derive(Debug)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    /// Create an empty catalog; the first book gets id 1
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                books: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Seed a catalog with existing records, keeping their ids
    pub fn from_books(books: Vec<Book>) -> SimulatorResult<Self> {
        let mut by_id = BTreeMap::new();
        for book in books {
            Self::validate(&book.title)?;
            let id = book.id;
            if by_id.insert(id, book).is_some() {
                return Err(SimulatorError::invalid_record(format!("duplicate book id {id}")));
            }
        }

        let next_id = match by_id.keys().next_back() {
            Some(highest) => highest.value().max(0).checked_add(1),
            None => Some(1),
        };
        Ok(Self {
            state: RwLock::new(CatalogState { books: by_id, next_id }),
        })
    }

    /// Seed a catalog from a JSON file holding an array of books
    pub async fn load_from_file(path: impl AsRef<Path>) -> SimulatorResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let books: Vec<Book> = serde_json::from_str(&content)?;

        component_debug!(
            shared::logging::ComponentId::current(),
            "📚 Loaded {} books from {}",
            books.len(),
            path.display()
        );
        Self::from_books(books)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.books.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.books.is_empty()
    }

    fn validate(title: &str) -> SimulatorResult<()> {
        if title.trim().is_empty() {
            return Err(SimulatorError::invalid_record("title must not be empty"));
        }
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn lookup(&self, id: ItemId) -> SimulatorResult<Option<Book>> {
        Ok(self.state.read().await.books.get(&id).cloned())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn create(&self, book: NewBook) -> SimulatorResult<Book> {
        Self::validate(&book.title)?;

        let mut state = self.state.write().await;
        let id = state
            .next_id
            .map(ItemId)
            .ok_or_else(|| SimulatorError::catalog_unavailable("no book ids left to assign"))?;
        state.next_id = id.value().checked_add(1);

        let book = Book::from_new(id, book);
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn list(&self) -> SimulatorResult<Vec<Book>> {
        Ok(self.state.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: ItemId) -> SimulatorResult<Option<Book>> {
        self.lookup(id).await
    }

    async fn search_by_title(&self, query: &str) -> SimulatorResult<Vec<Book>> {
        let needle = query.to_lowercase();
        Ok(self
            .state
            .read()
            .await
            .books
            .values()
            .filter(|book| book.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> SimulatorResult<Book> {
        Self::validate(&book.title)?;

        let mut state = self.state.write().await;
        match state.books.get_mut(&book.id) {
            Some(existing) => {
                *existing = book.clone();
                Ok(book)
            }
            None => Err(SimulatorError::BookNotFound { id: book.id }),
        }
    }

    async fn delete(&self, id: ItemId) -> SimulatorResult<()> {
        match self.state.write().await.books.remove(&id) {
            Some(_) => Ok(()),
            None => Err(SimulatorError::BookNotFound { id }),
        }
    }
}
