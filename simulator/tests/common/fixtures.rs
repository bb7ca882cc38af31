//! Test fixtures and data for simulator tests

use shared::{Book, ItemId, SimulationOutcome};
use simulator::InMemoryCatalog;

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const DUNE_ID: ItemId = ItemId(1);
    pub const EMMA_ID: ItemId = ItemId(2);
    pub const MISSING_ID: ItemId = ItemId(999);

    /// Number of books in the standard catalog (ids 1..=CATALOG_SIZE)
    pub const CATALOG_SIZE: i64 = 10;

    pub fn dune() -> Book {
        Book {
            id: Self::DUNE_ID,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            genre: "Science Fiction".to_string(),
        }
    }

    pub fn emma() -> Book {
        Book {
            id: Self::EMMA_ID,
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            genre: "Romance".to_string(),
        }
    }

    /// Dune, Emma and numbered filler books up to `CATALOG_SIZE`
    pub fn books() -> Vec<Book> {
        let mut books = vec![Self::dune(), Self::emma()];
        books.extend((3..=Self::CATALOG_SIZE).map(|id| Book {
            id: ItemId(id),
            title: format!("Volume {id}"),
            author: "Various".to_string(),
            genre: "Anthology".to_string(),
        }));
        books
    }

    pub fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_books(Self::books()).expect("fixture catalog is valid")
    }

    pub fn completed(title: &str) -> SimulationOutcome {
        SimulationOutcome::Completed(title.to_string())
    }

    pub fn not_found(id: i64) -> SimulationOutcome {
        SimulationOutcome::NotFound(ItemId(id))
    }

    pub fn ids(raw: &[i64]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId).collect()
    }
}
