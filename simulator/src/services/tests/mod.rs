//! Service-specific tests


/// Shared fixtures for service tests
pub mod common {
    use shared::{Book, ItemId, NewBook};

    pub fn book(id: i64, title: &str) -> Book {
        Book {
            id: ItemId(id),
            title: title.to_string(),
            author: "Test Author".to_string(),
            genre: "Test Genre".to_string(),
        }
    }

    pub fn new_book(title: &str, author: &str, genre: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
        }
    }
}
