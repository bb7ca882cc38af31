//! Service implementations
//!
//! Concrete catalog backends behind the `CatalogLookup` and `CatalogStore` traits.

pub mod catalog;

#[cfg(test)]
mod tests;

pub use catalog::InMemoryCatalog;
