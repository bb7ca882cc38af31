//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Unique identifier for a catalog item, assigned by the catalog store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl ItemId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for ItemId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(ItemId)
            .map_err(|_| SharedError::InvalidItemId { input: s.to_string() })
    }
}

/// A catalog record. Owned by the catalog store; the simulation engine only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: ItemId,
    pub title: String,
    pub author: String,
    /// Category of the book
    pub genre: String,
}

impl Book {
    pub fn from_new(id: ItemId, new_book: NewBook) -> Self {
        Self {
            id,
            title: new_book.title,
            author: new_book.author,
            genre: new_book.genre,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Genre: {}",
            self.id, self.title, self.author, self.genre
        )
    }
}

/// Book fields supplied by a caller before the store assigns an id
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: String,
}

/// Terminal result of simulating one dispatched identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SimulationOutcome {
    /// The book was found and read; carries its title
    Completed(String),
    /// Lookup failed or returned nothing for this id
    NotFound(ItemId),
}

impl SimulationOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SimulationOutcome::Completed(_))
    }
}

impl fmt::Display for SimulationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationOutcome::Completed(title) => write!(f, "Book with title {title} read"),
            SimulationOutcome::NotFound(id) => write!(f, "Book with id {id} not found"),
        }
    }
}

/// Outcomes of one dispatched batch, in completion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub outcomes: Vec<SimulationOutcome>,
}

impl BatchResult {
    pub fn new(outcomes: Vec<SimulationOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_completed()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Outcomes sorted into a canonical order, for comparing batches as multisets
    pub fn sorted_outcomes(&self) -> Vec<SimulationOutcome> {
        let mut outcomes = self.outcomes.clone();
        outcomes.sort();
        outcomes
    }
}

impl IntoIterator for BatchResult {
    type Item = SimulationOutcome;
    type IntoIter = std::vec::IntoIter<SimulationOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

/// What a batch trigger hands back to its caller: the dispatched outcomes
/// plus the tokens that never made it past parsing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(flatten)]
    pub result: BatchResult,
    pub invalid_ids: Vec<String>,
    pub elapsed_ms: u64,
}
