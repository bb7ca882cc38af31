//! Batch request parsing
//!
//! Turns raw identifier tokens into the ids handed to the dispatcher. Malformed
//! tokens are kept aside so the caller can report them; they never produce an
//! outcome.

use shared::ItemId;
use tracing::debug;

/// Ordered identifiers ready for dispatch, plus the tokens that failed to parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {
    ids: Vec<ItemId>,
    invalid: Vec<String>,
}

impl BatchRequest {
    /// Parse identifier tokens, preserving order and duplicates
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut request = Self::default();

        for token in tokens {
            let token = token.as_ref();
            match token.parse::<ItemId>() {
                Ok(id) => request.ids.push(id),
                Err(_) => {
                    debug!(token = %token, "Dropping malformed book id");
                    request.invalid.push(token.to_string());
                }
            }
        }

        request
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn invalid_ids(&self) -> &[String] {
        &self.invalid
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
