//! Module: store
//! Responsibility: the driver contract this layer consumes.
//! Does not own: storage, transport, timeouts, or retries; drivers do.
//! Boundary: every store round-trip in the crate goes through this trait.

pub mod memory;

#[cfg(test)]
mod tests;

use crate::db::{Direction, document::Document, pipeline::Stage, primitives::FilterExpr};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// SortSpec
///
/// Single-field ordering applied by `find`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: Direction,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}

///
/// StoreError
///
/// Opaque driver failure. The query layer never inspects or retries these;
/// they propagate to the caller unchanged.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("store driver failure: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// DocumentStore
///
/// Synchronous driver capabilities consumed by pagination and joins. Each
/// call is one blocking round-trip; consistency under concurrent writes is
/// whatever the driver provides.
///

pub trait DocumentStore {
    /// Number of documents matching the filter.
    fn count(&self, filter: &FilterExpr, collection: &str) -> Result<u64, StoreError>;

    /// Matching documents, ordered by `sort`, after `skip`, at most `limit`.
    fn find(
        &self,
        filter: &FilterExpr,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError>;

    /// Execute an ordered stage pipeline rooted at `collection`.
    fn aggregate(&self, pipeline: &[Stage], collection: &str) -> Result<Vec<Document>, StoreError>;
}
