//! Module: mapper
//! Responsibility: transform fetched documents into typed page records.
//! Does not own: fetch ordering or transform failure handling; a transform
//! that panics on documents the store actually returned is a caller bug.
//! Boundary: the only place raw documents become caller types.

use crate::db::document::Document;

/// Apply `transform` to each document in fetch order.
///
/// Pure and order-preserving; the output is consumed exactly once into a
/// page's records.
pub fn map_records<R>(
    documents: Vec<Document>,
    transform: impl Fn(Document) -> R,
) -> Vec<R> {
    documents.into_iter().map(transform).collect()
}
