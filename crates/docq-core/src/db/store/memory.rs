//! Module: store::memory
//! Responsibility: reference in-memory driver.
//! Does not own: durability, indexing, or concurrency control. It is a
//! driver stand-in for tests and embedded use, not a storage engine.
//! Boundary: implements `DocumentStore` verbatim over plain vectors.

use crate::{
    db::{
        Direction,
        document::Document,
        pipeline::Stage,
        primitives::FilterExpr,
        store::{DocumentStore, SortSpec, StoreError},
    },
    value::{Value, canonical_cmp},
};
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};

///
/// MemoryStore
///
/// Collections of documents held in memory. Sorting is stable and uses the
/// canonical comparator, so repeated calls over a static dataset return
/// identical orderings.
///

#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document to a collection, creating it on first use.
    pub fn insert(&self, collection: impl Into<String>, document: Document) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        collections.entry(collection.into()).or_default().push(document);
    }

    /// Append many documents to a collection.
    pub fn insert_many(
        &self,
        collection: impl Into<String>,
        documents: impl IntoIterator<Item = Document>,
    ) {
        let mut collections = self
            .collections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        collections
            .entry(collection.into())
            .or_default()
            .extend(documents);
    }

    fn snapshot(&self, collection: &str) -> Vec<Document> {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn count(&self, filter: &FilterExpr, collection: &str) -> Result<u64, StoreError> {
        let matched = self
            .snapshot(collection)
            .iter()
            .filter(|document| filter.matches(document))
            .count();

        Ok(matched as u64)
    }

    fn find(
        &self,
        filter: &FilterExpr,
        sort: &SortSpec,
        skip: u64,
        limit: u64,
        collection: &str,
    ) -> Result<Vec<Document>, StoreError> {
        let mut matched: Vec<Document> = self
            .snapshot(collection)
            .into_iter()
            .filter(|document| filter.matches(document))
            .collect();

        sort_documents(&mut matched, &sort.field, sort.direction);

        let documents = matched
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect();

        Ok(documents)
    }

    fn aggregate(&self, pipeline: &[Stage], collection: &str) -> Result<Vec<Document>, StoreError> {
        let mut working = self.snapshot(collection);

        for stage in pipeline {
            working = match stage {
                Stage::Sort { field, direction } => {
                    sort_documents(&mut working, field, *direction);
                    working
                }
                Stage::Lookup {
                    from,
                    local_field,
                    foreign_field,
                    as_field,
                } => {
                    let foreign = self.snapshot(from);
                    working
                        .into_iter()
                        .map(|document| {
                            attach_lookup(document, &foreign, local_field, foreign_field, as_field)
                        })
                        .collect()
                }
                Stage::MatchNonEmpty { field } => working
                    .into_iter()
                    .filter(|document| {
                        document
                            .field(field)
                            .is_some_and(|value| !value.is_empty_list())
                    })
                    .collect(),
                Stage::Match(filter) => working
                    .into_iter()
                    .filter(|document| filter.matches(document))
                    .collect(),
            };
        }

        Ok(working)
    }
}

// Stable sort keyed on one field; missing fields order as Null.
fn sort_documents(documents: &mut [Document], field: &str, direction: Direction) {
    documents.sort_by(|left, right| {
        let left_value = left.field(field).unwrap_or(&Value::Null);
        let right_value = right.field(field).unwrap_or(&Value::Null);

        direction.apply(canonical_cmp(left_value, right_value))
    });
}

fn attach_lookup(
    mut document: Document,
    foreign: &[Document],
    local_field: &str,
    foreign_field: &str,
    as_field: &str,
) -> Document {
    let matches: Vec<Value> = document.field(local_field).map_or_else(Vec::new, |local| {
        foreign
            .iter()
            .filter(|candidate| {
                candidate
                    .field(foreign_field)
                    .is_some_and(|value| canonical_cmp(value, local) == Ordering::Equal)
            })
            .cloned()
            .map(Value::Doc)
            .collect()
    });

    document.insert(as_field.to_string(), Value::List(matches));
    document
}
