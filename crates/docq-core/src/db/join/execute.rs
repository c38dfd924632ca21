use crate::{
    db::{
        join::{JoinExecution, ResultShape, build_pipeline},
        metadata::{self, EntityMetadata, MetadataCache, MetadataError},
        primitives::FilterExpr,
        store::DocumentStore,
    },
    error::Error,
    obs::{QueryEvent, record_event},
    traits::EntityKind,
};

/// Run one join call against the store.
pub(crate) fn execute<S, Primary, Secondary, R>(
    store: &S,
    cache: &MetadataCache,
    primary_filter: Option<FilterExpr>,
    secondary_filter: Option<FilterExpr>,
    shape: &ResultShape<'_, R>,
) -> Result<JoinExecution<R>, Error>
where
    S: DocumentStore,
    Primary: EntityKind,
    Secondary: EntityKind,
{
    // Sort-stage metadata is retried identically once; no fallback exists,
    // so a second failure surfaces the resolver's error.
    let primary = resolve_sort_metadata::<Primary>(cache)?;
    let secondary = cache.get_or_resolve::<Secondary>()?;

    let child_field = metadata::require_child_collection(Primary::MODEL, &primary)?;

    let pipeline = build_pipeline(
        &primary,
        &secondary,
        Secondary::collection(),
        child_field,
        primary_filter,
        secondary_filter,
    );

    let documents = store.aggregate(&pipeline, &Primary::collection())?;

    let mut records = Vec::with_capacity(documents.len());
    let mut fallback_count = 0u64;

    for document in &documents {
        match shape.decode(document) {
            Ok(record) => records.push(record),
            Err(err) => {
                // First substitution raises the warning signal; the count
                // keeps the rest observable.
                if fallback_count == 0 {
                    record_event(&QueryEvent::ResultShapeFallback {
                        entity: Primary::entity_name(),
                        reason: err.reason,
                    });
                }
                fallback_count += 1;
                records.push(shape.fallback(document));
            }
        }
    }

    Ok(JoinExecution::new(records, fallback_count))
}

fn resolve_sort_metadata<E: EntityKind>(
    cache: &MetadataCache,
) -> Result<EntityMetadata, MetadataError> {
    match cache.get_or_resolve::<E>() {
        Ok(found) => Ok(found),
        Err(_) => cache.get_or_resolve::<E>(),
    }
}
