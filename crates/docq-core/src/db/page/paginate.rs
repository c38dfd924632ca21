use crate::{
    db::{
        document::Document,
        mapper,
        metadata::EntityMetadata,
        page::{Cursor, FIRST_PAGE, PageError, PageRequest, PageResult},
        primitives::FilterExpr,
        store::{DocumentStore, SortSpec},
    },
    error::Error,
    obs::{QueryEvent, record_event},
};

/// Run one pagination call against the store.
///
/// Offset mode costs two round-trips (count + find); keyset mode costs the
/// same here because the total is still computed for caller display, but the
/// fetch itself never skips.
pub(crate) fn execute<S, R>(
    store: &S,
    filter: FilterExpr,
    metadata: &EntityMetadata,
    collection: &str,
    entity_name: &'static str,
    request: &PageRequest,
    cursor: Option<&Cursor>,
    transform: impl Fn(Document) -> R,
) -> Result<PageResult<R>, Error>
where
    S: DocumentStore,
{
    // Page-size validation precedes every store round-trip.
    if request.page_size <= 0 {
        return Err(PageError::InvalidPageSize {
            page_size: request.page_size,
        }
        .into());
    }
    let page_size = request.page_size.unsigned_abs();

    let total = store.count(&filter, collection)?;
    let page_count = total.div_ceil(page_size);

    let effective_page = effective_page(request.page, page_count, entity_name);

    let id_field = metadata.id_field;
    let sort = SortSpec::asc(id_field);

    let documents = match cursor {
        // Keyset fetch: strict lower bound on the identifier, never a skip.
        // Documents at or below the cursor stay stable even under concurrent
        // inserts of higher identifiers.
        Some(cursor) => {
            let filter = if effective_page == FIRST_PAGE {
                filter
            } else {
                filter.and(FilterExpr::gt(id_field, cursor.value().clone()))
            };

            store.find(&filter, &sort, 0, page_size, collection)?
        }

        // Offset fetch: deterministic for a static dataset, drifts under
        // concurrent writes.
        None => {
            let skip = page_size * (effective_page - 1);

            store.find(&filter, &sort, skip, page_size, collection)?
        }
    };

    Ok(PageResult {
        page: effective_page,
        page_size,
        total,
        page_count,
        records: mapper::map_records(documents, transform),
    })
}

// Out-of-range page numbers normalize to the first page. A usability guard,
// not an error; the clamp is still surfaced as an event.
fn effective_page(requested: i64, page_count: u64, entity_name: &'static str) -> u64 {
    if requested > 0 && requested.unsigned_abs() <= page_count {
        return requested.unsigned_abs();
    }

    if requested != FIRST_PAGE as i64 {
        record_event(&QueryEvent::PageClamped {
            entity: entity_name,
            requested,
        });
    }

    FIRST_PAGE
}
