use crate::{
    db::{
        document::Document,
        join::{self, JoinExecution, ResultShape},
        metadata::MetadataCache,
        page::{self, Cursor, PageRequest, PageResult},
        primitives::FilterExpr,
        store::DocumentStore,
    },
    error::Error,
    traits::EntityKind,
};

///
/// Session
///
/// Caller-facing handle over one store driver. Holds the metadata cache so
/// repeated calls against the same entity types skip the marker scan. All
/// calls are synchronous; timeouts belong at the driver boundary.
///

pub struct Session<S> {
    store: S,
    metadata: MetadataCache,
}

impl<S: DocumentStore> Session<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            metadata: MetadataCache::new(),
        }
    }

    /// Borrow the underlying driver.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Paginate `E` documents matching `filter`.
    ///
    /// A cursor on the request selects keyset mode; otherwise the fetch is
    /// offset-based. Records are produced by `transform` in fetch order.
    pub fn paginate<E, R>(
        &self,
        filter: FilterExpr,
        request: &PageRequest,
        transform: impl Fn(Document) -> R,
    ) -> Result<PageResult<R>, Error>
    where
        E: EntityKind,
    {
        let metadata = self.metadata.get_or_resolve::<E>()?;

        page::execute(
            &self.store,
            filter,
            &metadata,
            &E::collection(),
            E::entity_name(),
            request,
            request.cursor.as_ref(),
            transform,
        )
    }

    /// Paginate in keyset mode after an explicit cursor.
    ///
    /// Equivalent to `paginate` with the cursor attached to the request;
    /// exposed separately so call sites carrying forward a last-seen
    /// identifier do not have to rebuild the request.
    pub fn paginate_after<E, R>(
        &self,
        filter: FilterExpr,
        request: &PageRequest,
        cursor: &Cursor,
        transform: impl Fn(Document) -> R,
    ) -> Result<PageResult<R>, Error>
    where
        E: EntityKind,
    {
        let metadata = self.metadata.get_or_resolve::<E>()?;

        page::execute(
            &self.store,
            filter,
            &metadata,
            &E::collection(),
            E::entity_name(),
            request,
            Some(cursor),
            transform,
        )
    }

    /// Join `Primary` against `Secondary` on their identifier fields.
    ///
    /// Matching secondary documents attach under the primary's marked
    /// child-collection field; primaries without matches never appear.
    pub fn join<Primary, Secondary, R>(
        &self,
        primary_filter: Option<FilterExpr>,
        secondary_filter: Option<FilterExpr>,
        shape: &ResultShape<'_, R>,
    ) -> Result<JoinExecution<R>, Error>
    where
        Primary: EntityKind,
        Secondary: EntityKind,
    {
        join::execute::<S, Primary, Secondary, R>(
            &self.store,
            &self.metadata,
            primary_filter,
            secondary_filter,
            shape,
        )
    }
}
