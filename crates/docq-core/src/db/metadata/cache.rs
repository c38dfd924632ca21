use crate::{
    db::metadata::{EntityMetadata, MetadataError, resolve},
    traits::EntityKind,
};
use std::{collections::HashMap, sync::RwLock};

///
/// MetadataCache
///
/// Read-mostly cache of resolved metadata keyed by entity name. Entries are
/// write-once-then-immutable; a race that resolves the same model twice is
/// harmless because resolution is idempotent. Correctness never depends on
/// a hit.
///

#[derive(Debug, Default)]
pub struct MetadataCache {
    entries: RwLock<HashMap<&'static str, EntityMetadata>>,
}

impl MetadataCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved metadata for `E`, computing and caching on first use.
    pub fn get_or_resolve<E: EntityKind>(&self) -> Result<EntityMetadata, MetadataError> {
        let key = E::MODEL.entity_name;

        if let Ok(entries) = self.entries.read() {
            if let Some(metadata) = entries.get(key) {
                return Ok(metadata.clone());
            }
        }

        let metadata = resolve(E::MODEL)?;

        if let Ok(mut entries) = self.entries.write() {
            entries.entry(key).or_insert_with(|| metadata.clone());
        }

        Ok(metadata)
    }

    /// Number of cached entries; test and diagnostics surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
