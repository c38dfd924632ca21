//! Module: metadata
//! Responsibility: marker-driven metadata resolution for entity models.
//! Does not own: model declaration or store naming.
//! Boundary: pagination and join code read field names only through here.

mod cache;
mod error;

#[cfg(test)]
mod tests;

pub use cache::MetadataCache;
pub use error::MetadataError;

use crate::model::{EntityModel, FieldMarker};

///
/// EntityMetadata
///
/// Resolved field names for one entity model. Immutable once computed;
/// re-resolution of the same model yields a field-for-field identical value.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntityMetadata {
    /// Unique identifier field; always present on a resolvable entity.
    pub id_field: &'static str,
    /// Preferred ordering field; identifier when absent.
    pub order_field: Option<&'static str>,
    /// Attachment field for joined child rows; present on join primaries.
    pub child_collection_field: Option<&'static str>,
}

impl EntityMetadata {
    /// Field used for ordering; falls back to the identifier.
    #[must_use]
    pub const fn effective_order_field(&self) -> &'static str {
        match self.order_field {
            Some(field) => field,
            None => self.id_field,
        }
    }
}

/// Resolve an entity model into its metadata.
///
/// Scan order is the model's own fields first, then each ancestor level up
/// to the root; the first marked field wins. Pure and side-effect-free.
pub fn resolve(model: &'static EntityModel) -> Result<EntityMetadata, MetadataError> {
    let id_field = model
        .scan_fields()
        .find(|field| field.has_marker(FieldMarker::Identifier))
        .map(|field| field.name)
        .ok_or(MetadataError::MissingIdentifier {
            entity: model.entity_name,
        })?;

    let order_field = model
        .scan_fields()
        .find(|field| field.has_marker(FieldMarker::Order))
        .map(|field| field.name);

    // Child-collection markers only count on sequence- or set-typed fields.
    let child_collection_field = model
        .scan_fields()
        .filter(|field| field.is_collection())
        .find(|field| field.has_marker(FieldMarker::ChildCollection))
        .map(|field| field.name);

    Ok(EntityMetadata {
        id_field,
        order_field,
        child_collection_field,
    })
}

/// Child-collection field for a join primary.
///
/// Absence is fatal here, not at resolve time: only entities used as the
/// primary side of a join are required to carry the marker.
pub fn require_child_collection(
    model: &'static EntityModel,
    metadata: &EntityMetadata,
) -> Result<&'static str, MetadataError> {
    metadata
        .child_collection_field
        .ok_or(MetadataError::MissingChildCollection {
            entity: model.entity_name,
        })
}
