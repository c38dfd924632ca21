//! Module: traits
//! Responsibility: entity-kind contract binding Rust types to declared models.
//! Does not own: model contents or resolution semantics.
//! Boundary: the only place a Rust type meets its descriptor.

use crate::model::EntityModel;

///
/// EntityKind
///
/// A Rust type registered as an entity. The associated model is the whole
/// registration surface; there is no runtime introspection anywhere else.
///

pub trait EntityKind: 'static {
    const MODEL: &'static EntityModel;

    /// Simple entity name as declared in the model.
    #[must_use]
    fn entity_name() -> &'static str {
        Self::MODEL.entity_name
    }

    /// Store collection name for this entity.
    ///
    /// Derived from the simple name by lower-casing the first character
    /// (`OrderRecord` -> `orderRecord`). Fixed contract with the store schema.
    #[must_use]
    fn collection() -> String {
        collection_name(Self::MODEL.entity_name)
    }
}

/// Lower-case the first character of a simple type name.
#[must_use]
pub fn collection_name(entity_name: &str) -> String {
    let mut chars = entity_name.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut name = first.to_lowercase().collect::<String>();
        name.push_str(chars.as_str());
        name
    })
}
