///
/// EntityFieldModel
///
/// Runtime field metadata: name, type shape, and declarative markers.
///

pub struct EntityFieldModel {
    /// Field name as used in documents, predicates, and sorts.
    pub name: &'static str,
    /// Runtime type shape; only the collection/scalar split matters here.
    pub kind: EntityFieldKind,
    /// Declarative markers attached to this field.
    pub markers: &'static [FieldMarker],
}

impl EntityFieldModel {
    /// Whether the field carries the given marker.
    #[must_use]
    pub fn has_marker(&self, marker: FieldMarker) -> bool {
        self.markers.contains(&marker)
    }

    /// Whether the field is collection-typed (sequence or set).
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self.kind, EntityFieldKind::List | EntityFieldKind::Set)
    }
}

///
/// EntityFieldKind
///
/// Minimal type surface needed by marker scans. A lossy projection of the
/// entity's Rust type; `Unsupported` fields are never resolvable targets.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityFieldKind {
    Bool,
    Int,
    Uint,
    Text,
    Doc,

    // Collections
    List,
    Set,

    /// Marker for fields that are not filterable or resolvable.
    Unsupported,
}

///
/// FieldMarker
///
/// The three declarative markers consumed by metadata resolution.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldMarker {
    /// Unique identifier; exactly one expected per entity (ancestors included).
    Identifier,
    /// Attachment point for joined child rows; collection-typed fields only.
    ChildCollection,
    /// Preferred ordering field; optional, identifier is the default.
    Order,
}
