//! Module: model
//! Responsibility: explicit entity descriptors consumed by metadata resolution.
//! Does not own: resolution logic, caching, or store naming decisions.
//! Boundary: compile-time registration surface replacing runtime reflection.

mod entity;
mod field;

pub use entity::EntityModel;
pub use field::{EntityFieldKind, EntityFieldModel, FieldMarker};
