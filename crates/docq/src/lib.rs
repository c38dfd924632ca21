//! ## Crate layout
//! - `core`: value model, entity descriptors, metadata resolution, the
//!   pagination engine, the join aggregator, and the store driver contract.
//!
//! The `prelude` module mirrors the surface a caller needs to declare entity
//! models, open a session over a driver, and run paginate/join calls.

pub use docq_core as core;

pub use docq_core::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        db::{
            Direction, Session,
            document::Document,
            join::{JoinExecution, ResultShape, ShapeError},
            metadata::{EntityMetadata, MetadataError},
            page::{Cursor, PageError, PageRequest, PageResult},
            pipeline::Stage,
            primitives::{Cmp, FilterClause, FilterExpr},
            store::{DocumentStore, SortSpec, StoreError, memory::MemoryStore},
        },
        model::{EntityFieldKind, EntityFieldModel, EntityModel, FieldMarker},
        traits::{EntityKind, collection_name},
        value::{FieldValue as _, Value},
    };
}
