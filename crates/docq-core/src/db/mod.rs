//! Module: db
//! Responsibility: query layer above a document-store driver.
//! Does not own: the storage engine or driver transport concerns.
//! Boundary: callers enter through `Session`; drivers implement `store`.

pub mod document;
pub mod join;
pub mod mapper;
pub mod metadata;
pub mod page;
pub mod pipeline;
pub mod primitives;
pub mod store;

mod direction;
mod session;

pub use direction::Direction;
pub use session::Session;
