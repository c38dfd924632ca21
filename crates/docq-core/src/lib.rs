//! docq-core
//!
//! Metadata-driven query layer that sits above a document-store driver.
//!
//! ## Crate layout
//! - `value`: canonical runtime value model and its total comparator.
//! - `model`: explicit entity descriptors (fields, kinds, declarative markers).
//! - `db`: metadata resolution, pagination engine, join aggregator, result
//!   mapper, store driver contract, and the in-memory reference driver.
//! - `obs`: query event sink and process-wide counters.
//!
//! The crate owns pagination math, cursor consistency, join-pipeline ordering,
//! and metadata resolution. It does not own the storage engine, transactional
//! consistency across the join, or any cache invalidation policy.

pub mod db;
pub mod model;
pub mod obs;
pub mod traits;
pub mod value;

mod error;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

/// Crate version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
