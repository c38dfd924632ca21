//! Module: join
//! Responsibility: manual relational join between two collections.
//! Does not own: stage execution (drivers) or metadata declaration (models).
//! Boundary: `Session::join` is the caller-facing entry point.

mod execute;
mod pipeline;
mod shape;


pub(crate) use execute::execute;
pub use pipeline::build_pipeline;
pub use shape::{ResultShape, ShapeError};

///
/// JoinExecution
///
/// Join output plus the observable recovery state. `fallback_count` is the
/// number of records produced by the fallback factory; a non-zero value means
/// the requested result shape could not decode every document and the
/// primary-shaped fallback was substituted.
///

#[derive(Debug)]
pub struct JoinExecution<R> {
    records: Vec<R>,
    fallback_count: u64,
}

impl<R> JoinExecution<R> {
    pub(crate) const fn new(records: Vec<R>, fallback_count: u64) -> Self {
        Self {
            records,
            fallback_count,
        }
    }

    /// Borrow the joined records in pipeline order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records produced by the fallback factory.
    #[must_use]
    pub const fn fallback_count(&self) -> u64 {
        self.fallback_count
    }

    /// Whether any record fell back to the primary shape.
    #[must_use]
    pub const fn degraded(&self) -> bool {
        self.fallback_count > 0
    }

    /// Consume this execution and return the records.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}
