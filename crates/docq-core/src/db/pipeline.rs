//! Module: pipeline
//! Responsibility: ordered stage descriptors executed by a store driver.
//! Does not own: stage ordering policy (the join aggregator enforces that)
//! or stage execution (drivers do).
//! Boundary: the aggregate half of the driver contract.

use crate::db::{Direction, primitives::FilterExpr};
use serde::{Deserialize, Serialize};

///
/// Stage
///
/// One pipeline operation against a collection. Stages run strictly in
/// sequence; a stage sees exactly the documents the previous stage produced.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Stage {
    /// Order the working set by one field.
    Sort { field: String, direction: Direction },

    /// Correlate against another collection, attaching every document from
    /// `from` whose `foreign_field` equals the working document's
    /// `local_field` as a list under `as_field`.
    Lookup {
        from: String,
        local_field: String,
        foreign_field: String,
        as_field: String,
    },

    /// Drop documents whose `field` holds an empty attachment list.
    MatchNonEmpty { field: String },

    /// Drop documents not matching the expression.
    Match(FilterExpr),
}
