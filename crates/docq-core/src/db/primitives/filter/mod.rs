//! Module: filter
//! Responsibility: filter expression vocabulary and document evaluation.
//! Does not own: pipeline staging or driver-side query translation.
//! Boundary: drivers may translate expressions; the memory driver evaluates
//! them directly via `FilterExpr::matches`.

mod expr;


pub use expr::{FilterClause, FilterExpr};

use serde::{Deserialize, Serialize};

///
/// Cmp
///
/// Comparison operators available in filter clauses.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contains,
    IsEmpty,
    IsNotEmpty,
}
