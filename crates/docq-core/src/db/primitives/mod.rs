//! Query primitives shared by callers and drivers.

pub mod filter;

pub use filter::{Cmp, FilterClause, FilterExpr};
