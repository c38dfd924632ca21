//! Module: value
//! Responsibility: canonical runtime value model for document fields.
//! Does not own: document shapes, filter semantics, or store encoding.
//! Boundary: shared value vocabulary for filters, sorts, and cursors.

mod compare;

#[cfg(test)]
mod tests;

use crate::db::document::Document;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use compare::{canonical_cmp, strict_order_cmp};

///
/// Value
///
/// Canonical field value as seen by the query layer. Documents own the
/// nesting; `List` carries joined child rows, `Doc` carries embedded records.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    List(Vec<Value>),
    Doc(Document),
}

impl Value {
    /// Canonical rank used for cross-variant ordering.
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Text(_) => 4,
            Self::List(_) => 5,
            Self::Doc(_) => 6,
        }
    }

    /// True for `List` values with no elements.
    #[must_use]
    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Total deterministic comparison against another value.
    #[must_use]
    pub fn cmp_canonical(&self, other: &Self) -> Ordering {
        canonical_cmp(self, other)
    }
}

///
/// FieldValue
///
/// Conversion boundary for plain Rust values entering filter clauses and
/// cursors. Blanket-implemented over `Into<Value>`; the trait exists so the
/// contract stays nameable in bounds.
///

pub trait FieldValue {
    fn to_value(self) -> Value;
}

impl<T: Into<Value>> FieldValue for T {
    fn to_value(self) -> Value {
        self.into()
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Document> for Value {
    fn from(document: Document) -> Self {
        Self::Doc(document)
    }
}
