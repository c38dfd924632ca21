use crate::{
    db::{document::Document, primitives::filter::Cmp},
    value::{FieldValue, Value, canonical_cmp, strict_order_cmp},
};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    ops::{BitAnd, BitOr, Not},
};

///
/// FilterExpr
///
/// Logical expression over document fields.
///
/// Expressions can be:
/// - `True` or `False` constants
/// - Single clauses comparing a field with a value
/// - Composite expressions: `And`, `Or`, and negation `Not`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum FilterExpr {
    #[default]
    True,
    False,
    Clause(FilterClause),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl FilterExpr {
    // --- Clause ---

    /// Create a single clause: `field cmp value`.
    pub fn clause(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self::Clause(FilterClause::new(field, cmp, value))
    }

    // --- Equality ---

    pub fn eq(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Eq, value)
    }

    pub fn ne(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Ne, value)
    }

    // --- Ordering ---

    pub fn lt(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Lt, value)
    }

    pub fn lte(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Lte, value)
    }

    pub fn gt(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Gt, value)
    }

    pub fn gte(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Gte, value)
    }

    // --- Membership / Collection ---

    pub fn in_iter<I>(field: impl Into<String>, vals: I) -> Self
    where
        I: IntoIterator,
        I::Item: FieldValue,
    {
        Self::clause(
            field,
            Cmp::In,
            vals.into_iter().map(FieldValue::to_value).collect::<Vec<_>>(),
        )
    }

    pub fn contains(field: impl Into<String>, value: impl FieldValue) -> Self {
        Self::clause(field, Cmp::Contains, value)
    }

    // --- Presence / Empty ---

    pub fn is_empty(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsEmpty, ())
    }

    pub fn is_not_empty(field: impl Into<String>) -> Self {
        Self::clause(field, Cmp::IsNotEmpty, ())
    }

    // --- Composition ---

    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut exprs) => {
                exprs.push(other);
                Self::And(exprs)
            }
            expr => Self::And(vec![expr, other]),
        }
    }

    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut exprs) => {
                exprs.push(other);
                Self::Or(exprs)
            }
            expr => Self::Or(vec![expr, other]),
        }
    }

    // --- Evaluation ---

    /// Evaluate the expression against one document.
    ///
    /// Used by the memory driver; networked drivers translate instead.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Clause(clause) => clause.matches(document),
            Self::And(exprs) => exprs.iter().all(|expr| expr.matches(document)),
            Self::Or(exprs) => exprs.iter().any(|expr| expr.matches(document)),
            Self::Not(expr) => !expr.matches(document),
        }
    }
}

impl BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl Not for FilterExpr {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

///
/// FilterClause
///
/// A single `field cmp value` comparison. The field is a dotted path; a
/// clause is satisfied when any value the path resolves to satisfies the
/// comparison.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FilterClause {
    pub field: String,
    pub cmp: Cmp,
    pub value: Value,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, cmp: Cmp, value: impl FieldValue) -> Self {
        Self {
            field: field.into(),
            cmp,
            value: value.to_value(),
        }
    }

    /// Evaluate this clause against one document.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        let resolved = document.resolve_path(&self.field);

        match self.cmp {
            Cmp::Eq => resolved
                .iter()
                .any(|value| canonical_cmp(value, &self.value) == Ordering::Equal),
            Cmp::Ne => !resolved
                .iter()
                .any(|value| canonical_cmp(value, &self.value) == Ordering::Equal),
            Cmp::Lt => self.any_strict(&resolved, |ordering| ordering == Ordering::Less),
            Cmp::Lte => self.any_strict(&resolved, |ordering| ordering != Ordering::Greater),
            Cmp::Gt => self.any_strict(&resolved, |ordering| ordering == Ordering::Greater),
            Cmp::Gte => self.any_strict(&resolved, |ordering| ordering != Ordering::Less),
            Cmp::In => {
                let Value::List(candidates) = &self.value else {
                    return false;
                };
                resolved.iter().any(|value| {
                    candidates
                        .iter()
                        .any(|candidate| canonical_cmp(value, candidate) == Ordering::Equal)
                })
            }
            Cmp::Contains => resolved.iter().any(|value| contains(value, &self.value)),
            Cmp::IsEmpty => {
                resolved.is_empty() || resolved.iter().all(|value| is_empty_value(value))
            }
            Cmp::IsNotEmpty => resolved.iter().any(|value| !is_empty_value(value)),
        }
    }

    // Ordering comparisons are strict: mixed variants never match.
    fn any_strict(&self, resolved: &[&Value], accept: impl Fn(Ordering) -> bool) -> bool {
        resolved
            .iter()
            .any(|value| strict_order_cmp(value, &self.value).is_some_and(&accept))
    }
}

fn contains(value: &Value, target: &Value) -> bool {
    match (value, target) {
        (Value::List(items), _) => items
            .iter()
            .any(|item| canonical_cmp(item, target) == Ordering::Equal),
        (Value::Text(text), Value::Text(needle)) => text.contains(needle.as_str()),
        _ => false,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Text(text) => text.is_empty(),
        Value::List(items) => items.is_empty(),
        _ => false,
    }
}
