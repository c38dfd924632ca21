//! Module: document
//! Responsibility: opaque record shape exchanged with the store driver.
//! Does not own: value semantics or filter evaluation.
//! Boundary: drivers produce documents; this layer only reads them.

use crate::value::Value;
use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Document
///
/// One store record: named fields over canonical values. The query layer
/// never mutates driver-owned documents except to attach joined child rows
/// inside the reference driver's pipeline.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, PartialEq, Serialize)]
pub struct Document(BTreeMap<String, Value>);

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style field insertion for fixtures and drivers.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Borrow a top-level field value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Resolve a dotted path to every leaf value it reaches.
    ///
    /// `Doc` values descend by key; `List` values fan out across elements.
    /// An empty result means the path touches nothing in this document.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> Vec<&Value> {
        let mut current: Vec<&Value> = Vec::new();

        for (index, segment) in path.split('.').enumerate() {
            if index == 0 {
                if let Some(value) = self.0.get(segment) {
                    current.push(value);
                }
                continue;
            }

            let mut next = Vec::new();
            for value in current {
                descend(value, segment, &mut next);
            }
            current = next;

            if current.is_empty() {
                break;
            }
        }

        current
    }
}

fn descend<'a>(value: &'a Value, segment: &str, out: &mut Vec<&'a Value>) {
    match value {
        Value::Doc(doc) => {
            if let Some(inner) = doc.field(segment) {
                out.push(inner);
            }
        }
        Value::List(items) => {
            for item in items {
                descend(item, segment, out);
            }
        }
        _ => {}
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
