use crate::db::document::Document;
use thiserror::Error as ThisError;

///
/// ShapeError
///
/// Recoverable decode failure for the requested result shape. Never fatal:
/// the join substitutes the fallback factory and reports the substitution.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("result shape decode failed: {reason}")]
pub struct ShapeError {
    pub reason: String,
}

impl ShapeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

///
/// ResultShape
///
/// Explicit typed factory for join output. `decode` may reject a document;
/// `fallback` must be total and produces the primary-shaped record. Making
/// the recovery path a parameter keeps the substitution inspectable instead
/// of an implicit exception-driven branch.
///

pub struct ResultShape<'a, R> {
    decode: Box<dyn Fn(&Document) -> Result<R, ShapeError> + 'a>,
    fallback: Box<dyn Fn(&Document) -> R + 'a>,
}

impl<'a, R> ResultShape<'a, R> {
    pub fn new(
        decode: impl Fn(&Document) -> Result<R, ShapeError> + 'a,
        fallback: impl Fn(&Document) -> R + 'a,
    ) -> Self {
        Self {
            decode: Box::new(decode),
            fallback: Box::new(fallback),
        }
    }

    pub(crate) fn decode(&self, document: &Document) -> Result<R, ShapeError> {
        (self.decode)(document)
    }

    pub(crate) fn fallback(&self, document: &Document) -> R {
        (self.fallback)(document)
    }
}

impl ResultShape<'_, Document> {
    /// Identity shape: every record stays a raw primary document.
    #[must_use]
    pub fn documents() -> Self {
        Self::new(|document| Ok(document.clone()), Clone::clone)
    }
}
