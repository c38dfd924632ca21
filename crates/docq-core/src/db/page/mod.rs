//! Module: page
//! Responsibility: pagination requests, results, and page-boundary math.
//! Does not own: metadata resolution or driver behavior.
//! Boundary: `Session::paginate` is the caller-facing entry point.

mod error;
mod paginate;


pub use error::PageError;
pub(crate) use paginate::execute;

use crate::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// Pages are 1-based; out-of-range requests normalize here.
pub const FIRST_PAGE: u64 = 1;

const DEFAULT_PAGE_SIZE: i64 = 20;

///
/// Cursor
///
/// Opaque last-seen identifier carried forward by keyset callers. The value
/// must come from the identifier field of the previous page's final record.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Cursor(Value);

impl Cursor {
    pub fn new(value: impl FieldValue) -> Self {
        Self(value.to_value())
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.0
    }
}

///
/// PageRequest
///
/// Caller-supplied page coordinates. A present cursor selects keyset mode;
/// `page` and `page_size` stay meaningful in both modes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
    pub cursor: Option<Cursor>,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            cursor: None,
        }
    }

    /// First page at the default size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(FIRST_PAGE as i64, DEFAULT_PAGE_SIZE)
    }

    /// Switch the request into keyset mode.
    #[must_use]
    pub fn after(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

///
/// PageResult
///
/// One typed result page. Invariants: `page_count == total.div_ceil(page_size)`
/// and `records.len() <= page_size`; `page` reflects the effective page after
/// normalization, not necessarily the requested one.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageResult<R> {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub page_count: u64,
    pub records: Vec<R>,
}

impl<R> PageResult<R> {
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page >= self.page_count
    }
}
