use thiserror::Error as ThisError;

///
/// PageError
///
/// Pagination request failures. An invalid page size is never clamped,
/// unlike an out-of-range page number which silently normalizes to the
/// first page.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PageError {
    /// Requested page size is non-positive; raised before the driver is
    /// contacted.
    #[error("invalid page size {page_size}: must be positive")]
    InvalidPageSize { page_size: i64 },
}
