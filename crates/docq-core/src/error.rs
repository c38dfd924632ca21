use crate::db::{metadata::MetadataError, page::PageError, store::StoreError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level failure surface for pagination and join calls.
/// Driver failures pass through unchanged; nothing here retries.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
