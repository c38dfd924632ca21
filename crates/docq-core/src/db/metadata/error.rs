use thiserror::Error as ThisError;

///
/// MetadataError
///
/// Marker-resolution failures. Both variants are fatal to the call and are
/// surfaced immediately, never retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MetadataError {
    /// No field marked as the unique identifier, ancestors included.
    #[error("entity '{entity}' has no field marked as the unique identifier")]
    MissingIdentifier { entity: &'static str },

    /// Join primary without a marked sequence- or set-typed child field.
    #[error("entity '{entity}' is used as a join primary but has no marked child-collection field")]
    MissingChildCollection { entity: &'static str },
}
