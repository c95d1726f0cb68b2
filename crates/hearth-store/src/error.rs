/// Errors from storage-engine operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An argument referenced a type outside the known-type table.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A record is missing a field the registry key depends on.
    #[error("missing attribute: {attribute}")]
    MissingAttribute { attribute: &'static str },

    /// A record could not be serialized into its document form.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying file system.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document cannot be decoded back into a registry.
    #[error("corrupt persisted document: {reason}")]
    CorruptData { reason: String },
}

/// Result alias for storage-engine operations.
pub type StoreResult<T> = Result<T, StoreError>;
