use thiserror::Error;

/// Errors produced by contract-level operations: key parsing, document
/// export/import, and known-type lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid registry key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("unknown model type: {0}")]
    UnknownType(String),

    #[error("model {0} did not serialize to a JSON object")]
    NotAnObject(&'static str),

    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),

    #[error("document error: {0}")]
    Document(String),
}
