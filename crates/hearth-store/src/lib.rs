//! Single-file JSON persistence for hearth model registries.
//!
//! This crate implements the storage engine behind the hearth application
//! models: an in-memory registry keyed by `"<TypeName>.<id>"` that can be
//! flushed to one on-disk JSON document and reloaded from it. It is not a
//! database -- there is no indexing, no querying by field, no transactions,
//! and no concurrent-writer coordination.
//!
//! # Design Rules
//!
//! 1. The in-memory registry is the single source of truth; disk is touched
//!    only by explicit `persist`/`load` calls, never in the background.
//! 2. `load` is all-or-nothing: a corrupt document leaves the registry
//!    exactly as it was.
//! 3. The engine never mutates model fields -- ids and timestamps are the
//!    model layer's business.
//! 4. The engine only knows models through the type-erased
//!    [`hearth_types::Record`] view and the known-type table; it never
//!    names a concrete model type.
//! 5. All I/O errors are propagated, never silently ignored.
//! 6. One process, one writer: the document has no file-locking protocol,
//!    so concurrent writers across processes can race it.

pub mod error;
pub mod file_store;

pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
