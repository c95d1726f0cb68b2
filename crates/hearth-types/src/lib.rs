//! Foundation types for the hearth persistence layer.
//!
//! This crate defines the contract between the storage engine and the model
//! types it persists. Every other hearth crate depends on `hearth-types`.
//!
//! # Key Types
//!
//! - [`RegistryKey`] -- the `"<TypeName>.<id>"` key identifying a stored record
//! - [`Model`] -- the capability contract a concrete model type implements
//! - [`Record`] -- the type-erased view of a model the storage engine holds
//! - [`TypeRegistry`] -- the known-type table mapping type names to
//!   reconstruction factories
//! - [`temporal`] -- the ISO-8601 microsecond wire format for timestamps

pub mod error;
pub mod key;
pub mod record;
pub mod registry;
pub mod temporal;

pub use error::TypeError;
pub use key::RegistryKey;
pub use record::{from_document, to_document, Model, Record, CLASS_FIELD};
pub use registry::{Factory, TypeRegistry};
