//! The document contract between model types and the storage engine.
//!
//! A concrete model type implements [`Model`]; the engine only ever sees the
//! type-erased [`Record`] view, so it never depends on concrete model types.
//! Export injects the [`CLASS_FIELD`] naming the concrete type; import
//! discards it.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;
use crate::key::RegistryKey;

/// Field name injected into every exported document, naming the concrete
/// type of the record it came from.
pub const CLASS_FIELD: &str = "__class__";

/// Capability contract for a storable model type.
///
/// Implementations must satisfy the round-trip requirement: deserializing an
/// exported document yields a value observationally equal to the original
/// for every field.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The registered type name, as stored in the [`CLASS_FIELD`] and in the
    /// type-name half of the registry key.
    const TYPE_NAME: &'static str;

    /// The stable identifier assigned at creation. Never mutated by the
    /// storage engine.
    fn id(&self) -> &str;
}

/// Type-erased view of a model held by the storage engine.
///
/// Blanket-implemented for every [`Model`]; there is no reason to implement
/// it by hand.
pub trait Record: Send + Sync {
    /// The registered type name of the underlying model.
    fn type_name(&self) -> &'static str;

    /// The underlying model's stable identifier.
    fn id(&self) -> &str;

    /// The registry key this record is stored under.
    fn key(&self) -> RegistryKey {
        RegistryKey::new(self.type_name(), self.id())
    }

    /// Export the underlying model as a flat document, [`CLASS_FIELD`]
    /// included.
    fn to_document(&self) -> Result<Map<String, Value>, TypeError>;
}

impl<M: Model> Record for M {
    fn type_name(&self) -> &'static str {
        M::TYPE_NAME
    }

    fn id(&self) -> &str {
        Model::id(self)
    }

    fn to_document(&self) -> Result<Map<String, Value>, TypeError> {
        to_document(self)
    }
}

/// Serialize a model to its document form and inject the [`CLASS_FIELD`].
pub fn to_document<M: Model>(model: &M) -> Result<Map<String, Value>, TypeError> {
    let value = serde_json::to_value(model).map_err(|e| TypeError::Document(e.to_string()))?;
    let Value::Object(mut doc) = value else {
        return Err(TypeError::NotAnObject(M::TYPE_NAME));
    };
    doc.insert(
        CLASS_FIELD.to_string(),
        Value::String(M::TYPE_NAME.to_string()),
    );
    Ok(doc)
}

/// Reconstruct a model from its document form, discarding the
/// [`CLASS_FIELD`].
pub fn from_document<M: Model>(doc: &Map<String, Value>) -> Result<M, TypeError> {
    let mut doc = doc.clone();
    doc.remove(CLASS_FIELD);
    serde_json::from_value(Value::Object(doc)).map_err(|e| TypeError::Document(e.to_string()))
}
