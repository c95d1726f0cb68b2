//! The known-type table.
//!
//! One JSON document holds heterogeneous model types; reconstructing the
//! correct concrete type per entry requires an explicit mapping from type
//! name to factory, populated once at startup. There is no runtime
//! reflection here: a type the application never registered cannot come back
//! from disk.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::TypeError;
use crate::record::{from_document, Model, Record};

/// Reconstruction factory: turns a persisted document into a boxed record.
pub type Factory = fn(&Map<String, Value>) -> Result<Box<dyn Record>, TypeError>;

/// Static mapping from type name to reconstruction factory.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    factories: HashMap<&'static str, Factory>,
}

impl TypeRegistry {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a model type under its [`Model::TYPE_NAME`].
    ///
    /// Registering the same type twice is a no-op overwrite.
    pub fn register<M: Model + 'static>(&mut self) {
        self.factories.insert(M::TYPE_NAME, reconstruct::<M>);
    }

    /// Returns `true` if the given type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns `true` if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Sorted list of all registered type names.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Reconstruct a record of the named type from its document form.
    pub fn construct(
        &self,
        type_name: &str,
        doc: &Map<String, Value>,
    ) -> Result<Box<dyn Record>, TypeError> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| TypeError::UnknownType(type_name.to_string()))?;
        factory(doc)
    }
}

fn reconstruct<M: Model + 'static>(doc: &Map<String, Value>) -> Result<Box<dyn Record>, TypeError> {
    Ok(Box::new(from_document::<M>(doc)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::to_document;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct Probe {
        id: String,
        label: String,
    }

    impl Model for Probe {
        const TYPE_NAME: &'static str = "Probe";
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn table() -> TypeRegistry {
        let mut types = TypeRegistry::new();
        types.register::<Probe>();
        types
    }

    #[test]
    fn contains_registered_type() {
        let types = table();
        assert!(types.contains("Probe"));
        assert!(!types.contains("Ghost"));
        assert_eq!(types.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        #[derive(Clone, Debug, Serialize, Deserialize)]
        struct Alpha {
            id: String,
        }
        impl Model for Alpha {
            const TYPE_NAME: &'static str = "Alpha";
            fn id(&self) -> &str {
                &self.id
            }
        }

        let mut types = table();
        types.register::<Alpha>();
        assert_eq!(types.names(), vec!["Alpha", "Probe"]);
    }

    #[test]
    fn construct_roundtrips_through_document() {
        let probe = Probe {
            id: "p-9".into(),
            label: "persisted".into(),
        };
        let doc = to_document(&probe).unwrap();

        let record = table().construct("Probe", &doc).unwrap();
        assert_eq!(record.type_name(), "Probe");
        assert_eq!(record.id(), "p-9");
        assert_eq!(record.to_document().unwrap(), doc);
    }

    #[test]
    fn construct_unknown_type_fails() {
        let doc = Map::new();
        assert_eq!(
            table().construct("Ghost", &doc).err(),
            Some(TypeError::UnknownType("Ghost".into()))
        );
    }

    #[test]
    fn construct_surfaces_field_errors() {
        // A document missing required fields fails at the factory.
        let mut doc = Map::new();
        doc.insert("id".into(), Value::String("p-1".into()));
        assert!(matches!(
            table().construct("Probe", &doc),
            Err(TypeError::Document(_))
        ));
    }

    #[test]
    fn reregistering_is_a_noop_overwrite() {
        let mut types = table();
        types.register::<Probe>();
        assert_eq!(types.len(), 1);
    }
}
