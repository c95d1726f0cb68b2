use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use hearth_types::{RegistryKey, Record, TypeRegistry, CLASS_FIELD};

use crate::error::{StoreError, StoreResult};

/// File-backed model registry.
///
/// Holds every registered record in memory, keyed by
/// [`RegistryKey`], and flushes the whole registry to a single JSON
/// document on [`FileStore::persist`]. [`FileStore::load`] replaces the
/// registry wholesale with the document's contents.
///
/// The application constructs one store at startup and passes a reference
/// to whatever needs storage; the store itself is not a global.
pub struct FileStore {
    /// Document path. Never mutated after construction.
    path: PathBuf,
    /// Known-type table used to validate type names and reconstruct
    /// records on load.
    types: TypeRegistry,
    /// The registry. Iteration order is meaningless.
    registry: HashMap<RegistryKey, Box<dyn Record>>,
}

impl FileStore {
    /// Default document filename, resolved in the working directory.
    pub const DEFAULT_PATH: &'static str = "file.json";

    /// Create an empty store persisting to [`FileStore::DEFAULT_PATH`].
    pub fn new(types: TypeRegistry) -> Self {
        Self::with_path(Self::DEFAULT_PATH, types)
    }

    /// Create an empty store persisting to the given path.
    pub fn with_path(path: impl Into<PathBuf>, types: TypeRegistry) -> Self {
        Self {
            path: path.into(),
            types,
            registry: HashMap::new(),
        }
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The known-type table this store reconstructs records with.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Number of records currently registered.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no records are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Remove every record. Test-teardown escape hatch; `load` is the only
    /// operation that replaces the registry in normal use.
    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Read-only view of the full registry.
    pub fn all(&self) -> &HashMap<RegistryKey, Box<dyn Record>> {
        &self.registry
    }

    /// Entries whose key's type-name matches, sorted by key.
    ///
    /// Fails with [`StoreError::InvalidArgument`] if `type_name` is not in
    /// the known-type table.
    pub fn all_of(&self, type_name: &str) -> StoreResult<Vec<(&RegistryKey, &dyn Record)>> {
        if !self.types.contains(type_name) {
            return Err(StoreError::InvalidArgument {
                reason: format!("not a known model type: {type_name}"),
            });
        }
        let mut entries: Vec<(&RegistryKey, &dyn Record)> = self
            .registry
            .iter()
            .filter(|(key, _)| key.type_name() == type_name)
            .map(|(key, record)| (key, record.as_ref()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        Ok(entries)
    }

    /// Look up a single record by key.
    pub fn get(&self, key: &RegistryKey) -> Option<&dyn Record> {
        self.registry.get(key).map(|record| record.as_ref())
    }

    /// Insert a record under its computed key, overwriting any previous
    /// record with the same key. Does not touch disk.
    ///
    /// Fails with [`StoreError::MissingAttribute`] if the record has an
    /// empty id, and with [`StoreError::InvalidArgument`] if its type is
    /// not in the known-type table.
    pub fn register<R: Record + 'static>(&mut self, record: R) -> StoreResult<RegistryKey> {
        if record.id().is_empty() {
            return Err(StoreError::MissingAttribute { attribute: "id" });
        }
        if !self.types.contains(record.type_name()) {
            return Err(StoreError::InvalidArgument {
                reason: format!("not a known model type: {}", record.type_name()),
            });
        }
        let key = record.key();
        self.registry.insert(key.clone(), Box::new(record));
        Ok(key)
    }

    /// Remove the record stored under the given record's key. Returns
    /// whether it existed; a missing entry is a no-op, not an error.
    pub fn delete(&mut self, record: &dyn Record) -> bool {
        self.registry.remove(&record.key()).is_some()
    }

    /// Serialize the registry into one JSON object and overwrite the
    /// document at the configured path.
    ///
    /// A failed write surfaces as [`StoreError::Io`] and leaves the
    /// in-memory registry untouched (persist never mutates it).
    pub fn persist(&self) -> StoreResult<()> {
        let mut document = Map::with_capacity(self.registry.len());
        for (key, record) in &self.registry {
            let exported = record
                .to_document()
                .map_err(|e| StoreError::Serialization(e.to_string()))?;
            document.insert(key.to_string(), Value::Object(exported));
        }

        let payload =
            serde_json::to_vec(&document).map_err(|e| StoreError::Serialization(e.to_string()))?;
        fs::write(&self.path, payload)?;

        debug!(
            entries = self.registry.len(),
            path = %self.path.display(),
            "persisted registry"
        );
        Ok(())
    }

    /// Replace the registry with the contents of the persisted document.
    ///
    /// An absent file is a silent no-op: an empty store is a valid initial
    /// state. A zero-byte or whitespace-only file is treated the same way.
    /// Anything else must decode completely -- malformed JSON, an
    /// unparseable key, a type-name outside the known-type table, a
    /// non-object entry, or a `__class__` field disagreeing with its key
    /// all fail with [`StoreError::CorruptData`] and leave the current
    /// registry untouched.
    pub fn load(&mut self) -> StoreResult<()> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no persisted document");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        // What `touch file.json` or a crash before the first persist leaves
        // behind; equivalent to an absent document.
        if raw.trim().is_empty() {
            return Ok(());
        }

        let document: Value = serde_json::from_str(&raw).map_err(|e| StoreError::CorruptData {
            reason: format!("malformed JSON: {e}"),
        })?;
        let Value::Object(entries) = document else {
            return Err(StoreError::CorruptData {
                reason: "document root is not a JSON object".into(),
            });
        };

        // Rebuild into a fresh map first so a failure partway through
        // leaves the current registry untouched.
        let mut rebuilt: HashMap<RegistryKey, Box<dyn Record>> =
            HashMap::with_capacity(entries.len());
        for (raw_key, value) in &entries {
            let key = RegistryKey::parse(raw_key).map_err(|e| StoreError::CorruptData {
                reason: e.to_string(),
            })?;
            let Value::Object(doc) = value else {
                return Err(StoreError::CorruptData {
                    reason: format!("entry {raw_key} is not a JSON object"),
                });
            };
            match doc.get(CLASS_FIELD) {
                None => {}
                Some(Value::String(class)) if class.as_str() == key.type_name() => {}
                Some(other) => {
                    return Err(StoreError::CorruptData {
                        reason: format!(
                            "entry {raw_key} declares {CLASS_FIELD} = {other}, expected {:?}",
                            key.type_name()
                        ),
                    });
                }
            }
            let record =
                self.types
                    .construct(key.type_name(), doc)
                    .map_err(|e| StoreError::CorruptData {
                        reason: format!("entry {raw_key}: {e}"),
                    })?;
            rebuilt.insert(key, record);
        }

        debug!(
            entries = rebuilt.len(),
            path = %self.path.display(),
            "reloaded registry"
        );
        self.registry = rebuilt;
        Ok(())
    }
}

impl fmt::Debug for FileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("record_count", &self.registry.len())
            .field("known_types", &self.types.names())
            .finish()
    }
}
