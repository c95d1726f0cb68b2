use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hearth_types::temporal::{self, iso_micro};
use hearth_types::Model;

/// The audit core every stored model carries: a stable UUID v4 id and
/// creation/update timestamps.
///
/// `BaseModel` is itself a storable type, and the other models embed it via
/// `#[serde(flatten)]` so their exported documents stay flat:
///
/// ```json
/// {
///   "id": "b6a6e15c-c67d-4312-9a75-9d084935e579",
///   "created_at": "2024-01-01T00:00:00.000000",
///   "updated_at": "2024-01-01T00:00:00.000000",
///   "__class__": "BaseModel"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseModel {
    pub id: String,
    #[serde(with = "iso_micro")]
    pub created_at: NaiveDateTime,
    #[serde(with = "iso_micro")]
    pub updated_at: NaiveDateTime,
}

impl BaseModel {
    /// Create a model with a fresh id; both timestamps are set to now.
    pub fn new() -> Self {
        let now = temporal::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`. The id and `created_at` never change.
    pub fn touch(&mut self) {
        self.updated_at = temporal::now();
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for BaseModel {
    const TYPE_NAME: &'static str = "BaseModel";

    fn id(&self) -> &str {
        &self.id
    }
}
