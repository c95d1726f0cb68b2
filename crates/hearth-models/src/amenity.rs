use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// A feature a place can offer (wifi, parking, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub name: String,
}

impl Amenity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Amenity {
    const TYPE_NAME: &'static str = "Amenity";

    fn id(&self) -> &str {
        &self.base.id
    }
}
