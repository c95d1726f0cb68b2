use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// A user's review of a place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

impl Review {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for Review {
    const TYPE_NAME: &'static str = "Review";

    fn id(&self) -> &str {
        &self.base.id
    }
}
