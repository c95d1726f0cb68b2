use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// A top-level region cities belong to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub name: String,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for State {
    const TYPE_NAME: &'static str = "State";

    fn id(&self) -> &str {
        &self.base.id
    }
}
