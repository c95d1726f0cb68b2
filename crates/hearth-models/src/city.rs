use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// A city inside a [`crate::State`], referenced by its `state_id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub state_id: String,
    #[serde(default)]
    pub name: String,
}

impl City {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for City {
    const TYPE_NAME: &'static str = "City";

    fn id(&self) -> &str {
        &self.base.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_types::{from_document, to_document};

    #[test]
    fn document_roundtrip_keeps_state_link() {
        let mut city = City::new();
        city.state_id = "s-1".into();
        city.name = "San Francisco".into();

        let back: City = from_document(&to_document(&city).unwrap()).unwrap();
        assert_eq!(back, city);
    }
}
