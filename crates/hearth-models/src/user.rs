use serde::{Deserialize, Serialize};

use hearth_types::Model;

use crate::base::BaseModel;

/// An account that owns places and writes reviews.
///
/// Profile fields default to empty strings; they are filled in by the
/// application after creation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    /// Create a user with a fresh identity and empty profile fields.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for User {
    const TYPE_NAME: &'static str = "User";

    fn id(&self) -> &str {
        &self.base.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_types::{from_document, to_document};

    #[test]
    fn new_user_has_empty_profile() {
        let user = User::new();
        assert!(user.email.is_empty());
        assert!(user.password.is_empty());
        assert!(!user.base.id.is_empty());
    }

    #[test]
    fn document_roundtrip_keeps_profile_fields() {
        let mut user = User::new();
        user.email = "betty@hearthstay.io".into();
        user.first_name = "Betty".into();

        let doc = to_document(&user).unwrap();
        // Flattened base: the document is flat, not nested.
        assert!(doc.contains_key("id"));
        assert_eq!(doc["email"], "betty@hearthstay.io");

        let back: User = from_document(&doc).unwrap();
        assert_eq!(back, user);
    }
}
