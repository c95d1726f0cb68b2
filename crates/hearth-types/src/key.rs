use std::fmt;

use crate::error::TypeError;

/// The registry key identifying a stored record: `"<TypeName>.<id>"`.
///
/// Keys are unique across the whole store. The type-name half never contains
/// a `.` (guaranteed by [`RegistryKey::parse`] splitting on the first dot);
/// the id half may, although UUID ids never do in practice.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryKey {
    type_name: String,
    id: String,
}

impl RegistryKey {
    /// Build a key from its parts. The parts are taken as-is; use
    /// [`RegistryKey::parse`] when the input comes from a persisted document.
    pub fn new(type_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            id: id.into(),
        }
    }

    /// Parse a rendered key back into its parts.
    ///
    /// Splits on the **first** `.`; both halves must be non-empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_types::RegistryKey;
    ///
    /// let key = RegistryKey::parse("User.f1a2").unwrap();
    /// assert_eq!(key.type_name(), "User");
    /// assert_eq!(key.id(), "f1a2");
    /// assert!(RegistryKey::parse("nodot").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let Some((type_name, id)) = s.split_once('.') else {
            return Err(TypeError::InvalidKey {
                key: s.to_string(),
                reason: "missing '.' separator".into(),
            });
        };
        if type_name.is_empty() {
            return Err(TypeError::InvalidKey {
                key: s.to_string(),
                reason: "empty type name".into(),
            });
        }
        if id.is_empty() {
            return Err(TypeError::InvalidKey {
                key: s.to_string(),
                reason: "empty id".into(),
            });
        }
        Ok(Self {
            type_name: type_name.to_string(),
            id: id.to_string(),
        })
    }

    /// The type-name half of the key.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The id half of the key.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_simple_key() {
        let key = RegistryKey::parse("BaseModel.b6a6e15c").unwrap();
        assert_eq!(key.type_name(), "BaseModel");
        assert_eq!(key.id(), "b6a6e15c");
    }

    #[test]
    fn parse_splits_on_first_dot() {
        // Dots after the separator belong to the id.
        let key = RegistryKey::parse("User.a.b.c").unwrap();
        assert_eq!(key.type_name(), "User");
        assert_eq!(key.id(), "a.b.c");
    }

    #[test]
    fn reject_missing_separator() {
        assert!(matches!(
            RegistryKey::parse("nodot"),
            Err(TypeError::InvalidKey { .. })
        ));
    }

    #[test]
    fn reject_empty_type_name() {
        assert!(RegistryKey::parse(".abc").is_err());
    }

    #[test]
    fn reject_empty_id() {
        assert!(RegistryKey::parse("User.").is_err());
    }

    #[test]
    fn reject_empty_string() {
        assert!(RegistryKey::parse("").is_err());
    }

    #[test]
    fn display_renders_parts() {
        let key = RegistryKey::new("Place", "1234");
        assert_eq!(key.to_string(), "Place.1234");
    }

    #[test]
    fn ordering_groups_by_type_name() {
        let a = RegistryKey::new("Amenity", "zzz");
        let b = RegistryKey::new("User", "aaa");
        assert!(a < b);
    }

    proptest! {
        #[test]
        fn parse_display_roundtrip(
            type_name in "[A-Za-z][A-Za-z0-9_]{0,15}",
            id in "[a-z0-9][a-z0-9.-]{0,40}",
        ) {
            let key = RegistryKey::new(type_name, id);
            let parsed = RegistryKey::parse(&key.to_string()).unwrap();
            prop_assert_eq!(key, parsed);
        }
    }
}
