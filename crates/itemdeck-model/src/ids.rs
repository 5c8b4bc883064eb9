use std::fmt;

use crate::ModelError;

/// Opaque record identifier.
///
/// Assigned once when a record is created and never changed afterwards.
/// Stored exactly as given; only blank ids are rejected.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::InvalidItemId(value));
        }
        Ok(Self(value))
    }

    /// Fresh random identifier (UUID v4, hyphenated lowercase).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// Category label drawn from the catalog's closed enumeration.
///
/// Membership in the enumeration is checked at the form boundary, not here.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidCategory(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_rejects_blank() {
        assert!(ItemId::new("   ").is_err());
        assert_eq!(ItemId::new(" 42 ").unwrap().as_str(), " 42 ");
    }

    #[test]
    fn loaded_id_keeps_surrounding_whitespace() {
        let id: ItemId = serde_json::from_str(r#"" a-1""#).unwrap();
        assert_eq!(id.as_str(), " a-1");
        assert_ne!(id, ItemId::new("a-1").unwrap());
        assert_eq!(serde_json::to_string(&id).unwrap(), r#"" a-1""#);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn category_deserialize_rejects_empty() {
        let parsed: Result<Category, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
    }
}
