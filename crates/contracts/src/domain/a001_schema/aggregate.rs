use serde::{Deserialize, Serialize};

/// Reference to a schema as seen by the UI: identifier plus display name.
///
/// The backend may omit or blank the name while a schema is being created,
/// so `name` is optional and [`SchemaRef::display_name`] filters blank values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl SchemaRef {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Usable display name, if any
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSchemasResponse {
    pub schemas: Vec<SchemaRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(SchemaRef::new(7, "Invoice").display_name(), Some("Invoice"));
        assert_eq!(SchemaRef::new(7, "   ").display_name(), None);
        assert_eq!(SchemaRef { id: 7, name: None }.display_name(), None);
    }

    #[test]
    fn test_missing_name_deserializes() {
        let schema: SchemaRef = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(schema.id, 3);
        assert!(schema.name.is_none());
    }
}
