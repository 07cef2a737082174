use serde::{Deserialize, Serialize};

/// Тип объекта, к которому привязаны права доступа и заявки на изменение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditableObjectType {
    /// Запись (сущность) внутри схемы
    Entity,
    /// Схема целиком
    Schema,
}

impl EditableObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableObjectType::Entity => "Entity",
            EditableObjectType::Schema => "Schema",
        }
    }
}

impl std::fmt::Display for EditableObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_serializes_as_tag() {
        assert_eq!(
            serde_json::to_value(EditableObjectType::Schema).unwrap(),
            serde_json::json!("Schema")
        );
        assert_eq!(EditableObjectType::Entity.to_string(), "Entity");
    }
}
