//! Traceability: change requests raised against schemas and entities

use crate::domain::common::EditableObjectType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeType {
    Create,
    Update,
    Delete,
}

impl ChangeType {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Create => "Создание",
            ChangeType::Update => "Изменение",
            ChangeType::Delete => "Удаление",
        }
    }
}

/// Статус заявки на изменение
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    Pending,
    Approved,
    Declined,
}

impl ChangeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeStatus::Pending => "На рассмотрении",
            ChangeStatus::Approved => "Одобрено",
            ChangeStatus::Declined => "Отклонено",
        }
    }
}

/// One row of an object's change history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequestSummary {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub object_type: EditableObjectType,
    /// None for create requests that were never applied
    pub object_id: Option<i64>,
    pub change_type: ChangeType,
    pub status: ChangeStatus,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
}

impl ChangeRequestSummary {
    pub fn is_reviewed(&self) -> bool {
        self.status != ChangeStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListChangeRequestsResponse {
    pub items: Vec<ChangeRequestSummary>,
}
