//! API client for schemas and their change history

use contracts::domain::a001_schema::ListSchemasResponse;
use contracts::domain::common::EditableObjectType;
use contracts::system::traceability::ListChangeRequestsResponse;
use gloo_net::http::Request;

/// List all schemas visible to the current user
pub async fn list_schemas(base_url: &str) -> Result<ListSchemasResponse, String> {
    Request::get(&format!("{}/schemas", base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

/// Change requests raised against one object, newest first
pub async fn list_change_requests(
    base_url: &str,
    object_type: EditableObjectType,
    object_id: i64,
) -> Result<ListChangeRequestsResponse, String> {
    Request::get(&format!(
        "{}/changes?object_type={}&object_id={}",
        base_url, object_type, object_id
    ))
    .send()
    .await
    .map_err(|e| e.to_string())?
    .json()
    .await
    .map_err(|e| e.to_string())
}
