use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use serde_json::Value;
use service::employees::{Employee, EMPLOYEE_ADDED};
use tracing::debug;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// 列出所有员工记录
pub async fn list_employees(State(state): State<ServerState>) -> Json<Vec<Employee>> {
    Json(state.employees.list_all().await)
}

/// 创建员工记录
///
/// The body is taken as loose JSON so presence checks and coercion follow
/// [`Employee::from_json`] rather than the extractor's own rules.
pub async fn create_employee(
    State(state): State<ServerState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), JsonApiError> {
    let Json(body) = payload.map_err(|rejection| {
        debug!(error = %rejection, "unreadable employee body");
        JsonApiError::bad_request("Invalid JSON body")
    })?;

    let employee = Employee::from_json(&body)?;
    state.employees.add(employee).await?;
    Ok((StatusCode::CREATED, Json(MessageBody { message: EMPLOYEE_ADDED.to_string() })))
}

/// 获取指定员工记录
pub async fn get_employee(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, JsonApiError> {
    state
        .employees
        .find_by_id(&id)
        .await
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("Employee not found"))
}
