use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    db::employee_roles,
    extractors::AppJson,
    models::{AssignRolesInput, MessageResponse, Role},
    services::assignments,
    AppError, AppResult, AppState,
};

/// GET /api/employees/{id}/roles
#[utoipa::path(
    get,
    path = "/api/employees/{id}/roles",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Roles held by the employee", body = Vec<Role>)
    ),
    tag = "employee-roles"
)]
pub async fn get_employee_roles(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Role>>> {
    let roles = employee_roles::list_roles(&state.db, &employee_id).await?;
    Ok(Json(roles))
}

/// POST /api/employees/{id}/roles - Replace the role set; must not be empty
#[utoipa::path(
    post,
    path = "/api/employees/{id}/roles",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = AssignRolesInput,
    responses(
        (status = 200, description = "Roles assigned successfully", body = MessageResponse),
        (status = 400, description = "Roles array is required, or a role does not exist"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employee-roles"
)]
pub async fn assign_employee_roles(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<AssignRolesInput>,
) -> AppResult<Json<MessageResponse>> {
    let role_ids = input
        .role_ids()
        .ok_or_else(|| AppError::BadRequest("Roles array is required".to_string()))?;

    assignments::assign_roles(&state.db, &employee_id, &role_ids).await?;
    Ok(Json(MessageResponse::new("Roles assigned successfully")))
}

/// PUT /api/employees/{id}/roles - Replace the role set; empty clears it
#[utoipa::path(
    put,
    path = "/api/employees/{id}/roles",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = AssignRolesInput,
    responses(
        (status = 200, description = "Roles updated successfully", body = MessageResponse),
        (status = 400, description = "Roles is not an array of role ids, or a role does not exist"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employee-roles"
)]
pub async fn update_employee_roles(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<AssignRolesInput>,
) -> AppResult<Json<MessageResponse>> {
    let role_ids = match input.roles {
        None => Vec::new(),
        Some(_) => input.role_ids().ok_or_else(|| {
            AppError::BadRequest("Roles must be an array of role ids".to_string())
        })?,
    };

    assignments::replace_roles(&state.db, &employee_id, &role_ids).await?;
    Ok(Json(MessageResponse::new("Roles updated successfully")))
}

/// DELETE /api/employees/{id}/roles/{role_id}
#[utoipa::path(
    delete,
    path = "/api/employees/{id}/roles/{role_id}",
    params(
        ("id" = String, Path, description = "Employee unique_id"),
        ("role_id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role removed successfully", body = MessageResponse),
        (status = 404, description = "Role assignment not found")
    ),
    tag = "employee-roles"
)]
pub async fn remove_employee_role(
    State(state): State<Arc<AppState>>,
    Path((employee_id, role_id)): Path<(String, i32)>,
) -> AppResult<Json<MessageResponse>> {
    if employee_roles::remove(&state.db, &employee_id, role_id).await? == 0 {
        return Err(AppError::NotFound("Role assignment not found".to_string()));
    }

    tracing::info!(employee_id = %employee_id, role_id, "Employee role removed");
    Ok(Json(MessageResponse::new("Role removed successfully")))
}
