use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use super::{reject_blank, require_updated};
use crate::{
    auth::{hash_pin, verify_pin},
    db::departments::{self, DepartmentChanges},
    extractors::AppJson,
    models::{
        patch::required_text, CreateDepartmentInput, Department, DepartmentCreatedResponse,
        DepartmentEmployee, DepartmentEmployeesQuery, DepartmentSummary, MessageResponse,
        UpdateDepartmentInput, VerifyPasswordInput, VerifyPasswordResponse,
    },
    services::deletion,
    AppError, AppResult, AppState,
};

/// GET /api/departments
#[utoipa::path(
    get,
    path = "/api/departments",
    responses(
        (status = 200, description = "Departments with active and on-duty headcounts", body = Vec<DepartmentSummary>)
    ),
    tag = "departments"
)]
pub async fn get_departments(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<DepartmentSummary>>> {
    let departments = departments::list(&state.db).await?;
    Ok(Json(departments))
}

/// GET /api/departments/{id}
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department", body = Department),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn get_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<Department>> {
    let department = departments::find(&state.db, department_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    Ok(Json(department))
}

/// POST /api/departments/{id}/verify-password
///
/// A wrong PIN is a normal answer (`success: false`), not an error.
#[utoipa::path(
    post,
    path = "/api/departments/{id}/verify-password",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = VerifyPasswordInput,
    responses(
        (status = 200, description = "Whether the PIN matched", body = VerifyPasswordResponse),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn verify_department_password(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
    AppJson(input): AppJson<VerifyPasswordInput>,
) -> AppResult<Json<VerifyPasswordResponse>> {
    let stored = departments::password_hash(&state.db, department_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    let success = match input.password.as_deref() {
        Some(candidate) => verify_pin(candidate, &stored, &state.config.department_pin_secret)?,
        None => false,
    };

    if !success {
        tracing::warn!(department_id, "Department PIN mismatch");
    }

    Ok(Json(VerifyPasswordResponse { success }))
}

/// POST /api/departments
#[utoipa::path(
    post,
    path = "/api/departments",
    request_body = CreateDepartmentInput,
    responses(
        (status = 200, description = "Department created successfully", body = DepartmentCreatedResponse),
        (status = 400, description = "Department name and password are required")
    ),
    tag = "departments"
)]
pub async fn create_department(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateDepartmentInput>,
) -> AppResult<Json<DepartmentCreatedResponse>> {
    let (Some(name), Some(password)) = (
        required_text(input.department_name.as_deref()),
        required_text(input.department_password.as_deref()),
    ) else {
        return Err(AppError::BadRequest(
            "Department name and password are required".to_string(),
        ));
    };

    let password_hash = hash_pin(password, &state.config.department_pin_secret)?;
    let location = required_text(input.department_location.as_deref());

    let department_id = departments::insert(&state.db, name, location, &password_hash).await?;

    tracing::info!(department_id, name, "Department created");

    Ok(Json(DepartmentCreatedResponse {
        message: "Department created successfully".to_string(),
        department_id,
    }))
}

/// PUT /api/departments/{id}
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    request_body = UpdateDepartmentInput,
    responses(
        (status = 200, description = "Department updated successfully", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn update_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
    AppJson(input): AppJson<UpdateDepartmentInput>,
) -> AppResult<Json<MessageResponse>> {
    reject_blank(input.department_name.as_deref(), "Department name cannot be empty")?;
    reject_blank(
        input.department_password.as_deref(),
        "Department password cannot be empty",
    )?;

    let password_hash = input
        .department_password
        .as_deref()
        .map(|pin| hash_pin(pin.trim(), &state.config.department_pin_secret))
        .transpose()?;

    let changes = DepartmentChanges {
        name: input.department_name.as_deref().map(str::trim),
        location: input.department_location.as_ref().map(|v| v.as_deref()),
        password_hash,
    };

    let outcome = departments::update(&state.db, department_id, changes).await?;
    require_updated(outcome, "Department not found")?;

    tracing::info!(department_id, "Department updated");
    Ok(Json(MessageResponse::new("Department updated successfully")))
}

/// DELETE /api/departments/{id}
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    params(
        ("id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted successfully", body = MessageResponse),
        (status = 400, description = "Department still has active employees"),
        (status = 404, description = "Department not found")
    ),
    tag = "departments"
)]
pub async fn delete_department(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    deletion::delete_department(&state.db, department_id).await?;
    Ok(Json(MessageResponse::new("Department deleted successfully")))
}

/// GET /api/departments/{id}/employees?active=
#[utoipa::path(
    get,
    path = "/api/departments/{id}/employees",
    params(
        ("id" = i32, Path, description = "Department ID"),
        DepartmentEmployeesQuery
    ),
    responses(
        (status = 200, description = "Employees of the department", body = Vec<DepartmentEmployee>)
    ),
    tag = "departments"
)]
pub async fn get_department_employees(
    State(state): State<Arc<AppState>>,
    Path(department_id): Path<i32>,
    Query(query): Query<DepartmentEmployeesQuery>,
) -> AppResult<Json<Vec<DepartmentEmployee>>> {
    let employees =
        departments::list_employees(&state.db, department_id, query.active.unwrap_or(true))
            .await?;

    Ok(Json(employees))
}
