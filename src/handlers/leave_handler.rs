use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    db::leave,
    extractors::AppJson,
    models::{LeaveCreatedResponse, LeaveInput, LeaveRecord, MessageResponse},
    AppError, AppResult, AppState,
};

fn leave_not_found() -> AppError {
    AppError::NotFound("Leave record not found".to_string())
}

/// GET /api/leave
#[utoipa::path(
    get,
    path = "/api/leave",
    responses(
        (status = 200, description = "All leave records, latest start first", body = Vec<LeaveRecord>)
    ),
    tag = "leave"
)]
pub async fn get_all_leave(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<LeaveRecord>>> {
    let records = leave::list_all(&state.db).await?;
    Ok(Json(records))
}

/// GET /api/leave/employees/{employee_id}
#[utoipa::path(
    get,
    path = "/api/leave/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Leave history of one employee", body = Vec<LeaveRecord>)
    ),
    tag = "leave"
)]
pub async fn get_employee_leave(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<LeaveRecord>>> {
    let records = leave::list_for_employee(&state.db, &employee_id).await?;
    Ok(Json(records))
}

/// POST /api/leave/employees/{employee_id} - Apply for leave
#[utoipa::path(
    post,
    path = "/api/leave/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    request_body = LeaveInput,
    responses(
        (status = 200, description = "Leave record added successfully", body = LeaveCreatedResponse),
        (status = 400, description = "leave_type, start_date, end_date are required")
    ),
    tag = "leave"
)]
pub async fn apply_leave(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<LeaveInput>,
) -> AppResult<Json<LeaveCreatedResponse>> {
    let application = input.validate()?;

    let leave_id = leave::insert(&state.db, &employee_id, &application).await?;

    tracing::info!(
        employee_id = %employee_id,
        leave_id,
        leave_type = application.leave_type,
        "Leave recorded"
    );

    Ok(Json(LeaveCreatedResponse {
        message: "Leave record added successfully".to_string(),
        leave_id,
    }))
}

/// GET /api/leave/{id}
#[utoipa::path(
    get,
    path = "/api/leave/{id}",
    params(
        ("id" = i32, Path, description = "Leave record ID")
    ),
    responses(
        (status = 200, description = "Leave record", body = LeaveRecord),
        (status = 404, description = "Leave record not found")
    ),
    tag = "leave"
)]
pub async fn get_leave(
    State(state): State<Arc<AppState>>,
    Path(leave_id): Path<i32>,
) -> AppResult<Json<LeaveRecord>> {
    let record = leave::find(&state.db, leave_id)
        .await?
        .ok_or_else(leave_not_found)?;

    Ok(Json(record))
}

/// PUT /api/leave/{id} - Overwrite a leave record
#[utoipa::path(
    put,
    path = "/api/leave/{id}",
    params(
        ("id" = i32, Path, description = "Leave record ID")
    ),
    request_body = LeaveInput,
    responses(
        (status = 200, description = "Leave updated successfully", body = MessageResponse),
        (status = 400, description = "leave_type, start_date, end_date are required"),
        (status = 404, description = "Leave record not found")
    ),
    tag = "leave"
)]
pub async fn update_leave(
    State(state): State<Arc<AppState>>,
    Path(leave_id): Path<i32>,
    AppJson(input): AppJson<LeaveInput>,
) -> AppResult<Json<MessageResponse>> {
    let replacement = input.validate()?;

    if leave::replace(&state.db, leave_id, &replacement).await? == 0 {
        return Err(leave_not_found());
    }

    tracing::info!(leave_id, status = replacement.status, "Leave updated");
    Ok(Json(MessageResponse::new("Leave updated successfully")))
}

/// DELETE /api/leave/{id}
#[utoipa::path(
    delete,
    path = "/api/leave/{id}",
    params(
        ("id" = i32, Path, description = "Leave record ID")
    ),
    responses(
        (status = 200, description = "Leave record deleted successfully", body = MessageResponse),
        (status = 404, description = "Leave record not found")
    ),
    tag = "leave"
)]
pub async fn delete_leave(
    State(state): State<Arc<AppState>>,
    Path(leave_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    if leave::delete(&state.db, leave_id).await? == 0 {
        return Err(leave_not_found());
    }

    tracing::info!(leave_id, "Leave deleted");
    Ok(Json(MessageResponse::new("Leave record deleted successfully")))
}
