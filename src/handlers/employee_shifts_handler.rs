use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    db::employee_shifts,
    extractors::AppJson,
    models::{AssignShiftInput, MessageResponse, OptionalRecord, Shift},
    services::assignments,
    AppError, AppResult, AppState,
};

fn required_shift_id(input: &AssignShiftInput) -> AppResult<i32> {
    input
        .shift_id
        .ok_or_else(|| AppError::BadRequest("Shift ID is required".to_string()))
}

/// GET /api/employees/{id}/shifts - The employee's shift, `{}` if none
#[utoipa::path(
    get,
    path = "/api/employees/{id}/shifts",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Assigned shift or an empty object", body = Shift)
    ),
    tag = "employee-shifts"
)]
pub async fn get_employee_shift(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<OptionalRecord<Shift>>> {
    let shift = employee_shifts::find_shift(&state.db, &employee_id).await?;
    Ok(Json(OptionalRecord(shift)))
}

/// POST /api/employees/{id}/shifts
#[utoipa::path(
    post,
    path = "/api/employees/{id}/shifts",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = AssignShiftInput,
    responses(
        (status = 200, description = "Shift assigned successfully", body = MessageResponse),
        (status = 400, description = "Shift ID is required, or the shift does not exist"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employee-shifts"
)]
pub async fn assign_employee_shift(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<AssignShiftInput>,
) -> AppResult<Json<MessageResponse>> {
    let shift_id = required_shift_id(&input)?;

    assignments::assign_shift(&state.db, &employee_id, shift_id).await?;
    Ok(Json(MessageResponse::new("Shift assigned successfully")))
}

/// PUT /api/employees/{id}/shifts
#[utoipa::path(
    put,
    path = "/api/employees/{id}/shifts",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = AssignShiftInput,
    responses(
        (status = 200, description = "Shift updated successfully", body = MessageResponse),
        (status = 400, description = "Shift ID is required, or the shift does not exist"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employee-shifts"
)]
pub async fn update_employee_shift(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<AssignShiftInput>,
) -> AppResult<Json<MessageResponse>> {
    let shift_id = required_shift_id(&input)?;

    assignments::assign_shift(&state.db, &employee_id, shift_id).await?;
    Ok(Json(MessageResponse::new("Shift updated successfully")))
}
