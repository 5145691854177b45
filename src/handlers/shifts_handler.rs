use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::{reject_blank, require_updated};
use crate::{
    db::shifts,
    extractors::AppJson,
    models::{
        patch::required_text, CreateShiftInput, MessageResponse, Shift, ShiftCreatedResponse,
        UpdateShiftInput,
    },
    services::deletion,
    AppError, AppResult, AppState,
};

/// GET /api/shifts
#[utoipa::path(
    get,
    path = "/api/shifts",
    responses(
        (status = 200, description = "All shift patterns", body = Vec<Shift>)
    ),
    tag = "shifts"
)]
pub async fn get_shifts(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Shift>>> {
    let shifts = shifts::list(&state.db).await?;
    Ok(Json(shifts))
}

/// GET /api/shifts/{id}
#[utoipa::path(
    get,
    path = "/api/shifts/{id}",
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 200, description = "Shift pattern", body = Shift),
        (status = 404, description = "Shift not found")
    ),
    tag = "shifts"
)]
pub async fn get_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<i32>,
) -> AppResult<Json<Shift>> {
    let shift = shifts::find(&state.db, shift_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

    Ok(Json(shift))
}

/// POST /api/shifts
#[utoipa::path(
    post,
    path = "/api/shifts",
    request_body = CreateShiftInput,
    responses(
        (status = 200, description = "Shift created successfully", body = ShiftCreatedResponse),
        (status = 400, description = "Shift type is required")
    ),
    tag = "shifts"
)]
pub async fn create_shift(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateShiftInput>,
) -> AppResult<Json<ShiftCreatedResponse>> {
    let shift_type = required_text(input.shift_type.as_deref())
        .ok_or_else(|| AppError::BadRequest("Shift type is required".to_string()))?;

    let shift_id = shifts::insert(&state.db, shift_type, input.shift_time.as_deref()).await?;

    tracing::info!(shift_id, shift_type, "Shift created");

    Ok(Json(ShiftCreatedResponse {
        message: "Shift created successfully".to_string(),
        shift_id,
    }))
}

/// PUT /api/shifts/{id}
#[utoipa::path(
    put,
    path = "/api/shifts/{id}",
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    request_body = UpdateShiftInput,
    responses(
        (status = 200, description = "Shift updated successfully", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Shift not found")
    ),
    tag = "shifts"
)]
pub async fn update_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<i32>,
    AppJson(input): AppJson<UpdateShiftInput>,
) -> AppResult<Json<MessageResponse>> {
    reject_blank(input.shift_type.as_deref(), "Shift type cannot be empty")?;

    let outcome = shifts::update(&state.db, shift_id, &input).await?;
    require_updated(outcome, "Shift not found")?;

    tracing::info!(shift_id, "Shift updated");
    Ok(Json(MessageResponse::new("Shift updated successfully")))
}

/// DELETE /api/shifts/{id}
#[utoipa::path(
    delete,
    path = "/api/shifts/{id}",
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 200, description = "Shift deleted successfully", body = MessageResponse),
        (status = 400, description = "Shift is still assigned to employees"),
        (status = 404, description = "Shift not found")
    ),
    tag = "shifts"
)]
pub async fn delete_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    deletion::delete_shift(&state.db, shift_id).await?;
    Ok(Json(MessageResponse::new("Shift deleted successfully")))
}
