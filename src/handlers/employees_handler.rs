use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::{reject_blank, require_updated};
use crate::{
    db::employees,
    extractors::AppJson,
    models::{
        ActiveEmployee, ArchiveEmployeeInput, AssignShiftInput, CreateEmployeeInput,
        EmployeeCreatedResponse, EmployeeProfile, MessageResponse, UpdateEmployeeInput,
    },
    services::{assignments, onboarding, profile},
    AppError, AppResult, AppState,
};

fn employee_not_found() -> AppError {
    AppError::NotFound("Employee not found".to_string())
}

/// GET /api/employees - Active staff list
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Active employees with department, roles, salary and shift", body = Vec<ActiveEmployee>)
    ),
    tag = "employees"
)]
pub async fn get_employees(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<ActiveEmployee>>> {
    let employees = employees::list_active(&state.db).await?;
    Ok(Json(employees))
}

/// GET /api/employees/{id} - Full profile
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Employee with roles, qualifications, salary, shift and leave history", body = EmployeeProfile),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
) -> AppResult<Json<EmployeeProfile>> {
    let profile = profile::load(&state.db, &unique_id).await?;
    Ok(Json(profile))
}

/// POST /api/employees - Onboard an employee with everything attached at hire time
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeeInput,
    responses(
        (status = 200, description = "Employee created successfully", body = EmployeeCreatedResponse),
        (status = 400, description = "Missing required field or unknown reference"),
        (status = 409, description = "An employee with this unique_id already exists")
    ),
    tag = "employees"
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateEmployeeInput>,
) -> AppResult<Json<EmployeeCreatedResponse>> {
    let unique_id = onboarding::create_employee(&state.db, &input).await?;

    Ok(Json(EmployeeCreatedResponse {
        message: "Employee created successfully".to_string(),
        unique_id,
    }))
}

/// PUT /api/employees/{id} - Partial profile update
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = UpdateEmployeeInput,
    responses(
        (status = 200, description = "Employee updated successfully", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
    AppJson(input): AppJson<UpdateEmployeeInput>,
) -> AppResult<Json<MessageResponse>> {
    reject_blank(input.name.as_deref(), "Employee name cannot be empty")?;

    let outcome = employees::update(&state.db, &unique_id, &input).await?;
    require_updated(outcome, "Employee not found")?;

    tracing::info!(employee_id = %unique_id, "Employee updated");
    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

/// PUT /api/employees/{id}/shift - Older single-shift endpoint
#[utoipa::path(
    put,
    path = "/api/employees/{id}/shift",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = AssignShiftInput,
    responses(
        (status = 200, description = "Shift updated successfully", body = MessageResponse),
        (status = 400, description = "Shift ID is required"),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn update_legacy_shift(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
    AppJson(input): AppJson<AssignShiftInput>,
) -> AppResult<Json<MessageResponse>> {
    let shift_id = input
        .shift_id
        .ok_or_else(|| AppError::BadRequest("Shift ID is required".to_string()))?;

    assignments::assign_shift(&state.db, &unique_id, shift_id).await?;
    Ok(Json(MessageResponse::new("Shift updated successfully")))
}

/// PUT /api/employees/{id}/archive - Soft delete
#[utoipa::path(
    put,
    path = "/api/employees/{id}/archive",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    request_body = ArchiveEmployeeInput,
    responses(
        (status = 200, description = "Employee archived successfully", body = MessageResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn archive_employee(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
    AppJson(input): AppJson<ArchiveEmployeeInput>,
) -> AppResult<Json<MessageResponse>> {
    let archived =
        employees::archive(&state.db, &unique_id, input.reason_for_leaving.as_deref()).await?;

    if archived == 0 {
        return Err(employee_not_found());
    }

    tracing::info!(employee_id = %unique_id, "Employee archived");
    Ok(Json(MessageResponse::new("Employee archived successfully")))
}

/// PUT /api/employees/{id}/toggle-duty
#[utoipa::path(
    put,
    path = "/api/employees/{id}/toggle-duty",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Duty status toggled", body = MessageResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn toggle_duty(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if employees::toggle_duty(&state.db, &unique_id).await? == 0 {
        return Err(employee_not_found());
    }

    tracing::info!(employee_id = %unique_id, "Duty status toggled");
    Ok(Json(MessageResponse::new("Duty status toggled")))
}

/// DELETE /api/employees/{id} - Hard delete, cascading to owned records
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Employee deleted successfully", body = MessageResponse),
        (status = 404, description = "Employee not found")
    ),
    tag = "employees"
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(unique_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if employees::delete(&state.db, &unique_id).await? == 0 {
        return Err(employee_not_found());
    }

    tracing::info!(employee_id = %unique_id, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_update_unassigns_department_and_leaves_lifecycle_alone(pool: PgPool) {
        let department_id = test_support::department(&pool, "Oncology").await;
        test_support::employee(&pool, "E1", Some(department_id)).await;
        let state = test_support::app_state(pool);

        let unassign: UpdateEmployeeInput = serde_json::from_value(serde_json::json!({
            "department_id": null,
            "is_on_duty": true
        }))
        .unwrap();
        let Json(updated) = update_employee(State(state.clone()), Path("E1".to_string()), AppJson(unassign))
            .await
            .unwrap();
        assert_eq!(updated.message, "Employee updated successfully");

        let Json(profile) = get_employee(State(state.clone()), Path("E1".to_string()))
            .await
            .unwrap();
        assert_eq!(profile.employee.department_id, None);
        assert!(profile.employee.is_on_duty);
        assert!(profile.employee.is_active);

        let err = update_employee(
            State(state),
            Path("E1".to_string()),
            AppJson(UpdateEmployeeInput::default()),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "No fields to update"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_lifecycle_endpoints_report_missing_employee(pool: PgPool) {
        let state = test_support::app_state(pool);
        let ghost = || Path("ghost".to_string());

        let archive = ArchiveEmployeeInput {
            reason_for_leaving: None,
        };
        assert!(matches!(
            archive_employee(State(state.clone()), ghost(), AppJson(archive)).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            toggle_duty(State(state.clone()), ghost()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_employee(State(state), ghost()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
