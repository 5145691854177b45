use axum::{
    extract::{Path, State},
    Json,
};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::{
    db::salary,
    extractors::AppJson,
    models::{
        patch::required_text, MessageResponse, OptionalRecord, Salary, SalaryCreatedResponse,
        SalaryInput,
    },
    AppError, AppResult, AppState,
};

/// Required base salary plus defaulted bonus
fn amounts(input: &SalaryInput) -> AppResult<(Decimal, Decimal)> {
    let base_salary = input
        .base_salary
        .ok_or_else(|| AppError::BadRequest("Base salary is required".to_string()))?;

    Ok((base_salary, input.bonus.unwrap_or(Decimal::ZERO)))
}

/// GET /api/salary/{employee_id}
#[utoipa::path(
    get,
    path = "/api/salary/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Salary record or an empty object", body = Salary)
    ),
    tag = "salary"
)]
pub async fn get_salary(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<OptionalRecord<Salary>>> {
    let salary = salary::find_for_employee(&state.db, &employee_id).await?;
    Ok(Json(OptionalRecord(salary)))
}

/// GET /api/salary/employees/{employee_id}
#[utoipa::path(
    get,
    path = "/api/salary/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Salary record or an empty object", body = Salary)
    ),
    tag = "salary"
)]
pub async fn get_employee_salary(
    state: State<Arc<AppState>>,
    employee_id: Path<String>,
) -> AppResult<Json<OptionalRecord<Salary>>> {
    get_salary(state, employee_id).await
}

/// POST /api/salary/employees/{employee_id}
#[utoipa::path(
    post,
    path = "/api/salary/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Salary created successfully", body = SalaryCreatedResponse),
        (status = 400, description = "Base salary is required, or a salary already exists")
    ),
    tag = "salary"
)]
pub async fn create_salary(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<SalaryInput>,
) -> AppResult<Json<SalaryCreatedResponse>> {
    let (base_salary, bonus) = amounts(&input)?;
    let pay_grade = required_text(input.pay_grade.as_deref());

    let inserted =
        salary::insert_if_absent(&state.db, &employee_id, base_salary, bonus, pay_grade).await?;

    if !inserted {
        return Err(AppError::BadRequest(
            "Salary already exists for this employee. Use PUT to update.".to_string(),
        ));
    }

    tracing::info!(employee_id = %employee_id, "Salary created");

    Ok(Json(SalaryCreatedResponse {
        message: "Salary created successfully".to_string(),
        salary_id: employee_id,
    }))
}

/// PUT /api/salary/{employee_id} - Create or overwrite
#[utoipa::path(
    put,
    path = "/api/salary/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    request_body = SalaryInput,
    responses(
        (status = 200, description = "Salary updated successfully", body = MessageResponse),
        (status = 400, description = "Base salary is required, or the employee does not exist")
    ),
    tag = "salary"
)]
pub async fn upsert_salary(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<SalaryInput>,
) -> AppResult<Json<MessageResponse>> {
    let (base_salary, bonus) = amounts(&input)?;
    let pay_grade = required_text(input.pay_grade.as_deref());

    let saved = salary::upsert(&state.db, &employee_id, base_salary, bonus, pay_grade).await?;

    tracing::info!(
        employee_id = %employee_id,
        base_salary = %saved.base_salary,
        "Salary saved"
    );
    Ok(Json(MessageResponse::new("Salary updated successfully")))
}

/// DELETE /api/salary/{employee_id}
#[utoipa::path(
    delete,
    path = "/api/salary/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Salary deleted successfully", body = MessageResponse),
        (status = 404, description = "Salary not found")
    ),
    tag = "salary"
)]
pub async fn delete_salary(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    if salary::delete(&state.db, &employee_id).await? == 0 {
        return Err(AppError::NotFound("Salary not found".to_string()));
    }

    tracing::info!(employee_id = %employee_id, "Salary deleted");
    Ok(Json(MessageResponse::new("Salary deleted successfully")))
}
