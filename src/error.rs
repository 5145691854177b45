use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return AppError::NotFound("Record not found".to_string());
        }

        let Some(db_err) = err.as_database_error() else {
            return AppError::Database(err);
        };

        if let Some(message) = db_err.code().as_deref().and_then(data_exception_message) {
            return AppError::BadRequest(message.to_string());
        }

        let constraint = db_err.constraint().unwrap_or_default();

        match db_err.kind() {
            ErrorKind::UniqueViolation => AppError::Conflict(unique_violation_message(constraint)),
            ErrorKind::ForeignKeyViolation => {
                AppError::BadRequest(foreign_key_violation_message(constraint))
            }
            ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                AppError::BadRequest(format!("Invalid value: {}", db_err.message()))
            }
            _ => AppError::Database(err),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Postgres class 22 errors caused by a value the client sent.
fn data_exception_message(code: &str) -> Option<&'static str> {
    match code {
        "22001" => Some("Value is too long for this field"),
        "22003" => Some("Numeric value is out of range"),
        "22007" | "22008" => Some("Invalid date or time value"),
        _ => None,
    }
}

fn unique_violation_message(constraint: &str) -> String {
    match constraint {
        "employees_pkey" => "An employee with this unique_id already exists".to_string(),
        "employee_roles_pkey" => "Role is already assigned to this employee".to_string(),
        "employee_shifts_pkey" => "Employee already has a shift assigned".to_string(),
        "salary_pkey" => {
            "Salary already exists for this employee. Use PUT to update.".to_string()
        }
        _ => "Record already exists".to_string(),
    }
}

fn foreign_key_violation_message(constraint: &str) -> String {
    match constraint {
        "employees_department_id_fkey" => "Department does not exist".to_string(),
        "employee_roles_role_id_fkey" => "Role does not exist".to_string(),
        "employee_shifts_shift_id_fkey" => "Shift does not exist".to_string(),
        "employee_roles_employee_id_fkey"
        | "employee_shifts_employee_id_fkey"
        | "qualifications_employee_id_fkey"
        | "salary_employee_id_fkey"
        | "leave_records_employee_id_fkey" => "Employee does not exist".to_string(),
        _ => "Referenced record does not exist or is still in use".to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Database(e) => {
                // Driver messages stay in the logs
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal database error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
