use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A hospital department. The access PIN hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Department {
    pub department_id: i32,
    pub department_name: String,
    pub department_location: Option<String>,
}

/// Department row with live staffing counts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DepartmentSummary {
    pub department_id: i32,
    pub department_name: String,
    pub department_location: Option<String>,
    pub active_count: i64,
    pub on_duty_count: i64,
}
