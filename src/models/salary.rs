use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Salary record, at most one per employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Salary {
    pub employee_id: String,
    #[schema(value_type = f64)]
    pub base_salary: Decimal,
    #[schema(value_type = f64)]
    pub bonus: Decimal,
    pub pay_grade: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SalaryInput {
    #[schema(value_type = Option<f64>)]
    pub base_salary: Option<Decimal>,
    /// Defaults to 0
    #[schema(value_type = Option<f64>)]
    pub bonus: Option<Decimal>,
    pub pay_grade: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SalaryCreatedResponse {
    pub message: String,
    /// Salary rows are keyed by employee
    pub salary_id: String,
}
