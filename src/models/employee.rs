use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{
    leave::LeaveRecord, patch::empty_object_if_none, qualification::Qualification, role::Role,
    salary::Salary, shift::Shift,
};

/// Employee row joined with its department name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub unique_id: String,
    pub name: String,
    pub email_id: Option<String>,
    pub contact_number: Option<String>,
    pub department_id: Option<i32>,
    pub is_active: bool,
    pub is_on_duty: bool,
    pub date_joined: NaiveDate,
    pub date_left: Option<NaiveDate>,
    pub reason_for_leaving: Option<String>,
    pub department_name: Option<String>,
}

/// Row of the active staff list
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActiveEmployee {
    pub unique_id: String,
    pub name: String,
    pub email_id: Option<String>,
    pub contact_number: Option<String>,
    pub department_id: Option<i32>,
    pub is_active: bool,
    pub is_on_duty: bool,
    pub date_joined: NaiveDate,
    pub department_name: Option<String>,
    /// Comma-joined distinct role names
    pub roles: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub base_salary: Option<Decimal>,
    pub shift_type: Option<String>,
}

/// Employee listed under a department, with comma-joined role names
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DepartmentEmployee {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub employee: Employee,
    pub roles: Option<String>,
}

/// Full employee profile with everything the employee owns
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeProfile {
    #[serde(flatten)]
    pub employee: Employee,
    pub roles: Vec<Role>,
    pub qualifications: Vec<Qualification>,
    #[serde(serialize_with = "empty_object_if_none")]
    pub salary: Option<Salary>,
    #[serde(serialize_with = "empty_object_if_none")]
    pub shift: Option<Shift>,
    pub leaves: Vec<LeaveRecord>,
}
