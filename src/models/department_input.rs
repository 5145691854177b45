use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::patch::double_option;

/// Input for creating a department
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDepartmentInput {
    pub department_name: Option<String>,
    pub department_location: Option<String>,
    pub department_password: Option<String>,
}

/// Input for updating a department. `department_location: null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDepartmentInput {
    pub department_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub department_location: Option<Option<String>>,
    pub department_password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentCreatedResponse {
    pub message: String,
    pub department_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyPasswordInput {
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerifyPasswordResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct DepartmentEmployeesQuery {
    /// `false` lists archived employees; defaults to active ones
    pub active: Option<bool>,
}
