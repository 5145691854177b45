use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patch::double_option;

/// Input for creating a role
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRoleInput {
    pub role_name: Option<String>,
    pub role_type: Option<String>,
}

/// Input for updating a role
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleInput {
    pub role_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub role_type: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleCreatedResponse {
    pub message: String,
    pub role_id: i32,
}
