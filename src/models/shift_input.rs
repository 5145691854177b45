use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patch::double_option;

/// Input DTO for creating a shift
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateShiftInput {
    pub shift_type: Option<String>,
    pub shift_time: Option<String>,
}

/// Input DTO for updating a shift
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateShiftInput {
    pub shift_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub shift_time: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftCreatedResponse {
    pub message: String,
    pub shift_id: i32,
}
