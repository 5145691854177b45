use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::patch::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Qualification {
    pub qualification_id: i32,
    pub employee_id: String,
    pub degree: String,
    pub institution: Option<String>,
    pub year_awarded: Option<i32>,
}

/// A qualification to record, standalone or as part of onboarding
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QualificationInput {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year_awarded: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateQualificationInput {
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub institution: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub year_awarded: Option<Option<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QualificationCreatedResponse {
    pub message: String,
    pub qualification_id: i32,
}
