use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Shift {
    pub shift_id: i32,
    pub shift_type: String,
    /// Time-of-day label, e.g. "07:00-15:00"
    pub shift_time: Option<String>,
}
