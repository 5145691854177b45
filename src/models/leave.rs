use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

pub const DEFAULT_LEAVE_STATUS: &str = "Pending";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeaveRecord {
    pub leave_id: i32,
    pub employee_id: String,
    pub leave_type: String,
    /// Days as entered by the client; never derived from the dates
    pub duration: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
}
