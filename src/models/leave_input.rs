use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{leave::DEFAULT_LEAVE_STATUS, patch::required_text};
use crate::{AppError, AppResult};

/// Leave application, also used as the full replacement on update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LeaveInput {
    pub leave_type: Option<String>,
    pub duration: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Free text; "Pending" when omitted
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveCreatedResponse {
    pub message: String,
    pub leave_id: i32,
}

/// A leave payload with its required fields checked
#[derive(Debug, Clone, PartialEq)]
pub struct ValidLeave<'a> {
    pub leave_type: &'a str,
    pub duration: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: &'a str,
}

impl LeaveInput {
    pub fn validate(&self) -> AppResult<ValidLeave<'_>> {
        let leave_type = required_text(self.leave_type.as_deref());

        match (leave_type, self.start_date, self.end_date) {
            (Some(leave_type), Some(start_date), Some(end_date)) => Ok(ValidLeave {
                leave_type,
                duration: self.duration,
                start_date,
                end_date,
                status: required_text(self.status.as_deref()).unwrap_or(DEFAULT_LEAVE_STATUS),
            }),
            _ => Err(AppError::BadRequest(
                "leave_type, start_date, end_date are required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_defaults_to_pending_and_duration_is_untouched() {
        let input: LeaveInput = serde_json::from_str(
            r#"{"leave_type": "Annual", "start_date": "2024-01-01", "end_date": "2024-01-05"}"#,
        )
        .unwrap();

        let leave = input.validate().unwrap();
        assert_eq!(leave.status, "Pending");
        assert_eq!(leave.duration, None);
        assert_eq!(leave.start_date, date(2024, 1, 1));
        assert_eq!(leave.end_date, date(2024, 1, 5));
    }

    #[test]
    fn test_missing_dates_are_rejected() {
        let input = LeaveInput {
            leave_type: Some("Sick".to_string()),
            start_date: Some(date(2024, 3, 1)),
            ..Default::default()
        };

        assert!(matches!(input.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let input = LeaveInput {
            leave_type: Some("Annual".to_string()),
            start_date: Some(date(2024, 3, 10)),
            end_date: Some(date(2024, 3, 1)),
            status: Some("Approved".to_string()),
            duration: Some(2),
        };

        let leave = input.validate().unwrap();
        assert_eq!(leave.status, "Approved");
        assert_eq!(leave.duration, Some(2));
    }
}
