pub mod departments_handler;
pub mod employee_roles_handler;
pub mod employee_shifts_handler;
pub mod employees_handler;
pub mod health;
pub mod leave_handler;
pub mod metrics;
pub mod qualifications_handler;
pub mod roles_handler;
pub mod salary_handler;
pub mod shifts_handler;

pub use health::health_check;
pub use self::metrics::{metrics_handler, setup_metrics_recorder, MetricsState};

use crate::{db::UpdateOutcome, AppError, AppResult};

/// Maps the outcome of a partial update onto the API's error contract.
pub(crate) fn require_updated(outcome: UpdateOutcome, not_found: &str) -> AppResult<()> {
    match outcome {
        UpdateOutcome::Updated => Ok(()),
        UpdateOutcome::NoFields => Err(AppError::BadRequest("No fields to update".to_string())),
        UpdateOutcome::NotFound => Err(AppError::NotFound(not_found.to_string())),
    }
}

/// Rejects an update that would blank out a required text column.
pub(crate) fn reject_blank(value: Option<&str>, message: &str) -> AppResult<()> {
    match value {
        Some(v) if v.trim().is_empty() => Err(AppError::BadRequest(message.to_string())),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_outcomes_map_to_status() {
        assert!(require_updated(UpdateOutcome::Updated, "Role not found").is_ok());
        assert!(matches!(
            require_updated(UpdateOutcome::NoFields, "Role not found"),
            Err(AppError::BadRequest(msg)) if msg == "No fields to update"
        ));
        assert!(matches!(
            require_updated(UpdateOutcome::NotFound, "Role not found"),
            Err(AppError::NotFound(msg)) if msg == "Role not found"
        ));
    }

    #[test]
    fn test_blank_values_are_rejected_only_when_present() {
        assert!(reject_blank(None, "Role name cannot be empty").is_ok());
        assert!(reject_blank(Some("Nurse"), "Role name cannot be empty").is_ok());
        assert!(reject_blank(Some("  "), "Role name cannot be empty").is_err());
    }
}
