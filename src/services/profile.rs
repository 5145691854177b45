use sqlx::PgPool;

use crate::{
    db::{employee_roles, employee_shifts, employees, leave, qualifications, salary},
    models::EmployeeProfile,
    AppError, AppResult,
};

/// Loads an employee with roles, qualifications, salary, shift and leave history.
pub async fn load(pool: &PgPool, unique_id: &str) -> AppResult<EmployeeProfile> {
    let employee = employees::find(pool, unique_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

    let (roles, qualifications, salary, shift, leaves) = tokio::try_join!(
        employee_roles::list_roles(pool, unique_id),
        qualifications::list_for_employee(pool, unique_id),
        salary::find_for_employee(pool, unique_id),
        employee_shifts::find_shift(pool, unique_id),
        leave::list_for_employee(pool, unique_id),
    )?;

    Ok(EmployeeProfile {
        employee,
        roles,
        qualifications,
        salary,
        shift,
        leaves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{LeaveInput, ValidLeave},
        services::test_support,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    async fn with_history(pool: &PgPool, unique_id: &str) {
        test_support::employee(pool, unique_id, None).await;
        qualifications::insert(pool, unique_id, "MBBS", Some("St. Elsewhere"), Some(2010))
            .await
            .unwrap();
        salary::upsert(pool, unique_id, Decimal::from(90000), Decimal::from(500), Some("C1"))
            .await
            .unwrap();
        let input = LeaveInput {
            leave_type: Some("Annual".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            ..Default::default()
        };
        let annual: ValidLeave<'_> = input.validate().unwrap();
        leave::insert(pool, unique_id, &annual).await.unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_archive_keeps_history_and_leaves_active_list(pool: PgPool) {
        with_history(&pool, "E1").await;

        assert_eq!(employees::archive(&pool, "E1", Some("Retired")).await.unwrap(), 1);

        let profile = load(&pool, "E1").await.unwrap();
        assert!(!profile.employee.is_active);
        assert!(profile.employee.date_left.is_some());
        assert_eq!(profile.employee.reason_for_leaving.as_deref(), Some("Retired"));
        assert_eq!(profile.qualifications.len(), 1);
        assert!(profile.salary.is_some());
        assert_eq!(profile.leaves.len(), 1);

        let active = employees::list_active(&pool).await.unwrap();
        assert!(active.iter().all(|e| e.unique_id != "E1"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_delete_cascades_to_owned_records(pool: PgPool) {
        with_history(&pool, "E1").await;
        let nurse = test_support::role(&pool, "Nurse").await;
        let day = test_support::shift(&pool, "Day").await;
        employee_roles::insert(&pool, "E1", nurse).await.unwrap();
        employee_shifts::insert(&pool, "E1", day).await.unwrap();

        assert_eq!(employees::delete(&pool, "E1").await.unwrap(), 1);

        assert!(matches!(load(&pool, "E1").await, Err(AppError::NotFound(_))));
        assert!(qualifications::list_for_employee(&pool, "E1").await.unwrap().is_empty());
        assert!(salary::find_for_employee(&pool, "E1").await.unwrap().is_none());
        assert!(employee_shifts::find_shift(&pool, "E1").await.unwrap().is_none());
        assert!(employee_roles::list_roles(&pool, "E1").await.unwrap().is_empty());
        assert!(leave::list_for_employee(&pool, "E1").await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_toggle_duty_flips_each_call(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;

        employees::toggle_duty(&pool, "E1").await.unwrap();
        assert!(employees::find(&pool, "E1").await.unwrap().unwrap().is_on_duty);

        employees::toggle_duty(&pool, "E1").await.unwrap();
        assert!(!employees::find(&pool, "E1").await.unwrap().unwrap().is_on_duty);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_leave_duration_is_stored_as_given(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;

        let mut input = LeaveInput {
            leave_type: Some("Annual".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            ..Default::default()
        };
        let leave_id = leave::insert(&pool, "E1", &input.validate().unwrap()).await.unwrap();

        let stored = leave::find(&pool, leave_id).await.unwrap().unwrap();
        assert_eq!(stored.duration, None);
        assert_eq!(stored.status, "Pending");

        input.duration = Some(5);
        leave::replace(&pool, leave_id, &input.validate().unwrap()).await.unwrap();

        let stored = leave::find(&pool, leave_id).await.unwrap().unwrap();
        assert_eq!(stored.duration, Some(5));
    }
}
