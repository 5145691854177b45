use sqlx::{PgConnection, PgPool};

use crate::{
    db::{employee_roles, employee_shifts, employees, UnitOfWork},
    AppError, AppResult,
};

async fn lock_employee(conn: &mut PgConnection, employee_id: &str) -> AppResult<()> {
    if employees::lock(conn, employee_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound("Employee not found".to_string()))
    }
}

/// Replaces the employee's role set with `role_ids`, inserted in the given order.
///
/// The delete and every insert share one transaction, so a failing insert
/// leaves the previous role set in place. An empty slice clears all roles.
pub async fn replace_roles(pool: &PgPool, employee_id: &str, role_ids: &[i32]) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool, "replace_roles").await?;
    lock_employee(uow.conn(), employee_id).await?;

    let removed = employee_roles::delete_all(uow.conn(), employee_id).await?;
    for role_id in role_ids {
        employee_roles::insert(uow.conn(), employee_id, *role_id).await?;
    }

    uow.commit().await?;

    tracing::info!(
        employee_id,
        removed,
        assigned = role_ids.len(),
        "Employee roles replaced"
    );
    Ok(())
}

/// Like [`replace_roles`] but refuses an empty role set.
pub async fn assign_roles(pool: &PgPool, employee_id: &str, role_ids: &[i32]) -> AppResult<()> {
    if role_ids.is_empty() {
        return Err(AppError::BadRequest("Roles array is required".to_string()));
    }
    replace_roles(pool, employee_id, role_ids).await
}

/// Makes `shift_id` the employee's only shift.
pub async fn assign_shift(pool: &PgPool, employee_id: &str, shift_id: i32) -> AppResult<()> {
    let mut uow = UnitOfWork::begin(pool, "assign_shift").await?;
    replace_shift(uow.conn(), employee_id, shift_id).await?;
    uow.commit().await?;

    tracing::info!(employee_id, shift_id, "Employee shift assigned");
    Ok(())
}

/// Swaps the shift link inside the caller's transaction, holding the employee
/// row lock until that transaction ends.
async fn replace_shift(conn: &mut PgConnection, employee_id: &str, shift_id: i32) -> AppResult<()> {
    lock_employee(&mut *conn, employee_id).await?;

    employee_shifts::delete_for_employee(&mut *conn, employee_id).await?;
    employee_shifts::insert(conn, employee_id, shift_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;
    use std::{collections::HashSet, time::Duration};

    async fn shift_links(pool: &PgPool, employee_id: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*)::int8 FROM employee_shifts WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    async fn role_ids(pool: &PgPool, employee_id: &str) -> HashSet<i32> {
        employee_roles::list_roles(pool, employee_id)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.role_id)
            .collect()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_assign_roles_replaces_never_unions(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let nurse = test_support::role(&pool, "Nurse").await;
        let surgeon = test_support::role(&pool, "Surgeon").await;
        let porter = test_support::role(&pool, "Porter").await;

        assign_roles(&pool, "E1", &[surgeon, nurse]).await.unwrap();
        assert_eq!(role_ids(&pool, "E1").await, HashSet::from([nurse, surgeon]));

        assign_roles(&pool, "E1", &[porter]).await.unwrap();
        assert_eq!(role_ids(&pool, "E1").await, HashSet::from([porter]));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_failed_role_insert_keeps_previous_set(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let nurse = test_support::role(&pool, "Nurse").await;
        assign_roles(&pool, "E1", &[nurse]).await.unwrap();

        let err = assign_roles(&pool, "E1", &[nurse, 424_242]).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(role_ids(&pool, "E1").await, HashSet::from([nurse]));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_empty_role_sets(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let nurse = test_support::role(&pool, "Nurse").await;
        assign_roles(&pool, "E1", &[nurse]).await.unwrap();

        let err = assign_roles(&pool, "E1", &[]).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Roles array is required"));

        replace_roles(&pool, "E1", &[]).await.unwrap();
        assert!(role_ids(&pool, "E1").await.is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_second_shift_replaces_first(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let day = test_support::shift(&pool, "Day").await;
        let night = test_support::shift(&pool, "Night").await;

        assign_shift(&pool, "E1", day).await.unwrap();
        assign_shift(&pool, "E1", night).await.unwrap();

        assert_eq!(shift_links(&pool, "E1").await, 1);

        let shift = employee_shifts::find_shift(&pool, "E1").await.unwrap().unwrap();
        assert_eq!(shift.shift_id, night);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_assignment_to_unknown_employee_is_not_found(pool: PgPool) {
        let day = test_support::shift(&pool, "Day").await;

        let err = assign_shift(&pool, "ghost", day).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_concurrent_shift_assignments_run_one_after_another(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let day = test_support::shift(&pool, "Day").await;
        let night = test_support::shift(&pool, "Night").await;

        let mut uow = UnitOfWork::begin(&pool, "assign_shift").await.unwrap();
        replace_shift(uow.conn(), "E1", day).await.unwrap();

        let second = tokio::spawn({
            let pool = pool.clone();
            async move { assign_shift(&pool, "E1", night).await }
        });

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(!second.is_finished());

        uow.commit().await.unwrap();
        second.await.unwrap().unwrap();

        assert_eq!(shift_links(&pool, "E1").await, 1);
        let shift = employee_shifts::find_shift(&pool, "E1").await.unwrap().unwrap();
        assert_eq!(shift.shift_id, night);
    }
}
