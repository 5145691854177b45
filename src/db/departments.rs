use sqlx::{PgConnection, PgExecutor};

use super::{PartialUpdate, UpdateOutcome};
use crate::models::{Department, DepartmentEmployee, DepartmentSummary};

pub async fn list<'e, E: PgExecutor<'e>>(db: E) -> Result<Vec<DepartmentSummary>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentSummary>(
        r#"
        SELECT
            d.department_id,
            d.department_name,
            d.department_location,
            COUNT(e.unique_id) FILTER (WHERE e.is_active)::int8 AS active_count,
            COUNT(e.unique_id) FILTER (WHERE e.is_active AND e.is_on_duty)::int8 AS on_duty_count
        FROM departments d
        LEFT JOIN employees e ON e.department_id = d.department_id
        GROUP BY d.department_id
        ORDER BY d.department_id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(
    db: E,
    department_id: i32,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>(
        r#"
        SELECT department_id, department_name, department_location
        FROM departments
        WHERE department_id = $1
        "#,
    )
    .bind(department_id)
    .fetch_optional(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    name: &str,
    location: Option<&str>,
    password_hash: &str,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO departments (department_name, department_location, department_password)
        VALUES ($1, $2, $3)
        RETURNING department_id
        "#,
    )
    .bind(name)
    .bind(location)
    .bind(password_hash)
    .fetch_one(db)
    .await
}

/// Fields of a department update, password already hashed
#[derive(Debug, Default)]
pub struct DepartmentChanges<'a> {
    pub name: Option<&'a str>,
    pub location: Option<Option<&'a str>>,
    pub password_hash: Option<String>,
}

pub async fn update<'e, E: PgExecutor<'e>>(
    db: E,
    department_id: i32,
    changes: DepartmentChanges<'_>,
) -> Result<UpdateOutcome, sqlx::Error> {
    let mut update = PartialUpdate::new("departments");
    update
        .set_if("department_name", changes.name)
        .set_if("department_location", changes.location)
        .set_if("department_password", changes.password_hash);

    update.execute(db, "department_id", department_id).await
}

pub async fn password_hash<'e, E: PgExecutor<'e>>(
    db: E,
    department_id: i32,
) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT department_password FROM departments WHERE department_id = $1")
        .bind(department_id)
        .fetch_optional(db)
        .await
}

/// Locks the department row for the rest of the transaction.
///
/// Inserts or updates of employees referencing the department take a key-share
/// lock on it through the foreign key, so they wait until the lock is released.
pub async fn lock(conn: &mut PgConnection, department_id: i32) -> Result<bool, sqlx::Error> {
    let row: Option<i32> = sqlx::query_scalar(
        "SELECT department_id FROM departments WHERE department_id = $1 FOR UPDATE",
    )
    .bind(department_id)
    .fetch_optional(conn)
    .await?;

    Ok(row.is_some())
}

pub async fn count_active_employees<'e, E: PgExecutor<'e>>(
    db: E,
    department_id: i32,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*)::int8 FROM employees WHERE department_id = $1 AND is_active",
    )
    .bind(department_id)
    .fetch_one(db)
    .await
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, department_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM departments WHERE department_id = $1")
        .bind(department_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn list_employees<'e, E: PgExecutor<'e>>(
    db: E,
    department_id: i32,
    active: bool,
) -> Result<Vec<DepartmentEmployee>, sqlx::Error> {
    sqlx::query_as::<_, DepartmentEmployee>(
        r#"
        SELECT
            e.unique_id,
            e.name,
            e.email_id,
            e.contact_number,
            e.department_id,
            e.is_active,
            e.is_on_duty,
            e.date_joined,
            e.date_left,
            e.reason_for_leaving,
            d.department_name,
            STRING_AGG(DISTINCT r.role_name, ',') AS roles
        FROM employees e
        LEFT JOIN departments d ON e.department_id = d.department_id
        LEFT JOIN employee_roles er ON e.unique_id = er.employee_id
        LEFT JOIN roles r ON er.role_id = r.role_id
        WHERE e.department_id = $1 AND e.is_active = $2
        GROUP BY e.unique_id, d.department_name
        ORDER BY e.unique_id
        "#,
    )
    .bind(department_id)
    .bind(active)
    .fetch_all(db)
    .await
}
