use sqlx::{PgConnection, PgExecutor};

use super::{PartialUpdate, UpdateOutcome};
use crate::models::{ActiveEmployee, Employee, UpdateEmployeeInput};

/// Employee columns to insert; `date_joined` is always the current date
#[derive(Debug)]
pub struct NewEmployee<'a> {
    pub unique_id: &'a str,
    pub name: &'a str,
    pub email_id: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub department_id: Option<i32>,
}

pub async fn list_active<'e, E: PgExecutor<'e>>(db: E) -> Result<Vec<ActiveEmployee>, sqlx::Error> {
    sqlx::query_as::<_, ActiveEmployee>(
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
            d.department_name,
            STRING_AGG(DISTINCT r.role_name, ',') AS roles,
            MAX(s.base_salary) AS base_salary,
            MAX(sh.shift_type) AS shift_type
        FROM employees e
        LEFT JOIN departments d ON e.department_id = d.department_id
        LEFT JOIN employee_roles er ON e.unique_id = er.employee_id
        LEFT JOIN roles r ON er.role_id = r.role_id
        LEFT JOIN salary s ON e.unique_id = s.employee_id
        LEFT JOIN employee_shifts es ON e.unique_id = es.employee_id
        LEFT JOIN shifts sh ON es.shift_id = sh.shift_id
        WHERE e.is_active
        GROUP BY e.unique_id, d.department_name
        ORDER BY e.unique_id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(
    db: E,
    unique_id: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
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
            d.department_name
        FROM employees e
        LEFT JOIN departments d ON e.department_id = d.department_id
        WHERE e.unique_id = $1
        "#,
    )
    .bind(unique_id)
    .fetch_optional(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    employee: &NewEmployee<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO employees (unique_id, name, email_id, contact_number, department_id, date_joined)
        VALUES ($1, $2, $3, $4, $5, CURRENT_DATE)
        "#,
    )
    .bind(employee.unique_id)
    .bind(employee.name)
    .bind(employee.email_id)
    .bind(employee.contact_number)
    .bind(employee.department_id)
    .execute(db)
    .await?;

    Ok(())
}

/// Updates only the profile fields present in `input`; lifecycle columns are
/// never touched here.
pub async fn update<'e, E: PgExecutor<'e>>(
    db: E,
    unique_id: &str,
    input: &UpdateEmployeeInput,
) -> Result<UpdateOutcome, sqlx::Error> {
    let mut update = PartialUpdate::new("employees");
    update
        .set_if("name", input.name.as_deref())
        .set_if(
            "contact_number",
            input.contact_number.as_ref().map(|v| v.as_deref()),
        )
        .set_if("email_id", input.email_id.as_ref().map(|v| v.as_deref()))
        .set_if("department_id", input.department_id)
        .set_if("is_on_duty", input.is_on_duty);

    update.execute(db, "unique_id", unique_id).await
}

pub async fn archive<'e, E: PgExecutor<'e>>(
    db: E,
    unique_id: &str,
    reason: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE employees
        SET is_active = FALSE, date_left = CURRENT_DATE, reason_for_leaving = $1
        WHERE unique_id = $2
        "#,
    )
    .bind(reason)
    .bind(unique_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

pub async fn toggle_duty<'e, E: PgExecutor<'e>>(db: E, unique_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE employees SET is_on_duty = NOT is_on_duty WHERE unique_id = $1")
        .bind(unique_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

/// Hard delete; dependent rows go with it through `ON DELETE CASCADE`.
pub async fn delete<'e, E: PgExecutor<'e>>(db: E, unique_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE unique_id = $1")
        .bind(unique_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

/// Locks the employee row, serializing concurrent reassignments of the same
/// employee. Returns `false` if the employee does not exist.
pub async fn lock(conn: &mut PgConnection, unique_id: &str) -> Result<bool, sqlx::Error> {
    let row: Option<String> =
        sqlx::query_scalar("SELECT unique_id FROM employees WHERE unique_id = $1 FOR UPDATE")
            .bind(unique_id)
            .fetch_optional(conn)
            .await?;

    Ok(row.is_some())
}
