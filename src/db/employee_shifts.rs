use sqlx::PgExecutor;

use crate::models::Shift;

pub async fn find_shift<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<Option<Shift>, sqlx::Error> {
    sqlx::query_as::<_, Shift>(
        r#"
        SELECT s.shift_id, s.shift_type, s.shift_time
        FROM shifts s
        JOIN employee_shifts es ON s.shift_id = es.shift_id
        WHERE es.employee_id = $1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    shift_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO employee_shifts (employee_id, shift_id) VALUES ($1, $2)")
        .bind(employee_id)
        .bind(shift_id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn delete_for_employee<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employee_shifts WHERE employee_id = $1")
        .bind(employee_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn count_for_shift<'e, E: PgExecutor<'e>>(db: E, shift_id: i32) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*)::int8 FROM employee_shifts WHERE shift_id = $1")
        .bind(shift_id)
        .fetch_one(db)
        .await
}
