use sqlx::PgExecutor;

use crate::models::{LeaveRecord, ValidLeave};

const LEAVE_COLUMNS: &str =
    "leave_id, employee_id, leave_type, duration, start_date, end_date, status";

pub async fn list_all<'e, E: PgExecutor<'e>>(db: E) -> Result<Vec<LeaveRecord>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM leave_records ORDER BY start_date DESC, leave_id DESC",
        LEAVE_COLUMNS
    );
    sqlx::query_as::<_, LeaveRecord>(&sql).fetch_all(db).await
}

pub async fn list_for_employee<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<Vec<LeaveRecord>, sqlx::Error> {
    let sql = format!(
        "SELECT {} FROM leave_records WHERE employee_id = $1 ORDER BY start_date DESC, leave_id DESC",
        LEAVE_COLUMNS
    );
    sqlx::query_as::<_, LeaveRecord>(&sql)
        .bind(employee_id)
        .fetch_all(db)
        .await
}

pub async fn find<'e, E: PgExecutor<'e>>(
    db: E,
    leave_id: i32,
) -> Result<Option<LeaveRecord>, sqlx::Error> {
    let sql = format!("SELECT {} FROM leave_records WHERE leave_id = $1", LEAVE_COLUMNS);
    sqlx::query_as::<_, LeaveRecord>(&sql)
        .bind(leave_id)
        .fetch_optional(db)
        .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    leave: &ValidLeave<'_>,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO leave_records (employee_id, leave_type, duration, start_date, end_date, status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING leave_id
        "#,
    )
    .bind(employee_id)
    .bind(leave.leave_type)
    .bind(leave.duration)
    .bind(leave.start_date)
    .bind(leave.end_date)
    .bind(leave.status)
    .fetch_one(db)
    .await
}

/// Overwrites every editable column of the record.
pub async fn replace<'e, E: PgExecutor<'e>>(
    db: E,
    leave_id: i32,
    leave: &ValidLeave<'_>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE leave_records
        SET leave_type = $1, duration = $2, start_date = $3, end_date = $4, status = $5
        WHERE leave_id = $6
        "#,
    )
    .bind(leave.leave_type)
    .bind(leave.duration)
    .bind(leave.start_date)
    .bind(leave.end_date)
    .bind(leave.status)
    .bind(leave_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, leave_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM leave_records WHERE leave_id = $1")
        .bind(leave_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
