use sqlx::{PgConnection, PgExecutor};

use super::{PartialUpdate, UpdateOutcome};
use crate::models::{Shift, UpdateShiftInput};

pub async fn list<'e, E: PgExecutor<'e>>(db: E) -> Result<Vec<Shift>, sqlx::Error> {
    sqlx::query_as::<_, Shift>(
        "SELECT shift_id, shift_type, shift_time FROM shifts ORDER BY shift_type, shift_time",
    )
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(db: E, shift_id: i32) -> Result<Option<Shift>, sqlx::Error> {
    sqlx::query_as::<_, Shift>(
        "SELECT shift_id, shift_type, shift_time FROM shifts WHERE shift_id = $1",
    )
    .bind(shift_id)
    .fetch_optional(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    shift_type: &str,
    shift_time: Option<&str>,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO shifts (shift_type, shift_time) VALUES ($1, $2) RETURNING shift_id",
    )
    .bind(shift_type)
    .bind(shift_time)
    .fetch_one(db)
    .await
}

pub async fn update<'e, E: PgExecutor<'e>>(
    db: E,
    shift_id: i32,
    input: &UpdateShiftInput,
) -> Result<UpdateOutcome, sqlx::Error> {
    let mut update = PartialUpdate::new("shifts");
    update
        .set_if("shift_type", input.shift_type.as_deref().map(str::trim))
        .set_if("shift_time", input.shift_time.as_ref().map(|v| v.as_deref()));

    update.execute(db, "shift_id", shift_id).await
}

pub async fn lock(conn: &mut PgConnection, shift_id: i32) -> Result<bool, sqlx::Error> {
    let row: Option<i32> =
        sqlx::query_scalar("SELECT shift_id FROM shifts WHERE shift_id = $1 FOR UPDATE")
            .bind(shift_id)
            .fetch_optional(conn)
            .await?;

    Ok(row.is_some())
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, shift_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM shifts WHERE shift_id = $1")
        .bind(shift_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
