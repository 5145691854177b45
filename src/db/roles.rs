use sqlx::{PgConnection, PgExecutor};

use super::{PartialUpdate, UpdateOutcome};
use crate::models::{Role, UpdateRoleInput};

pub async fn list<'e, E: PgExecutor<'e>>(db: E) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>("SELECT role_id, role_name, role_type FROM roles ORDER BY role_name")
        .fetch_all(db)
        .await
}

pub async fn find<'e, E: PgExecutor<'e>>(db: E, role_id: i32) -> Result<Option<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>("SELECT role_id, role_name, role_type FROM roles WHERE role_id = $1")
        .bind(role_id)
        .fetch_optional(db)
        .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    role_name: &str,
    role_type: Option<&str>,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar("INSERT INTO roles (role_name, role_type) VALUES ($1, $2) RETURNING role_id")
        .bind(role_name)
        .bind(role_type)
        .fetch_one(db)
        .await
}

pub async fn update<'e, E: PgExecutor<'e>>(
    db: E,
    role_id: i32,
    input: &UpdateRoleInput,
) -> Result<UpdateOutcome, sqlx::Error> {
    let mut update = PartialUpdate::new("roles");
    update
        .set_if("role_name", input.role_name.as_deref().map(str::trim))
        .set_if("role_type", input.role_type.as_ref().map(|v| v.as_deref()));

    update.execute(db, "role_id", role_id).await
}

pub async fn lock(conn: &mut PgConnection, role_id: i32) -> Result<bool, sqlx::Error> {
    let row: Option<i32> =
        sqlx::query_scalar("SELECT role_id FROM roles WHERE role_id = $1 FOR UPDATE")
            .bind(role_id)
            .fetch_optional(conn)
            .await?;

    Ok(row.is_some())
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, role_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM roles WHERE role_id = $1")
        .bind(role_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
