use sqlx::PgExecutor;

use crate::models::Role;

pub async fn list_roles<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        r#"
        SELECT r.role_id, r.role_name, r.role_type
        FROM roles r
        JOIN employee_roles er ON r.role_id = er.role_id
        WHERE er.employee_id = $1
        ORDER BY r.role_name
        "#,
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    role_id: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO employee_roles (employee_id, role_id) VALUES ($1, $2)")
        .bind(employee_id)
        .bind(role_id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn delete_all<'e, E: PgExecutor<'e>>(db: E, employee_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employee_roles WHERE employee_id = $1")
        .bind(employee_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn remove<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    role_id: i32,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employee_roles WHERE employee_id = $1 AND role_id = $2")
        .bind(employee_id)
        .bind(role_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}

pub async fn count_for_role<'e, E: PgExecutor<'e>>(db: E, role_id: i32) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*)::int8 FROM employee_roles WHERE role_id = $1")
        .bind(role_id)
        .fetch_one(db)
        .await
}
