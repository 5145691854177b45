use sqlx::PgExecutor;

use super::{PartialUpdate, UpdateOutcome};
use crate::models::{Qualification, UpdateQualificationInput};

pub async fn list_for_employee<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<Vec<Qualification>, sqlx::Error> {
    sqlx::query_as::<_, Qualification>(
        r#"
        SELECT qualification_id, employee_id, degree, institution, year_awarded
        FROM qualifications
        WHERE employee_id = $1
        ORDER BY year_awarded DESC NULLS LAST, qualification_id
        "#,
    )
    .bind(employee_id)
    .fetch_all(db)
    .await
}

pub async fn find<'e, E: PgExecutor<'e>>(
    db: E,
    qualification_id: i32,
) -> Result<Option<Qualification>, sqlx::Error> {
    sqlx::query_as::<_, Qualification>(
        r#"
        SELECT qualification_id, employee_id, degree, institution, year_awarded
        FROM qualifications
        WHERE qualification_id = $1
        "#,
    )
    .bind(qualification_id)
    .fetch_optional(db)
    .await
}

pub async fn insert<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    degree: &str,
    institution: Option<&str>,
    year_awarded: Option<i32>,
) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO qualifications (employee_id, degree, institution, year_awarded)
        VALUES ($1, $2, $3, $4)
        RETURNING qualification_id
        "#,
    )
    .bind(employee_id)
    .bind(degree)
    .bind(institution)
    .bind(year_awarded)
    .fetch_one(db)
    .await
}

pub async fn update<'e, E: PgExecutor<'e>>(
    db: E,
    qualification_id: i32,
    input: &UpdateQualificationInput,
) -> Result<UpdateOutcome, sqlx::Error> {
    let mut update = PartialUpdate::new("qualifications");
    update
        .set_if("degree", input.degree.as_deref().map(str::trim))
        .set_if("institution", input.institution.as_ref().map(|v| v.as_deref()))
        .set_if("year_awarded", input.year_awarded);

    update.execute(db, "qualification_id", qualification_id).await
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, qualification_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM qualifications WHERE qualification_id = $1")
        .bind(qualification_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
