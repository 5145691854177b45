use rust_decimal::Decimal;
use sqlx::PgExecutor;

use crate::models::Salary;

pub async fn find_for_employee<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
) -> Result<Option<Salary>, sqlx::Error> {
    sqlx::query_as::<_, Salary>(
        "SELECT employee_id, base_salary, bonus, pay_grade FROM salary WHERE employee_id = $1",
    )
    .bind(employee_id)
    .fetch_optional(db)
    .await
}

/// Inserts the salary row unless one exists. Returns `false` when the employee
/// already had a salary.
pub async fn insert_if_absent<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    base_salary: Decimal,
    bonus: Decimal,
    pay_grade: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let inserted: Option<String> = sqlx::query_scalar(
        r#"
        INSERT INTO salary (employee_id, base_salary, bonus, pay_grade)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (employee_id) DO NOTHING
        RETURNING employee_id
        "#,
    )
    .bind(employee_id)
    .bind(base_salary)
    .bind(bonus)
    .bind(pay_grade)
    .fetch_optional(db)
    .await?;

    Ok(inserted.is_some())
}

pub async fn upsert<'e, E: PgExecutor<'e>>(
    db: E,
    employee_id: &str,
    base_salary: Decimal,
    bonus: Decimal,
    pay_grade: Option<&str>,
) -> Result<Salary, sqlx::Error> {
    sqlx::query_as::<_, Salary>(
        r#"
        INSERT INTO salary (employee_id, base_salary, bonus, pay_grade)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (employee_id) DO UPDATE
        SET base_salary = EXCLUDED.base_salary,
            bonus = EXCLUDED.bonus,
            pay_grade = EXCLUDED.pay_grade
        RETURNING employee_id, base_salary, bonus, pay_grade
        "#,
    )
    .bind(employee_id)
    .bind(base_salary)
    .bind(bonus)
    .bind(pay_grade)
    .fetch_one(db)
    .await
}

pub async fn delete<'e, E: PgExecutor<'e>>(db: E, employee_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM salary WHERE employee_id = $1")
        .bind(employee_id)
        .execute(db)
        .await?;

    Ok(result.rows_affected())
}
