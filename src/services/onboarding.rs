use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    db::{
        employee_roles, employee_shifts,
        employees::{self, NewEmployee},
        qualifications, salary, UnitOfWork,
    },
    models::{patch::required_text, CreateEmployeeInput},
    AppError, AppResult,
};

#[derive(Debug)]
struct NewQualification<'a> {
    degree: &'a str,
    institution: Option<&'a str>,
    year_awarded: Option<i32>,
}

#[derive(Debug)]
struct NewSalary<'a> {
    base_salary: Decimal,
    bonus: Decimal,
    pay_grade: Option<&'a str>,
}

/// Everything inserted for a new hire, checked up front
#[derive(Debug)]
struct OnboardingPlan<'a> {
    employee: NewEmployee<'a>,
    roles: &'a [i32],
    qualification: Option<NewQualification<'a>>,
    salary: Option<NewSalary<'a>>,
    shift_id: Option<i32>,
}

fn optional_text(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn plan(input: &CreateEmployeeInput) -> AppResult<OnboardingPlan<'_>> {
    let unique_id = required_text(input.unique_id.as_deref())
        .ok_or_else(|| AppError::BadRequest("Employee unique_id is required".to_string()))?;
    let name = required_text(input.name.as_deref())
        .ok_or_else(|| AppError::BadRequest("Employee name is required".to_string()))?;

    let qualification = input
        .qualification
        .as_ref()
        .map(|q| {
            let degree = required_text(q.degree.as_deref())
                .ok_or_else(|| AppError::BadRequest("Degree is required".to_string()))?;
            Ok::<_, AppError>(NewQualification {
                degree,
                institution: optional_text(q.institution.as_deref()),
                year_awarded: q.year_awarded,
            })
        })
        .transpose()?;

    let salary = input
        .salary
        .as_ref()
        .map(|s| {
            let base_salary = s
                .base_salary
                .ok_or_else(|| AppError::BadRequest("Base salary is required".to_string()))?;
            Ok::<_, AppError>(NewSalary {
                base_salary,
                bonus: s.bonus.unwrap_or(Decimal::ZERO),
                pay_grade: optional_text(s.pay_grade.as_deref()),
            })
        })
        .transpose()?;

    Ok(OnboardingPlan {
        employee: NewEmployee {
            unique_id,
            name,
            email_id: optional_text(input.email_id.as_deref()),
            contact_number: optional_text(input.contact_number.as_deref()),
            department_id: input.department_id,
        },
        roles: &input.roles,
        qualification,
        salary,
        shift_id: input.shift.as_ref().map(|s| s.shift_id),
    })
}

/// Creates an employee with roles, qualification, salary and shift in one
/// transaction. Any failing insert rolls the whole hire back.
pub async fn create_employee(pool: &PgPool, input: &CreateEmployeeInput) -> AppResult<String> {
    let plan = plan(input)?;
    let unique_id = plan.employee.unique_id;

    let mut uow = UnitOfWork::begin(pool, "onboard_employee").await?;

    employees::insert(uow.conn(), &plan.employee).await?;

    for role_id in plan.roles {
        employee_roles::insert(uow.conn(), unique_id, *role_id).await?;
    }

    if let Some(q) = &plan.qualification {
        qualifications::insert(uow.conn(), unique_id, q.degree, q.institution, q.year_awarded)
            .await?;
    }

    if let Some(s) = &plan.salary {
        salary::upsert(uow.conn(), unique_id, s.base_salary, s.bonus, s.pay_grade).await?;
    }

    if let Some(shift_id) = plan.shift_id {
        employee_shifts::insert(uow.conn(), unique_id, shift_id).await?;
    }

    uow.commit().await?;

    tracing::info!(
        employee_id = %unique_id,
        roles = plan.roles.len(),
        qualification = plan.qualification.is_some(),
        salary = plan.salary.is_some(),
        shift = ?plan.shift_id,
        "Employee onboarded"
    );

    Ok(unique_id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{employee_roles, employees},
        models::{QualificationInput, SalaryInput, ShiftSelection},
        services::{profile, test_support},
    };

    fn input(json: serde_json::Value) -> CreateEmployeeInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_plan_requires_id_and_name() {
        let missing_id = input(serde_json::json!({ "name": "Ann" }));
        assert!(matches!(plan(&missing_id), Err(AppError::BadRequest(_))));

        let blank_name = input(serde_json::json!({ "unique_id": "E1", "name": "  " }));
        assert!(matches!(plan(&blank_name), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_plan_defaults_bonus_and_trims_fields() {
        let payload = input(serde_json::json!({
            "unique_id": " E1 ",
            "name": "Ann Perkins",
            "email_id": "",
            "roles": [2, 1],
            "salary": { "base_salary": 52000, "pay_grade": "B3" },
            "shift": { "shift_id": 4 }
        }));

        let plan = plan(&payload).unwrap();
        assert_eq!(plan.employee.unique_id, "E1");
        assert_eq!(plan.employee.email_id, None);
        assert_eq!(plan.roles, &[2, 1]);
        let salary = plan.salary.unwrap();
        assert_eq!(salary.bonus, Decimal::ZERO);
        assert_eq!(salary.base_salary, Decimal::from(52000));
        assert_eq!(plan.shift_id, Some(4));
    }

    #[test]
    fn test_plan_rejects_incomplete_related_records() {
        let payload = CreateEmployeeInput {
            unique_id: Some("E1".to_string()),
            name: Some("Ann".to_string()),
            qualification: Some(QualificationInput::default()),
            ..Default::default()
        };
        assert!(matches!(plan(&payload), Err(AppError::BadRequest(msg)) if msg == "Degree is required"));

        let payload = CreateEmployeeInput {
            unique_id: Some("E1".to_string()),
            name: Some("Ann".to_string()),
            salary: Some(SalaryInput::default()),
            ..Default::default()
        };
        assert!(
            matches!(plan(&payload), Err(AppError::BadRequest(msg)) if msg == "Base salary is required")
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_onboarding_creates_whole_aggregate(pool: PgPool) {
        let department = test_support::department(&pool, "Cardiology").await;
        let nurse = test_support::role(&pool, "Nurse").await;
        let night = test_support::shift(&pool, "Night").await;

        let payload = CreateEmployeeInput {
            unique_id: Some("E1".to_string()),
            name: Some("Ann Perkins".to_string()),
            department_id: Some(department),
            roles: vec![nurse],
            qualification: Some(QualificationInput {
                degree: Some("BSc Nursing".to_string()),
                institution: Some("Pawnee College".to_string()),
                year_awarded: Some(2015),
            }),
            salary: Some(SalaryInput {
                base_salary: Some(Decimal::from(42000)),
                ..Default::default()
            }),
            shift: Some(ShiftSelection { shift_id: night }),
            ..Default::default()
        };

        let id = create_employee(&pool, &payload).await.unwrap();
        let profile = profile::load(&pool, &id).await.unwrap();

        assert!(profile.employee.is_active);
        assert!(!profile.employee.is_on_duty);
        assert_eq!(profile.employee.department_name.as_deref(), Some("Cardiology"));
        assert_eq!(profile.roles.len(), 1);
        assert_eq!(profile.qualifications.len(), 1);
        assert_eq!(profile.salary.unwrap().bonus, Decimal::ZERO);
        assert_eq!(profile.shift.unwrap().shift_id, night);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_failed_related_insert_rolls_back_employee(pool: PgPool) {
        let nurse = test_support::role(&pool, "Nurse").await;

        let payload = CreateEmployeeInput {
            unique_id: Some("E2".to_string()),
            name: Some("Ben Wyatt".to_string()),
            roles: vec![nurse, 9_999],
            ..Default::default()
        };

        let err = create_employee(&pool, &payload).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Role does not exist"));

        assert!(employees::find(&pool, "E2").await.unwrap().is_none());
        assert!(employee_roles::list_roles(&pool, "E2").await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_duplicate_unique_id_is_a_conflict(pool: PgPool) {
        test_support::employee(&pool, "E3", None).await;

        let payload = CreateEmployeeInput {
            unique_id: Some("E3".to_string()),
            name: Some("Someone Else".to_string()),
            ..Default::default()
        };

        let err = create_employee(&pool, &payload).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_overlong_unique_id_is_a_bad_request(pool: PgPool) {
        let payload = CreateEmployeeInput {
            unique_id: Some("E".repeat(60)),
            name: Some("Ann Perkins".to_string()),
            ..Default::default()
        };

        let err = create_employee(&pool, &payload).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Value is too long for this field"));
    }
}
