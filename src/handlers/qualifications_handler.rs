use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::{reject_blank, require_updated};
use crate::{
    db::qualifications,
    extractors::AppJson,
    models::{
        patch::required_text, MessageResponse, Qualification, QualificationCreatedResponse,
        QualificationInput, UpdateQualificationInput,
    },
    AppError, AppResult, AppState,
};

/// GET /api/qualifications/employees/{employee_id}
#[utoipa::path(
    get,
    path = "/api/qualifications/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    responses(
        (status = 200, description = "Qualifications, most recent first", body = Vec<Qualification>)
    ),
    tag = "qualifications"
)]
pub async fn get_employee_qualifications(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Qualification>>> {
    let qualifications = qualifications::list_for_employee(&state.db, &employee_id).await?;
    Ok(Json(qualifications))
}

/// GET /api/qualifications/{id}
#[utoipa::path(
    get,
    path = "/api/qualifications/{id}",
    params(
        ("id" = i32, Path, description = "Qualification ID")
    ),
    responses(
        (status = 200, description = "Qualification", body = Qualification),
        (status = 404, description = "Qualification not found")
    ),
    tag = "qualifications"
)]
pub async fn get_qualification(
    State(state): State<Arc<AppState>>,
    Path(qualification_id): Path<i32>,
) -> AppResult<Json<Qualification>> {
    let qualification = qualifications::find(&state.db, qualification_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Qualification not found".to_string()))?;

    Ok(Json(qualification))
}

/// POST /api/qualifications/employees/{employee_id}
#[utoipa::path(
    post,
    path = "/api/qualifications/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee unique_id")
    ),
    request_body = QualificationInput,
    responses(
        (status = 200, description = "Qualification added successfully", body = QualificationCreatedResponse),
        (status = 400, description = "Degree is required, or the employee does not exist")
    ),
    tag = "qualifications"
)]
pub async fn create_qualification(
    State(state): State<Arc<AppState>>,
    Path(employee_id): Path<String>,
    AppJson(input): AppJson<QualificationInput>,
) -> AppResult<Json<QualificationCreatedResponse>> {
    let degree = required_text(input.degree.as_deref())
        .ok_or_else(|| AppError::BadRequest("Degree is required".to_string()))?;

    let qualification_id = qualifications::insert(
        &state.db,
        &employee_id,
        degree,
        input.institution.as_deref(),
        input.year_awarded,
    )
    .await?;

    tracing::info!(employee_id = %employee_id, qualification_id, "Qualification added");

    Ok(Json(QualificationCreatedResponse {
        message: "Qualification added successfully".to_string(),
        qualification_id,
    }))
}

/// PUT /api/qualifications/{id}
#[utoipa::path(
    put,
    path = "/api/qualifications/{id}",
    params(
        ("id" = i32, Path, description = "Qualification ID")
    ),
    request_body = UpdateQualificationInput,
    responses(
        (status = 200, description = "Qualification updated successfully", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Qualification not found")
    ),
    tag = "qualifications"
)]
pub async fn update_qualification(
    State(state): State<Arc<AppState>>,
    Path(qualification_id): Path<i32>,
    AppJson(input): AppJson<UpdateQualificationInput>,
) -> AppResult<Json<MessageResponse>> {
    reject_blank(input.degree.as_deref(), "Degree cannot be empty")?;

    let outcome = qualifications::update(&state.db, qualification_id, &input).await?;
    require_updated(outcome, "Qualification not found")?;

    tracing::info!(qualification_id, "Qualification updated");
    Ok(Json(MessageResponse::new("Qualification updated successfully")))
}

/// DELETE /api/qualifications/{id}
#[utoipa::path(
    delete,
    path = "/api/qualifications/{id}",
    params(
        ("id" = i32, Path, description = "Qualification ID")
    ),
    responses(
        (status = 200, description = "Qualification deleted successfully", body = MessageResponse),
        (status = 404, description = "Qualification not found")
    ),
    tag = "qualifications"
)]
pub async fn delete_qualification(
    State(state): State<Arc<AppState>>,
    Path(qualification_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    if qualifications::delete(&state.db, qualification_id).await? == 0 {
        return Err(AppError::NotFound("Qualification not found".to_string()));
    }

    tracing::info!(qualification_id, "Qualification deleted");
    Ok(Json(MessageResponse::new("Qualification deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_qualification_lifecycle(pool: PgPool) {
        test_support::employee(&pool, "E1", None).await;
        let state = test_support::app_state(pool);

        for (degree, year) in [("BSc Nursing", 2012), ("MSc Critical Care", 2018)] {
            let input = QualificationInput {
                degree: Some(degree.to_string()),
                institution: None,
                year_awarded: Some(year),
            };
            let Json(created) =
                create_qualification(State(state.clone()), Path("E1".to_string()), AppJson(input))
                    .await
                    .unwrap();
            assert_eq!(created.message, "Qualification added successfully");
        }

        let Json(listed) = get_employee_qualifications(State(state.clone()), Path("E1".to_string()))
            .await
            .unwrap();
        assert_eq!(listed[0].degree, "MSc Critical Care");

        let id = listed[1].qualification_id;
        let clear_year: UpdateQualificationInput =
            serde_json::from_str(r#"{"year_awarded": null}"#).unwrap();
        let Json(response) = update_qualification(State(state.clone()), Path(id), AppJson(clear_year))
            .await
            .unwrap();
        assert_eq!(response.message, "Qualification updated successfully");
        let Json(updated) = get_qualification(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(updated.year_awarded, None);

        let Json(deleted) = delete_qualification(State(state.clone()), Path(id)).await.unwrap();
        assert_eq!(deleted.message, "Qualification deleted successfully");
        assert!(matches!(
            delete_qualification(State(state), Path(id)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_qualification_for_unknown_employee_is_rejected(pool: PgPool) {
        let state = test_support::app_state(pool);
        let input = QualificationInput {
            degree: Some("MBBS".to_string()),
            ..Default::default()
        };

        let err = create_qualification(State(state), Path("ghost".to_string()), AppJson(input))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Employee does not exist"));
    }
}
