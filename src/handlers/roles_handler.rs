use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use super::{reject_blank, require_updated};
use crate::{
    db::roles,
    extractors::AppJson,
    models::{
        patch::required_text, CreateRoleInput, MessageResponse, Role, RoleCreatedResponse,
        UpdateRoleInput,
    },
    services::deletion,
    AppError, AppResult, AppState,
};

/// GET /api/roles
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "All roles ordered by name", body = Vec<Role>)
    ),
    tag = "roles"
)]
pub async fn get_roles(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Role>>> {
    let roles = roles::list(&state.db).await?;
    Ok(Json(roles))
}

/// GET /api/roles/{id}
#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role", body = Role),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn get_role(
    State(state): State<Arc<AppState>>,
    Path(role_id): Path<i32>,
) -> AppResult<Json<Role>> {
    let role = roles::find(&state.db, role_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

    Ok(Json(role))
}

/// POST /api/roles - Create a new role
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleInput,
    responses(
        (status = 200, description = "Role created successfully", body = RoleCreatedResponse),
        (status = 400, description = "Role name is required")
    ),
    tag = "roles"
)]
pub async fn create_role(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateRoleInput>,
) -> AppResult<Json<RoleCreatedResponse>> {
    let role_name = required_text(input.role_name.as_deref())
        .ok_or_else(|| AppError::BadRequest("Role name is required".to_string()))?;

    let role_id = roles::insert(&state.db, role_name, input.role_type.as_deref()).await?;

    tracing::info!(role_id, role_name, "Role created");

    Ok(Json(RoleCreatedResponse {
        message: "Role created successfully".to_string(),
        role_id,
    }))
}

/// PUT /api/roles/{id} - Update a role
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    request_body = UpdateRoleInput,
    responses(
        (status = 200, description = "Role updated successfully", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn update_role(
    State(state): State<Arc<AppState>>,
    Path(role_id): Path<i32>,
    AppJson(input): AppJson<UpdateRoleInput>,
) -> AppResult<Json<MessageResponse>> {
    reject_blank(input.role_name.as_deref(), "Role name cannot be empty")?;

    let outcome = roles::update(&state.db, role_id, &input).await?;
    require_updated(outcome, "Role not found")?;

    tracing::info!(role_id, "Role updated");
    Ok(Json(MessageResponse::new("Role updated successfully")))
}

/// DELETE /api/roles/{id} - Delete a role no employee holds
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(
        ("id" = i32, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted successfully", body = MessageResponse),
        (status = 400, description = "Role is still assigned to employees"),
        (status = 404, description = "Role not found")
    ),
    tag = "roles"
)]
pub async fn delete_role(
    State(state): State<Arc<AppState>>,
    Path(role_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    deletion::delete_role(&state.db, role_id).await?;
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support;
    use sqlx::PgPool;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_create_role_scenario(pool: PgPool) {
        let state = test_support::app_state(pool);

        let err = create_role(
            State(state.clone()),
            AppJson(CreateRoleInput {
                role_name: Some(String::new()),
                role_type: None,
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Role name is required"));

        let Json(created) = create_role(
            State(state.clone()),
            AppJson(CreateRoleInput {
                role_name: Some("Nurse".to_string()),
                role_type: Some("Clinical".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(created.message, "Role created successfully");

        let Json(role) = get_role(State(state), Path(created.role_id)).await.unwrap();
        assert_eq!(role.role_name, "Nurse");
        assert_eq!(role.role_type.as_deref(), Some("Clinical"));
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL DATABASE_URL"]
    async fn test_update_role_clears_type_and_reports_missing(pool: PgPool) {
        let role_id = test_support::role(&pool, "Porter").await;
        let state = test_support::app_state(pool);

        let clear_type: UpdateRoleInput = serde_json::from_str(r#"{"role_type": null}"#).unwrap();
        let Json(updated) = update_role(State(state.clone()), Path(role_id), AppJson(clear_type))
            .await
            .unwrap();
        assert_eq!(updated.message, "Role updated successfully");

        let Json(role) = get_role(State(state.clone()), Path(role_id)).await.unwrap();
        assert_eq!(role.role_type, None);

        let err = update_role(State(state.clone()), Path(role_id), AppJson(UpdateRoleInput::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let rename = UpdateRoleInput {
            role_name: Some("Orderly".to_string()),
            ..Default::default()
        };
        let err = update_role(State(state), Path(role_id + 1), AppJson(rename))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
