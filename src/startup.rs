use axum::{
    http::{header, Method},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    handlers,
    middleware::{metrics_middleware, request_id_middleware, require_metrics_key},
    openapi::ApiDoc,
    AppState,
};

fn cors_layer(state: &AppState) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    match &state.config.cors_allowed_origin {
        Some(origin) => cors.allow_origin(origin.clone()),
        None => cors.allow_origin(Any),
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state);

    // Employee routes, including role and shift assignment
    let employee_routes = Router::new()
        .route("/", get(handlers::employees_handler::get_employees))
        .route("/", post(handlers::employees_handler::create_employee))
        .route("/{id}", get(handlers::employees_handler::get_employee))
        .route("/{id}", put(handlers::employees_handler::update_employee))
        .route("/{id}", delete(handlers::employees_handler::delete_employee))
        .route("/{id}/archive", put(handlers::employees_handler::archive_employee))
        .route("/{id}/toggle-duty", put(handlers::employees_handler::toggle_duty))
        .route("/{id}/shift", put(handlers::employees_handler::update_legacy_shift))
        .route("/{id}/roles", get(handlers::employee_roles_handler::get_employee_roles))
        .route("/{id}/roles", post(handlers::employee_roles_handler::assign_employee_roles))
        .route("/{id}/roles", put(handlers::employee_roles_handler::update_employee_roles))
        .route(
            "/{id}/roles/{role_id}",
            delete(handlers::employee_roles_handler::remove_employee_role),
        )
        .route("/{id}/shifts", get(handlers::employee_shifts_handler::get_employee_shift))
        .route("/{id}/shifts", post(handlers::employee_shifts_handler::assign_employee_shift))
        .route("/{id}/shifts", put(handlers::employee_shifts_handler::update_employee_shift));

    // Department routes
    let department_routes = Router::new()
        .route("/", get(handlers::departments_handler::get_departments))
        .route("/", post(handlers::departments_handler::create_department))
        .route("/{id}", get(handlers::departments_handler::get_department))
        .route("/{id}", put(handlers::departments_handler::update_department))
        .route("/{id}", delete(handlers::departments_handler::delete_department))
        .route(
            "/{id}/verify-password",
            post(handlers::departments_handler::verify_department_password),
        )
        .route(
            "/{id}/employees",
            get(handlers::departments_handler::get_department_employees),
        );

    // Role routes
    let role_routes = Router::new()
        .route("/", get(handlers::roles_handler::get_roles))
        .route("/", post(handlers::roles_handler::create_role))
        .route("/{id}", get(handlers::roles_handler::get_role))
        .route("/{id}", put(handlers::roles_handler::update_role))
        .route("/{id}", delete(handlers::roles_handler::delete_role));

    // Shift routes
    let shift_routes = Router::new()
        .route("/", get(handlers::shifts_handler::get_shifts))
        .route("/", post(handlers::shifts_handler::create_shift))
        .route("/{id}", get(handlers::shifts_handler::get_shift))
        .route("/{id}", put(handlers::shifts_handler::update_shift))
        .route("/{id}", delete(handlers::shifts_handler::delete_shift));

    // Qualification routes
    let qualification_routes = Router::new()
        .route(
            "/employees/{employee_id}",
            get(handlers::qualifications_handler::get_employee_qualifications),
        )
        .route(
            "/employees/{employee_id}",
            post(handlers::qualifications_handler::create_qualification),
        )
        .route("/{id}", get(handlers::qualifications_handler::get_qualification))
        .route("/{id}", put(handlers::qualifications_handler::update_qualification))
        .route("/{id}", delete(handlers::qualifications_handler::delete_qualification));

    // Salary routes
    let salary_routes = Router::new()
        .route(
            "/employees/{employee_id}",
            get(handlers::salary_handler::get_employee_salary),
        )
        .route("/employees/{employee_id}", post(handlers::salary_handler::create_salary))
        .route("/{employee_id}", get(handlers::salary_handler::get_salary))
        .route("/{employee_id}", put(handlers::salary_handler::upsert_salary))
        .route("/{employee_id}", delete(handlers::salary_handler::delete_salary));

    // Leave routes
    let leave_routes = Router::new()
        .route("/", get(handlers::leave_handler::get_all_leave))
        .route(
            "/employees/{employee_id}",
            get(handlers::leave_handler::get_employee_leave),
        )
        .route("/employees/{employee_id}", post(handlers::leave_handler::apply_leave))
        .route("/{id}", get(handlers::leave_handler::get_leave))
        .route("/{id}", put(handlers::leave_handler::update_leave))
        .route("/{id}", delete(handlers::leave_handler::delete_leave));

    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_metrics_key,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/employees", employee_routes)
        .nest("/api/departments", department_routes)
        .nest("/api/roles", role_routes)
        .nest("/api/shifts", shift_routes)
        .nest("/api/qualifications", qualification_routes)
        .nest("/api/salary", salary_routes)
        .nest("/api/leave", leave_routes)
        .merge(metrics_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .with_state(state)
}
