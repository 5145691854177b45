//! Fixtures for database-backed and handler tests

use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    db::{
        departments,
        employees::{self, NewEmployee},
        roles, shifts,
    },
    handlers::metrics::detached_metrics_state,
    AppConfig, AppState,
};

pub const PIN_SECRET: &str = "test_department_pin_secret";

/// Application state for handler tests; no global metrics recorder is installed.
pub fn state_parts(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        config: AppConfig {
            database_url: String::new(),
            bind_addr: ([127, 0, 0, 1], 0).into(),
            db_max_connections: 1,
            department_pin_secret: PIN_SECRET.to_string(),
            cors_allowed_origin: None,
            metrics_key: None,
        },
        metrics: Arc::new(detached_metrics_state()),
    }
}

pub fn app_state(pool: PgPool) -> Arc<AppState> {
    Arc::new(state_parts(pool))
}

pub async fn department(pool: &PgPool, name: &str) -> i32 {
    departments::insert(pool, name, None, "0011$00").await.unwrap()
}

pub async fn role(pool: &PgPool, name: &str) -> i32 {
    roles::insert(pool, name, None).await.unwrap()
}

pub async fn shift(pool: &PgPool, shift_type: &str) -> i32 {
    shifts::insert(pool, shift_type, Some("07:00-19:00")).await.unwrap()
}

pub async fn employee(pool: &PgPool, unique_id: &str, department_id: Option<i32>) {
    employees::insert(
        pool,
        &NewEmployee {
            unique_id,
            name: "Test Employee",
            email_id: None,
            contact_number: None,
            department_id,
        },
    )
    .await
    .unwrap();
}
