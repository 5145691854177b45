use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::AppState;

pub const METRICS_KEY_HEADER: &str = "X-Metrics-Key";

/// Guards the metrics endpoint when `METRICS_KEY` is configured
pub async fn require_metrics_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(expected_key) = state.config.metrics_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let provided_key = request
        .headers()
        .get(METRICS_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if expected_key.as_bytes().ct_eq(provided_key.as_bytes()).into() {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Rejected metrics scrape with wrong key");
        Err(StatusCode::UNAUTHORIZED)
    }
}
