use axum::extract::FromRequest;

use crate::AppError;

/// JSON request body whose rejections use the API's `{"error": ...}` shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
