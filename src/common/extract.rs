use super::errors::ApiError;
use axum::extract::FromRequest;

/// `axum::Json` with rejections reported as `{"error": ...}` bodies.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
