use super::models::ErrorBody;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_BODY: &str = "Invalid request body";
pub const DATABASE_ERROR: &str = "Database error";

/// Failures a request handler can end in. Each maps to one status code and
/// an `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is absent or falsy (400)
    #[error("{0}")]
    Validation(&'static str),
    /// A lookup by id matched no rows (404)
    #[error("{0}")]
    NotFound(&'static str),
    /// The body could not be read as JSON of the expected shape (400)
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
    /// Anything the database driver returned (500, details withheld)
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => *message,
            ApiError::MalformedBody(_) => INVALID_BODY,
            ApiError::Database(_) => DATABASE_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(err) => tracing::error!("Database error: {err}"),
            ApiError::MalformedBody(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
            }
            ApiError::Validation(_) | ApiError::NotFound(_) => {}
        }

        let body = Json(ErrorBody {
            error: self.public_message().to_string(),
        });

        (self.status(), body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
