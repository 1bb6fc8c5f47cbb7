use super::models::{self, Model as User, UserCreate};
use crate::common::errors::{ApiError, ApiResult};
use crate::common::extract::JsonBody;
use crate::common::models::ErrorBody;
use crate::common::state::AppState;
use crate::common::validation::parse_id;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use utoipa_axum::{router::OpenApiRouter, routes};

pub fn router(state: &AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(create_user, list_users))
        .routes(routes!(get_user))
        .with_state(state.clone())
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserCreate,
    responses(
        (status = CREATED, description = "User added", body = str, content_type = "text/plain"),
        (status = BAD_REQUEST, description = "Name is required", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserCreate>,
) -> ApiResult<(StatusCode, &'static str)> {
    let user = payload.into_active_model()?;
    models::insert(&state.db, user).await?;
    Ok((StatusCode::CREATED, "User added"))
}

/// Get all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = OK, description = "Every stored user", body = Vec<User>),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(models::list(&state.db).await?))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = OK, description = "The matching row", body = Vec<User>),
        (status = NOT_FOUND, description = "User not found", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<User>>> {
    let rows = match parse_id(&id) {
        Some(id) => models::find_by_id(&state.db, id).await?,
        None => Vec::new(),
    };
    if rows.is_empty() {
        return Err(ApiError::NotFound("User not found"));
    }
    Ok(Json(rows))
}
