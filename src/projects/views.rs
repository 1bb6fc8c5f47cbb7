use super::models::{self, Model as Project, ProjectCreate};
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
        .routes(routes!(create_project, list_projects))
        .routes(routes!(get_project))
        .with_state(state.clone())
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects",
    request_body = ProjectCreate,
    responses(
        (status = CREATED, description = "Project added", body = str, content_type = "text/plain"),
        (status = BAD_REQUEST, description = "A required field is missing", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "projects"
)]
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ProjectCreate>,
) -> ApiResult<(StatusCode, &'static str)> {
    let project = payload.into_active_model()?;
    models::insert(&state.db, project).await?;
    Ok((StatusCode::CREATED, "Project added"))
}

/// Get all projects
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = OK, description = "Every stored project", body = Vec<Project>),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "projects"
)]
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(models::list(&state.db).await?))
}

/// Get a single project, wrapped in a one-element array
#[utoipa::path(
    get,
    path = "/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = OK, description = "The matching row", body = Vec<Project>),
        (status = NOT_FOUND, description = "Project not found", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Project>>> {
    let rows = match parse_id(&id) {
        Some(id) => models::find_by_id(&state.db, id).await?,
        None => Vec::new(),
    };
    if rows.is_empty() {
        return Err(ApiError::NotFound("Project not found"));
    }
    Ok(Json(rows))
}
