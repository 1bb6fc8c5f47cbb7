use super::models::{self, ItemPayload, Model as Item};
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
        .routes(routes!(create_item, list_items))
        .routes(routes!(get_item, update_item, delete_item))
        .with_state(state.clone())
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = CREATED, description = "Item added", body = str, content_type = "text/plain"),
        (status = BAD_REQUEST, description = "A required field is missing or zero", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ApiResult<(StatusCode, &'static str)> {
    let item = payload.into_new_item()?;
    models::insert(&state.db, item).await?;
    Ok((StatusCode::CREATED, "Item added"))
}

/// Get all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = OK, description = "Every stored item", body = Vec<Item>),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "items"
)]
pub async fn list_items(State(state): State<AppState>) -> ApiResult<Json<Vec<Item>>> {
    Ok(Json(models::list(&state.db).await?))
}

/// Get a single item
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = OK, description = "The matching row", body = Vec<Item>),
        (status = NOT_FOUND, description = "Item not found", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Item>>> {
    let rows = match parse_id(&id) {
        Some(id) => models::find_by_id(&state.db, id).await?,
        None => Vec::new(),
    };
    if rows.is_empty() {
        return Err(ApiError::NotFound("Item not found"));
    }
    Ok(Json(rows))
}

/// Overwrite all columns of an item. Unknown ids are not reported.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = OK, description = "Item updated", body = str, content_type = "text/plain"),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ApiResult<&'static str> {
    if let Some(id) = parse_id(&id) {
        let affected = models::update(&state.db, id, payload.into_replacement()).await?;
        tracing::debug!(item_id = id, affected, "Item update applied");
    }
    Ok("Item updated")
}

/// Delete an item. Deleting an unknown id still succeeds.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = OK, description = "Item deleted", body = str, content_type = "text/plain"),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<&'static str> {
    if let Some(id) = parse_id(&id) {
        let affected = models::delete(&state.db, id).await?;
        tracing::debug!(item_id = id, affected, "Item delete applied");
    }
    Ok("Item deleted")
}
