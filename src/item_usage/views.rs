use super::models::{self, ItemUsageCreate, Model as ItemUsage};
use crate::common::errors::ApiResult;
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
        .routes(routes!(record_item_usage))
        .routes(routes!(list_item_usage))
        .with_state(state.clone())
}

/// Track item usage
#[utoipa::path(
    post,
    path = "/item-usage",
    request_body = ItemUsageCreate,
    responses(
        (status = CREATED, description = "Item usage recorded", body = str, content_type = "text/plain"),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "item-usage"
)]
pub async fn record_item_usage(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ItemUsageCreate>,
) -> ApiResult<(StatusCode, &'static str)> {
    models::insert(&state.db, payload.into()).await?;
    Ok((StatusCode::CREATED, "Item usage recorded"))
}

/// Get usage history for an item. An item without history yields `[]`.
#[utoipa::path(
    get,
    path = "/item-usage/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = OK, description = "Usage rows of the item", body = Vec<ItemUsage>),
        (status = INTERNAL_SERVER_ERROR, description = "Database error", body = ErrorBody)
    ),
    tag = "item-usage"
)]
pub async fn list_item_usage(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<Vec<ItemUsage>>> {
    let rows = match parse_id(&item_id) {
        Some(item_id) => models::list_for_item(&state.db, item_id).await?,
        None => Vec::new(),
    };
    Ok(Json(rows))
}
