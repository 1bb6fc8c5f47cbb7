use crate::common::state::AppState;
use crate::{common, item_usage, items, projects, users};
use axum::{Json, Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

pub fn build_router(db: DatabaseConnection) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "Warehouse Management API", version = "1.0.0"))]
    struct ApiDoc;

    let app_state = AppState::new(db);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(common::views::router(&app_state))
        .merge(projects::views::router(&app_state))
        .merge(users::views::router(&app_state))
        .merge(items::views::router(&app_state))
        .merge(item_usage::views::router(&app_state))
        .split_for_parts();

    let document = api.clone();
    router
        .route("/api-docs/openapi.json", get(move || async move { Json(document) }))
        .merge(Scalar::with_url("/api-docs", api))
        .layer(TraceLayer::new_for_http())
}
