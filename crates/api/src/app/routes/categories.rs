use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use ordena_auth::Principal;
use ordena_catalog::CategoryUpdate;
use ordena_core::CategoryId;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/:id", axum::routing::put(update_category).delete(delete_category))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list_categories(&principal))).into_response()
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<dto::CreateCategoryRequest>,
) -> axum::response::Response {
    match services.create_category(&principal, body.name) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "category": category })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CategoryId>,
    Json(patch): Json<CategoryUpdate>,
) -> axum::response::Response {
    match services.update_category(&principal, id, patch) {
        Ok(category) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "category": category })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<CategoryId>,
) -> axum::response::Response {
    match services.delete_category(&principal, id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
