use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};

use ordena_auth::Principal;
use ordena_core::OrderId;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
        .route("/:id/status", patch(set_order_status))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list_orders(&principal))).into_response()
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<OrderId>,
) -> axum::response::Response {
    match services.get_order(&principal, id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    match services.create_order(&principal, body.items) {
        Ok(order) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": order })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn set_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<OrderId>,
    Json(body): Json<dto::SetOrderStatusRequest>,
) -> axum::response::Response {
    match services.set_order_status(&principal, id, body.status) {
        Ok(order) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true, "order": order })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
