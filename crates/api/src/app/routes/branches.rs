use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_branches))
}

/// Branches are visible to every authenticated role, unfiltered.
pub async fn list_branches(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.list_branches())).into_response()
}
