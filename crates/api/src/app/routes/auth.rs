use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::app::{dto, services::AppServices};
use crate::middleware::extract_bearer;

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.login(&body.username, &body.password) {
        Some((token, user)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "token": token,
                "user": user,
            })),
        )
            .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "success": false,
                "message": "Credenciales inválidas",
            })),
        )
            .into_response(),
    }
}

/// Revoke the supplied token. Idempotent: succeeds with or without a token,
/// known or not.
pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> axum::response::Response {
    if let Some(token) = extract_bearer(&headers) {
        services.logout(token);
    }
    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}
