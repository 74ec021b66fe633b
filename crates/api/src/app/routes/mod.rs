use axum::{response::IntoResponse, routing::get, Json, Router};

pub mod analytics;
pub mod auth;
pub mod branches;
pub mod categories;
pub mod orders;
pub mod products;
pub mod users;

/// Router for all session-gated endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/categories", categories::router())
        .nest("/sucursales", branches::router())
        .nest("/orders", orders::router())
        .nest("/users", users::router())
        .route("/analytics", get(analytics::report))
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
