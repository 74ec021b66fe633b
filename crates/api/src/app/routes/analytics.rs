use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use ordena_auth::Principal;

use crate::app::{dto, errors, services::AppServices};

/// Month/year-scoped aggregate. Admin-only.
pub async fn report(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<Principal>,
    Query(query): Query<dto::AnalyticsQuery>,
) -> axum::response::Response {
    match services.analytics(&principal, query.month, query.year) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
