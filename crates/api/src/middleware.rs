//! Bearer-token authentication middleware.
//!
//! Resolves the session token into a principal snapshot and attaches it as a
//! request extension; protected handlers never see an unauthenticated
//! request.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use ordena_auth::SessionStore;

use crate::app::errors;

#[derive(Clone)]
pub struct AuthState {
    pub sessions: Arc<dyn SessionStore>,
}

pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let principal = match extract_bearer(req.headers())
        .and_then(|token| state.sessions.resolve(token).ok())
    {
        Some(principal) => principal,
        None => return errors::json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "No autenticado"),
    };

    req.extensions_mut().insert(principal);
    next.run(req).await
}

/// Extract a non-empty bearer token from the Authorization header.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
