//! services/api/src/web/middleware.rs
//!
//! Session middleware for protecting routes.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::warn;

use crate::web::state::AppState;

/// Middleware that checks for an active session.
///
/// If there is one, inserts the current `Account` into request extensions for
/// handlers to use. Otherwise returns 401 Unauthorized.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Response {
    // Release the lock before running the handler, which takes it again.
    let current = state.service.lock().await.accounts().current().cloned();

    let Some(account) = current else {
        warn!("Rejected {} {}: no active session", req.method(), req.uri().path());
        return (
            StatusCode::UNAUTHORIZED,
            "Please log in to use this feature".to_string(),
        )
            .into_response();
    };

    req.extensions_mut().insert(account);
    next.run(req).await
}
